use anchor_lang::prelude::*;

use crate::constants::MAX_BENEFICIARIES;
use crate::error::FundCycleError;

/// Group-wide parameters and the rotation cursor.
/// Seeds: [b"config", admin.key()]
#[account]
#[derive(InitSpace, Debug, PartialEq, Default)]
pub struct ConfigAccount {
    pub admin: Pubkey,
    /// Mint of the single asset collected and paid out by this cycle
    pub mint: Pubkey,
    pub monthly_payout: u64,
    pub collateral_amount: u64,
    pub payment_interval_days: u16, // 0 disables the cadence check
    pub max_beneficiaries: u8,
    pub withdraw_percent: u8,
    /// Records created so far; also the next free slot
    pub beneficiary_count: u8,
    /// Completed turns. The turn holder is the slot `current_index % max_beneficiaries`.
    pub current_index: u8,
    pub claimable: bool,
    pub claims_completed: u8,
    /// Unix timestamp of the last withdrawal, 0 before the first round closes
    pub last_round_at: i64,
    /// Collateral locked by punished beneficiaries, kept by the vault
    pub forfeited_collateral: u64,
    /// Wallet per slot
    pub roster: [Option<Pubkey>; 16],
    pub bump: u8,
}

impl ConfigAccount {
    pub fn is_initialized(&self) -> bool {
        self.admin != Pubkey::default()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn setup(
        &mut self,
        admin: Pubkey,
        mint: Pubkey,
        monthly_payout: u64,
        collateral_amount: u64,
        payment_interval_days: u16,
        max_beneficiaries: u8,
        withdraw_percent: u8,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), FundCycleError::AlreadyInitialized);
        require!(
            max_beneficiaries >= 1 && max_beneficiaries as usize <= MAX_BENEFICIARIES,
            FundCycleError::InvalidParameters
        );
        require!(withdraw_percent <= 100, FundCycleError::InvalidParameters);

        *self = ConfigAccount {
            admin,
            mint,
            monthly_payout,
            collateral_amount,
            payment_interval_days,
            max_beneficiaries,
            withdraw_percent,
            beneficiary_count: 0,
            current_index: 0,
            claimable: false,
            claims_completed: 0,
            last_round_at: 0,
            forfeited_collateral: 0,
            roster: [None; MAX_BENEFICIARIES],
            bump,
        };
        Ok(())
    }

    pub fn require_admin(&self, caller: &Pubkey) -> Result<()> {
        if self.admin != *caller {
            msg!("admin check failed: caller {} is not {}", caller, self.admin);
            return err!(FundCycleError::Unauthorized);
        }
        Ok(())
    }

    pub fn is_group_full(&self) -> bool {
        self.beneficiary_count >= self.max_beneficiaries
    }

    pub fn is_rotation_complete(&self) -> bool {
        self.current_index >= self.max_beneficiaries
    }

    pub fn is_all_claimed(&self) -> bool {
        self.claims_completed >= self.max_beneficiaries
    }

    /// Slot whose turn it is. `None` once every slot has had its turn.
    pub fn turn_slot(&self) -> Option<u8> {
        if self.is_rotation_complete() {
            None
        } else {
            Some(self.current_index % self.max_beneficiaries)
        }
    }

    pub fn slot_of(&self, wallet: &Pubkey) -> Option<u8> {
        self.roster
            .iter()
            .position(|entry| entry.as_ref() == Some(wallet))
            .map(|slot| slot as u8)
    }

    /// Reserves the next free slot for `wallet`.
    pub fn assign_slot(&mut self, wallet: Pubkey) -> Result<u8> {
        require!(!self.is_group_full(), FundCycleError::GroupFull);
        require!(
            self.slot_of(&wallet).is_none(),
            FundCycleError::DuplicateBeneficiary
        );

        let slot = self.beneficiary_count;
        self.roster[slot as usize] = Some(wallet);
        self.beneficiary_count = slot
            .checked_add(1)
            .ok_or(FundCycleError::AmountOverflow)?;
        Ok(slot)
    }

    /// Checks shared by every operation that moves the cursor.
    pub fn require_rotation_open(&self) -> Result<u8> {
        require!(!self.is_rotation_complete(), FundCycleError::RotationComplete);
        require!(self.is_group_full(), FundCycleError::GroupNotFull);
        self.turn_slot().ok_or(FundCycleError::RotationComplete.into())
    }

    /// Moves the cursor one slot forward. A paid-out turn also restarts the
    /// contribution cadence at `paid_out_at`.
    pub fn advance_rotation(&mut self, paid_out_at: Option<i64>) -> Result<()> {
        self.current_index = self
            .current_index
            .checked_add(1)
            .ok_or(FundCycleError::AmountOverflow)?;
        if let Some(now) = paid_out_at {
            self.last_round_at = now;
        }
        if self.current_index >= self.max_beneficiaries {
            self.claimable = true;
            msg!(
                "Round robin cycle complete! Claiming enabled for all {} beneficiaries.",
                self.max_beneficiaries
            );
        }
        Ok(())
    }

    /// Earliest unix timestamp at which the next monthly deposit is accepted.
    pub fn next_round_opens_at(&self) -> Result<i64> {
        crate::utils::next_round_opens_at(self.last_round_at, self.payment_interval_days)
    }

    pub fn record_claim(&mut self) -> Result<()> {
        require!(!self.is_all_claimed(), FundCycleError::AlreadyClaimed);
        self.claims_completed = self
            .claims_completed
            .checked_add(1)
            .ok_or(FundCycleError::AmountOverflow)?;
        Ok(())
    }

    pub fn record_forfeit(&mut self, amount: u64) -> Result<()> {
        self.forfeited_collateral = self
            .forfeited_collateral
            .checked_add(amount)
            .ok_or(FundCycleError::AmountOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::assert_cycle_err;

    fn config_template(max_beneficiaries: u8) -> ConfigAccount {
        let mut config = ConfigAccount::default();
        config
            .setup(
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                1_000,
                10_000,
                0,
                max_beneficiaries,
                10,
                254,
            )
            .unwrap();
        config
    }

    #[test]
    fn test_roster_capacity_matches_constant() {
        let config = config_template(3);
        assert_eq!(config.roster.len(), MAX_BENEFICIARIES);
    }

    #[test]
    fn test_setup_resets_rotation() {
        let config = config_template(3);
        assert!(config.is_initialized());
        assert_eq!(config.current_index, 0);
        assert_eq!(config.claims_completed, 0);
        assert!(!config.claimable);
        assert_eq!(config.turn_slot(), Some(0));
    }

    #[test]
    fn test_setup_twice_fails() {
        let mut config = config_template(3);
        let admin = config.admin;
        let before = config.clone();
        let result = config.setup(admin, Pubkey::default(), 1, 1, 0, 3, 10, 1);
        assert_cycle_err(result, FundCycleError::AlreadyInitialized);
        assert_eq!(config, before);
    }

    #[test]
    fn test_setup_rejects_bad_parameters() {
        let mut config = config_template(1);
        config.admin = Pubkey::default();
        assert_cycle_err(
            config.setup(Pubkey::new_unique(), Pubkey::default(), 1, 1, 0, 0, 10, 1),
            FundCycleError::InvalidParameters,
        );
        assert_cycle_err(
            config.setup(Pubkey::new_unique(), Pubkey::default(), 1, 1, 0, 17, 10, 1),
            FundCycleError::InvalidParameters,
        );
        assert_cycle_err(
            config.setup(Pubkey::new_unique(), Pubkey::default(), 1, 1, 0, 3, 101, 1),
            FundCycleError::InvalidParameters,
        );
        assert!(!config.is_initialized());
    }

    #[test]
    fn test_require_admin() {
        let config = config_template(2);
        assert!(config.require_admin(&config.admin).is_ok());
        assert_cycle_err(
            config.require_admin(&Pubkey::new_unique()),
            FundCycleError::Unauthorized,
        );
    }

    #[test]
    fn test_slots_assigned_in_join_order() {
        let mut config = config_template(3);
        let wallets: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();
        for (expected, wallet) in wallets.iter().enumerate() {
            assert_eq!(config.assign_slot(*wallet).unwrap(), expected as u8);
        }
        assert!(config.is_group_full());
        assert_eq!(config.slot_of(&wallets[2]), Some(2));
        assert_cycle_err(
            config.assign_slot(Pubkey::new_unique()),
            FundCycleError::GroupFull,
        );
    }

    #[test]
    fn test_duplicate_wallet_rejected() {
        let mut config = config_template(3);
        let wallet = Pubkey::new_unique();
        config.assign_slot(wallet).unwrap();
        assert_cycle_err(config.assign_slot(wallet), FundCycleError::DuplicateBeneficiary);
        assert_eq!(config.beneficiary_count, 1);
    }

    #[test]
    fn test_rotation_requires_full_group() {
        let mut config = config_template(2);
        config.assign_slot(Pubkey::new_unique()).unwrap();
        assert_cycle_err(config.require_rotation_open(), FundCycleError::GroupNotFull);
        config.assign_slot(Pubkey::new_unique()).unwrap();
        assert_eq!(config.require_rotation_open().unwrap(), 0);
    }

    #[test]
    fn test_claimable_set_when_cursor_reaches_group_size() {
        let mut config = config_template(2);
        config.advance_rotation(Some(100)).unwrap();
        assert!(!config.claimable);
        assert_eq!(config.last_round_at, 100);
        assert_eq!(config.turn_slot(), Some(1));

        config.advance_rotation(None).unwrap();
        assert!(config.claimable);
        assert_eq!(config.last_round_at, 100);
        assert_eq!(config.turn_slot(), None);
        assert_cycle_err(config.require_rotation_open(), FundCycleError::RotationComplete);
    }

    #[test]
    fn test_record_claim_stops_at_group_size() {
        let mut config = config_template(1);
        config.record_claim().unwrap();
        assert!(config.is_all_claimed());
        assert_cycle_err(config.record_claim(), FundCycleError::AlreadyClaimed);
        assert_eq!(config.claims_completed, 1);
    }
}
