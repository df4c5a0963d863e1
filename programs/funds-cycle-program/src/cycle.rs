//! Fund-cycle state machine.
//!
//! Every operation runs its guards against the records it is handed before it
//! changes anything, so a failed call leaves config, beneficiary and vault exactly
//! as they were. The returned amount is what the instruction layer must move
//! between the caller and the vault token account.

use anchor_lang::prelude::*;

use crate::state::{BeneficiaryAccount, ConfigAccount, TurnOutcome, VaultAccount};
use crate::{utils, FundCycleError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleParams {
    pub monthly_payout: u64,
    pub collateral_amount: u64,
    pub payment_interval_days: u16,
    pub max_beneficiaries: u8,
    pub withdraw_percent: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleSnapshot {
    pub claimable: bool,
    pub current_index: u8,
    /// `None` once the rotation is complete
    pub turn_slot: Option<u8>,
    pub beneficiary_count: u8,
    pub max_beneficiaries: u8,
    pub claims_completed: u8,
    pub vault_balance: u64,
    pub forfeited_collateral: u64,
}

#[allow(clippy::too_many_arguments)]
pub fn initialize(
    config: &mut ConfigAccount,
    vault: &mut VaultAccount,
    admin: Pubkey,
    mint: Pubkey,
    config_key: Pubkey,
    params: CycleParams,
    config_bump: u8,
    vault_bump: u8,
) -> Result<()> {
    config.setup(
        admin,
        mint,
        params.monthly_payout,
        params.collateral_amount,
        params.payment_interval_days,
        params.max_beneficiaries,
        params.withdraw_percent,
        config_bump,
    )?;
    vault.setup(config_key, vault_bump);
    Ok(())
}

/// Returns the slot assigned to `wallet`.
pub fn add_beneficiary(
    config: &mut ConfigAccount,
    config_key: Pubkey,
    beneficiary: &mut BeneficiaryAccount,
    caller: &Pubkey,
    wallet: Pubkey,
    bump: u8,
) -> Result<u8> {
    config.require_admin(caller)?;
    require!(!config.is_group_full(), FundCycleError::GroupFull);
    require!(
        !beneficiary.is_initialized() && config.slot_of(&wallet).is_none(),
        FundCycleError::DuplicateBeneficiary
    );

    let slot = config.assign_slot(wallet)?;
    beneficiary.enroll(config_key, wallet, slot, bump)?;
    Ok(slot)
}

pub fn deposit_collateral(
    config: &ConfigAccount,
    beneficiary: &mut BeneficiaryAccount,
    vault: &mut VaultAccount,
) -> Result<u64> {
    beneficiary.require_active()?;
    require!(!beneficiary.claimed, FundCycleError::AlreadyClaimed);
    require!(!beneficiary.collateral_paid, FundCycleError::AlreadyPaid);

    let amount = config.collateral_amount;
    vault.credit(amount)?;
    beneficiary.record_contribution(amount)?;
    beneficiary.collateral_paid = true;
    Ok(amount)
}

pub fn deposit_monthly(
    config: &ConfigAccount,
    beneficiary: &mut BeneficiaryAccount,
    vault: &mut VaultAccount,
    now: i64,
) -> Result<u64> {
    beneficiary.require_active()?;
    require!(!beneficiary.claimed, FundCycleError::AlreadyClaimed);
    require!(!config.is_rotation_complete(), FundCycleError::RotationComplete);
    require!(beneficiary.collateral_paid, FundCycleError::CollateralNotPaid);
    require!(!beneficiary.monthly_paid, FundCycleError::AlreadyPaid);
    if config.payment_interval_days > 0 {
        let opens_at = config.next_round_opens_at()?;
        if now < opens_at {
            msg!("deposit_monthly: next round opens at {}, now {}", opens_at, now);
            return err!(FundCycleError::TooEarly);
        }
    }

    let amount = config.monthly_payout;
    vault.credit(amount)?;
    beneficiary.record_contribution(amount)?;
    beneficiary.monthly_paid = true;
    beneficiary.last_payment_ts = now;
    Ok(amount)
}

pub fn withdraw(
    config: &mut ConfigAccount,
    beneficiary: &mut BeneficiaryAccount,
    vault: &mut VaultAccount,
    now: i64,
) -> Result<u64> {
    let turn_slot = config.require_rotation_open()?;
    beneficiary.require_active()?;
    if beneficiary.slot != turn_slot {
        msg!(
            "withdraw: slot {} called during the turn of slot {}",
            beneficiary.slot,
            turn_slot
        );
        return err!(FundCycleError::NotYourTurn);
    }
    require!(beneficiary.collateral_paid, FundCycleError::CollateralNotPaid);
    require!(beneficiary.monthly_paid, FundCycleError::MonthlyNotPaid);

    let amount = utils::payout_amount(vault.balance, config.withdraw_percent)?;
    vault.debit(amount)?;
    beneficiary.record_receipt(amount)?;
    beneficiary.monthly_paid = false;
    beneficiary.turn = TurnOutcome::Withdrawn;
    config.advance_rotation(Some(now))?;
    Ok(amount)
}

/// Advances the rotation past a punished turn holder without a payout.
/// Returns the skipped slot.
pub fn skip_turn(
    config: &mut ConfigAccount,
    beneficiary: &mut BeneficiaryAccount,
    caller: &Pubkey,
) -> Result<u8> {
    config.require_admin(caller)?;
    let turn_slot = config.require_rotation_open()?;
    require!(beneficiary.slot == turn_slot, FundCycleError::NotYourTurn);
    require!(!beneficiary.active, FundCycleError::TurnHolderActive);

    beneficiary.turn = TurnOutcome::Skipped;
    config.advance_rotation(None)?;
    Ok(turn_slot)
}

/// Deactivates `beneficiary`. Returns the collateral it forfeits to the vault.
pub fn punish(
    config: &mut ConfigAccount,
    beneficiary: &mut BeneficiaryAccount,
    caller: &Pubkey,
) -> Result<u64> {
    config.require_admin(caller)?;
    require!(!beneficiary.claimed, FundCycleError::AlreadyClaimed);
    require!(beneficiary.active, FundCycleError::AlreadyInactive);

    let forfeited = beneficiary.refundable_collateral(config.collateral_amount);
    config.record_forfeit(forfeited)?;
    beneficiary.active = false;
    Ok(forfeited)
}

/// Returns the refund paid to the claimant; 0 when the collateral was forfeited.
pub fn claim(
    config: &mut ConfigAccount,
    beneficiary: &mut BeneficiaryAccount,
    vault: &mut VaultAccount,
) -> Result<u64> {
    require!(config.claimable, FundCycleError::NotClaimable);
    require!(!beneficiary.claimed, FundCycleError::AlreadyClaimed);
    require!(!config.is_all_claimed(), FundCycleError::AlreadyClaimed);

    let refund = beneficiary.refundable_collateral(config.collateral_amount);
    vault.debit(refund)?;
    beneficiary.record_receipt(refund)?;
    beneficiary.claimed = true;
    config.record_claim()?;
    Ok(refund)
}

pub fn status(config: &ConfigAccount, vault: &VaultAccount) -> CycleSnapshot {
    CycleSnapshot {
        claimable: config.claimable,
        current_index: config.current_index,
        turn_slot: config.turn_slot(),
        beneficiary_count: config.beneficiary_count,
        max_beneficiaries: config.max_beneficiaries,
        claims_completed: config.claims_completed,
        vault_balance: vault.balance,
        forfeited_collateral: config.forfeited_collateral,
    }
}

/// Vault balance implied by the beneficiary records: everything they paid in
/// minus everything paid out to them.
pub fn expected_vault_balance<'a>(
    beneficiaries: impl IntoIterator<Item = &'a BeneficiaryAccount>,
) -> Option<u64> {
    let mut contributed: u64 = 0;
    let mut received: u64 = 0;
    for beneficiary in beneficiaries {
        contributed = contributed.checked_add(beneficiary.total_contributed)?;
        received = received.checked_add(beneficiary.total_received)?;
    }
    contributed.checked_sub(received)
}
