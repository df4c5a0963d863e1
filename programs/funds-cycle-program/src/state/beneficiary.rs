use anchor_lang::prelude::*;

use crate::error::FundCycleError;

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TurnOutcome {
    #[default]
    Pending,
    Withdrawn,
    Skipped,
}

/// Where a beneficiary stands in the cycle, derived from its flags.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BeneficiaryPhase {
    CollateralPending,
    MonthlyPending,
    MonthlyPaid,
    Withdrawn,
    Skipped,
    Punished,
    Claimed,
}

/// Seeds: [b"beneficiary", config.key(), wallet.key()]
#[account]
#[derive(InitSpace, Debug, PartialEq, Default)]
pub struct BeneficiaryAccount {
    pub config: Pubkey,
    pub wallet: Pubkey,
    pub slot: u8,
    pub collateral_paid: bool,
    pub monthly_paid: bool,
    pub active: bool,
    pub claimed: bool,
    pub turn: TurnOutcome,
    /// Collateral and monthly amounts credited to the vault by this wallet
    pub total_contributed: u64,
    /// Payouts and refunds debited from the vault to this wallet
    pub total_received: u64,
    pub last_payment_ts: i64,
    pub bump: u8,
}

impl BeneficiaryAccount {
    pub fn is_initialized(&self) -> bool {
        self.wallet != Pubkey::default()
    }

    pub fn enroll(&mut self, config: Pubkey, wallet: Pubkey, slot: u8, bump: u8) -> Result<()> {
        require!(!self.is_initialized(), FundCycleError::DuplicateBeneficiary);

        *self = BeneficiaryAccount {
            config,
            wallet,
            slot,
            collateral_paid: false,
            monthly_paid: false,
            active: true,
            claimed: false,
            turn: TurnOutcome::Pending,
            total_contributed: 0,
            total_received: 0,
            last_payment_ts: 0,
            bump,
        };
        Ok(())
    }

    pub fn require_active(&self) -> Result<()> {
        require!(self.active, FundCycleError::Inactive);
        Ok(())
    }

    /// Collateral is refundable only to a wallet that paid it and was never punished.
    pub fn refundable_collateral(&self, collateral_amount: u64) -> u64 {
        if self.active && self.collateral_paid {
            collateral_amount
        } else {
            0
        }
    }

    pub fn record_contribution(&mut self, amount: u64) -> Result<()> {
        self.total_contributed = self
            .total_contributed
            .checked_add(amount)
            .ok_or(FundCycleError::AmountOverflow)?;
        Ok(())
    }

    pub fn record_receipt(&mut self, amount: u64) -> Result<()> {
        self.total_received = self
            .total_received
            .checked_add(amount)
            .ok_or(FundCycleError::AmountOverflow)?;
        Ok(())
    }

    pub fn phase(&self) -> BeneficiaryPhase {
        if self.claimed {
            return BeneficiaryPhase::Claimed;
        }
        if !self.active {
            return BeneficiaryPhase::Punished;
        }
        match self.turn {
            TurnOutcome::Withdrawn => BeneficiaryPhase::Withdrawn,
            TurnOutcome::Skipped => BeneficiaryPhase::Skipped,
            TurnOutcome::Pending if !self.collateral_paid => BeneficiaryPhase::CollateralPending,
            TurnOutcome::Pending if !self.monthly_paid => BeneficiaryPhase::MonthlyPending,
            TurnOutcome::Pending => BeneficiaryPhase::MonthlyPaid,
        }
    }
}
