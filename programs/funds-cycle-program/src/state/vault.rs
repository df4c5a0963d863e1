use anchor_lang::prelude::*;

use crate::error::FundCycleError;

/// Tracked custody balance of a cycle. Tokens sit in the vault token account
/// (seeds: [b"vault_tokens", config.key()]) whose authority is this PDA.
/// Seeds: [b"vault", config.key()]
#[account]
#[derive(InitSpace, Debug, PartialEq, Default)]
pub struct VaultAccount {
    pub config: Pubkey,
    pub balance: u64,
    pub total_credited: u64,
    pub total_debited: u64,
    pub bump: u8,
}

impl VaultAccount {
    pub fn setup(&mut self, config: Pubkey, bump: u8) {
        *self = VaultAccount {
            config,
            balance: 0,
            total_credited: 0,
            total_debited: 0,
            bump,
        };
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(FundCycleError::AmountOverflow)?;
        let total_credited = self
            .total_credited
            .checked_add(amount)
            .ok_or(FundCycleError::AmountOverflow)?;

        self.balance = balance;
        self.total_credited = total_credited;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> Result<()> {
        if amount > self.balance {
            msg!(
                "vault debit of {} exceeds balance {}",
                amount,
                self.balance
            );
            return err!(FundCycleError::InsufficientVaultBalance);
        }
        let total_debited = self
            .total_debited
            .checked_add(amount)
            .ok_or(FundCycleError::AmountOverflow)?;

        self.balance -= amount;
        self.total_debited = total_debited;
        Ok(())
    }

    pub fn is_balanced(&self) -> bool {
        self.total_credited.checked_sub(self.total_debited) == Some(self.balance)
    }
}
