use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::constants::*;
use crate::error::FundCycleError;
use crate::state::{BeneficiaryAccount, ConfigAccount, VaultAccount};

/// Accounts for instructions that move funds out of the vault to the caller.
#[derive(Accounts)]
pub struct Payout<'info> {
    #[account(mut)]
    pub wallet: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED, config.admin.as_ref()],
        bump = config.bump,
        has_one = mint @ FundCycleError::InvalidConfig,
    )]
    pub config: Account<'info, ConfigAccount>,

    #[account(
        mut,
        seeds = [BENEFICIARY_SEED, config.key().as_ref(), wallet.key().as_ref()],
        bump = beneficiary.bump,
        constraint = beneficiary.config == config.key() @ FundCycleError::InvalidConfig,
    )]
    pub beneficiary: Account<'info, BeneficiaryAccount>,

    #[account(
        mut,
        seeds = [VAULT_SEED, config.key().as_ref()],
        bump = vault.bump,
        constraint = vault.config == config.key() @ FundCycleError::InvalidConfig,
    )]
    pub vault: Account<'info, VaultAccount>,

    #[account(
        mut,
        seeds = [VAULT_TOKENS_SEED, config.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = vault,
        token::token_program = token_program,
    )]
    pub vault_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = wallet,
        associated_token::authority = wallet,
        associated_token::mint = mint,
        associated_token::token_program = token_program,
    )]
    pub wallet_token_account: InterfaceAccount<'info, TokenAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

impl Payout<'_> {
    pub fn pay_out(&self, amount: u64) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        let cpi_accounts = TransferChecked {
            from: self.vault_token_account.to_account_info(),
            to: self.wallet_token_account.to_account_info(),
            mint: self.mint.to_account_info(),
            authority: self.vault.to_account_info(),
        };

        let config_key = self.config.key();
        let signer_seeds: &[&[u8]] = &[VAULT_SEED, config_key.as_ref(), &[self.vault.bump]];
        let s = &[signer_seeds];
        let cpi_ctx =
            CpiContext::new_with_signer(self.token_program.to_account_info(), cpi_accounts, s);
        token_interface::transfer_checked(cpi_ctx, amount, self.mint.decimals)
    }
}
