use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::constants::*;
use crate::cycle;
use crate::error::FundCycleError;
use crate::events::{CollateralDeposited, MonthlyDeposited};
use crate::state::{BeneficiaryAccount, ConfigAccount, VaultAccount};

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub wallet: Signer<'info>,

    #[account(
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

    #[account(mut, seeds = [VAULT_SEED, config.key().as_ref()], bump = vault.bump)]
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
        mut,
        token::mint = mint,
        token::authority = wallet,
        token::token_program = token_program,
    )]
    pub wallet_token_account: InterfaceAccount<'info, TokenAccount>,

    pub mint: InterfaceAccount<'info, Mint>,
    pub token_program: Interface<'info, TokenInterface>,
}

impl Deposit<'_> {
    fn pay_in(&self, amount: u64) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        let cpi_accounts = TransferChecked {
            from: self.wallet_token_account.to_account_info(),
            to: self.vault_token_account.to_account_info(),
            mint: self.mint.to_account_info(),
            authority: self.wallet.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), cpi_accounts);
        token_interface::transfer_checked(cpi_ctx, amount, self.mint.decimals)
    }
}

pub fn deposit_collateral_handler(ctx: Context<Deposit>) -> Result<()> {
    let amount = cycle::deposit_collateral(
        &ctx.accounts.config,
        &mut ctx.accounts.beneficiary,
        &mut ctx.accounts.vault,
    )?;
    ctx.accounts.pay_in(amount)?;

    emit!(CollateralDeposited {
        config: ctx.accounts.config.key(),
        wallet: ctx.accounts.wallet.key(),
        amount,
        vault_balance: ctx.accounts.vault.balance,
    });

    Ok(())
}

pub fn deposit_monthly_handler(ctx: Context<Deposit>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let amount = cycle::deposit_monthly(
        &ctx.accounts.config,
        &mut ctx.accounts.beneficiary,
        &mut ctx.accounts.vault,
        now,
    )?;
    ctx.accounts.pay_in(amount)?;

    emit!(MonthlyDeposited {
        config: ctx.accounts.config.key(),
        wallet: ctx.accounts.wallet.key(),
        amount,
        vault_balance: ctx.accounts.vault.balance,
        time: now,
    });

    Ok(())
}
