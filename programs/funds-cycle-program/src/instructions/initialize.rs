use crate::constants::*;
use crate::cycle::{self, CycleParams};
use crate::events::*;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

#[derive(Accounts)]
pub struct InitializeCycle<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init_if_needed,
        payer = admin,
        seeds = [CONFIG_SEED, admin.key().as_ref()],
        bump,
        space = 8 + ConfigAccount::INIT_SPACE,
    )]
    pub config: Account<'info, ConfigAccount>,

    #[account(
        init_if_needed,
        payer = admin,
        seeds = [VAULT_SEED, config.key().as_ref()],
        bump,
        space = 8 + VaultAccount::INIT_SPACE,
    )]
    pub vault: Account<'info, VaultAccount>,

    #[account(
        init_if_needed,
        payer = admin,
        seeds = [VAULT_TOKENS_SEED, config.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = vault,
        token::token_program = token_program,
    )]
    pub vault_token_account: InterfaceAccount<'info, TokenAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn initialize_handler(
    ctx: Context<InitializeCycle>,
    monthly_payout: u64,
    collateral_amount: u64,
    payment_interval_days: u16,
    max_beneficiaries: u8,
    withdraw_percent: u8,
) -> Result<()> {
    let config_key = ctx.accounts.config.key();
    let admin = ctx.accounts.admin.key();
    let mint = ctx.accounts.mint.key();

    cycle::initialize(
        &mut ctx.accounts.config,
        &mut ctx.accounts.vault,
        admin,
        mint,
        config_key,
        CycleParams {
            monthly_payout,
            collateral_amount,
            payment_interval_days,
            max_beneficiaries,
            withdraw_percent,
        },
        ctx.bumps.config,
        ctx.bumps.vault,
    )?;

    emit!(CycleInitialized {
        config: config_key,
        admin,
        mint,
        monthly_payout,
        collateral_amount,
        max_beneficiaries,
        withdraw_percent,
    });

    Ok(())
}
