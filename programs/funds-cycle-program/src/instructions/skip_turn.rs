use anchor_lang::prelude::*;

use crate::constants::*;
use crate::cycle;
use crate::error::FundCycleError;
use crate::events::TurnSkipped;
use crate::state::{BeneficiaryAccount, ConfigAccount};

#[derive(Accounts)]
pub struct SkipTurn<'info> {
    pub admin: Signer<'info>,

    #[account(mut, seeds = [CONFIG_SEED, config.admin.as_ref()], bump = config.bump)]
    pub config: Account<'info, ConfigAccount>,

    /// The punished turn holder
    #[account(
        mut,
        seeds = [BENEFICIARY_SEED, config.key().as_ref(), beneficiary.wallet.as_ref()],
        bump = beneficiary.bump,
        constraint = beneficiary.config == config.key() @ FundCycleError::InvalidConfig,
    )]
    pub beneficiary: Account<'info, BeneficiaryAccount>,
}

pub fn skip_turn_handler(ctx: Context<SkipTurn>) -> Result<()> {
    let admin = ctx.accounts.admin.key();

    let slot = cycle::skip_turn(
        &mut ctx.accounts.config,
        &mut ctx.accounts.beneficiary,
        &admin,
    )?;

    emit!(TurnSkipped {
        config: ctx.accounts.config.key(),
        wallet: ctx.accounts.beneficiary.wallet,
        slot,
        current_index: ctx.accounts.config.current_index,
    });

    Ok(())
}
