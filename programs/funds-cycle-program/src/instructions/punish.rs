use anchor_lang::prelude::*;

use crate::constants::*;
use crate::cycle;
use crate::error::FundCycleError;
use crate::events::BeneficiaryPunished;
use crate::state::{BeneficiaryAccount, ConfigAccount};

#[derive(Accounts)]
pub struct Punish<'info> {
    /// Checked against `config.admin` in the handler
    pub admin: Signer<'info>,

    #[account(mut, seeds = [CONFIG_SEED, config.admin.as_ref()], bump = config.bump)]
    pub config: Account<'info, ConfigAccount>,

    #[account(
        mut,
        seeds = [BENEFICIARY_SEED, config.key().as_ref(), beneficiary.wallet.as_ref()],
        bump = beneficiary.bump,
        constraint = beneficiary.config == config.key() @ FundCycleError::InvalidConfig,
    )]
    pub beneficiary: Account<'info, BeneficiaryAccount>,
}

pub fn punish_handler(ctx: Context<Punish>) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let phase = ctx.accounts.beneficiary.phase();
    let forfeited = cycle::punish(
        &mut ctx.accounts.config,
        &mut ctx.accounts.beneficiary,
        &admin,
    )?;

    let wallet = ctx.accounts.beneficiary.wallet;
    msg!(
        "Beneficiary {} deactivated in phase {:?}, {} collateral forfeited to the vault",
        wallet,
        phase,
        forfeited
    );
    emit!(BeneficiaryPunished {
        config: ctx.accounts.config.key(),
        wallet,
        phase,
        forfeited,
    });

    Ok(())
}
