use crate::constants::*;
use crate::cycle;
use crate::events::BeneficiaryAdded;
use crate::state::*;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct AddBeneficiary<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(mut, seeds = [CONFIG_SEED, config.admin.as_ref()], bump = config.bump)]
    pub config: Account<'info, ConfigAccount>,

    /// CHECK: Only used as a key
    pub wallet: AccountInfo<'info>,

    #[account(
        init_if_needed,
        payer = admin,
        seeds = [BENEFICIARY_SEED, config.key().as_ref(), wallet.key().as_ref()],
        bump,
        space = 8 + BeneficiaryAccount::INIT_SPACE,
    )]
    pub beneficiary: Account<'info, BeneficiaryAccount>,

    pub system_program: Program<'info, System>,
}

pub fn add_beneficiary_handler(ctx: Context<AddBeneficiary>) -> Result<()> {
    let config_key = ctx.accounts.config.key();
    let admin = ctx.accounts.admin.key();
    let wallet = ctx.accounts.wallet.key();

    let slot = cycle::add_beneficiary(
        &mut ctx.accounts.config,
        config_key,
        &mut ctx.accounts.beneficiary,
        &admin,
        wallet,
        ctx.bumps.beneficiary,
    )?;

    msg!(
        "Beneficiary {} joined at slot {} ({}/{})",
        wallet,
        slot,
        ctx.accounts.config.beneficiary_count,
        ctx.accounts.config.max_beneficiaries
    );
    emit!(BeneficiaryAdded {
        config: config_key,
        wallet,
        slot,
    });

    Ok(())
}
