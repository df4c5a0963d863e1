use anchor_lang::prelude::*;

use crate::cycle;
use crate::events::CollateralClaimed;
use crate::instructions::Payout;

pub fn claim_handler(ctx: Context<Payout>) -> Result<()> {
    let amount = cycle::claim(
        &mut ctx.accounts.config,
        &mut ctx.accounts.beneficiary,
        &mut ctx.accounts.vault,
    )?;
    ctx.accounts.pay_out(amount)?;

    let config = &ctx.accounts.config;
    msg!(
        "Collateral of {} returned to beneficiary: {} | Progress: {}/{}",
        amount,
        ctx.accounts.wallet.key(),
        config.claims_completed,
        config.max_beneficiaries
    );
    if config.is_all_claimed() {
        msg!("All beneficiaries have claimed their collateral");
    }
    emit!(CollateralClaimed {
        config: config.key(),
        wallet: ctx.accounts.wallet.key(),
        amount,
        claims_completed: config.claims_completed,
    });

    Ok(())
}
