use anchor_lang::prelude::*;

use crate::cycle;
use crate::events::TurnWithdrawn;
use crate::instructions::Payout;

pub fn withdraw_handler(ctx: Context<Payout>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let amount = cycle::withdraw(
        &mut ctx.accounts.config,
        &mut ctx.accounts.beneficiary,
        &mut ctx.accounts.vault,
        now,
    )?;
    ctx.accounts.pay_out(amount)?;

    let config = &ctx.accounts.config;
    msg!(
        "Turn {}/{} paid {} to {}",
        config.current_index,
        config.max_beneficiaries,
        amount,
        ctx.accounts.wallet.key()
    );
    emit!(TurnWithdrawn {
        config: config.key(),
        wallet: ctx.accounts.wallet.key(),
        slot: ctx.accounts.beneficiary.slot,
        amount,
        current_index: config.current_index,
        time: now,
    });

    Ok(())
}
