use anchor_lang::prelude::*;

use crate::{FundCycleError, PERCENT_DENOMINATOR, SECONDS_PER_DAY};

/// Share of `balance` released on one withdrawal turn.
pub fn payout_amount(balance: u64, withdraw_percent: u8) -> Result<u64> {
    let payout = (balance as u128)
        .checked_mul(withdraw_percent as u128)
        .ok_or(FundCycleError::AmountOverflow)?
        / PERCENT_DENOMINATOR as u128;

    u64::try_from(payout).map_err(|_| FundCycleError::AmountOverflow.into())
}

pub fn next_round_opens_at(last_round_at: i64, payment_interval_days: u16) -> Result<i64> {
    let interval = (payment_interval_days as i64)
        .checked_mul(SECONDS_PER_DAY)
        .ok_or(FundCycleError::AmountOverflow)?;

    last_round_at
        .checked_add(interval)
        .ok_or(FundCycleError::AmountOverflow.into())
}
