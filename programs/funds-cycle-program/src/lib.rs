#![allow(unexpected_cfgs)]

pub mod constants;
pub mod cycle;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use cycle::CycleSnapshot;
pub use error::*;
pub use instructions::*;
use solana_security_txt::security_txt;
pub use state::*;

declare_id!("BAmKovDnmFfuvXASrEoRa115N3F4QEBCkjUQtRAvkpAj");

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "Funds Cycle Program",
    project_url: "https://github.com/solana-turbin3/Q3_25_Builder_NitinYadav",
    contacts: "link:https://github.com/solana-turbin3/Q3_25_Builder_NitinYadav/issues",
    policy: "https://github.com/solana-turbin3/Q3_25_Builder_NitinYadav/blob/main/SECURITY.md",
    preferred_languages: "en",
    source_code: "https://github.com/solana-turbin3/Q3_25_Builder_NitinYadav"
}

#[program]
pub mod funds_cycle_program {
    use super::*;

    pub fn initialize(
        ctx: Context<InitializeCycle>,
        monthly_payout: u64,
        collateral_amount: u64,
        payment_interval_days: u16,
        max_beneficiaries: u8,
        withdraw_percent: u8,
    ) -> Result<()> {
        initialize::initialize_handler(
            ctx,
            monthly_payout,
            collateral_amount,
            payment_interval_days,
            max_beneficiaries,
            withdraw_percent,
        )
    }

    pub fn add_beneficiary(ctx: Context<AddBeneficiary>) -> Result<()> {
        add_beneficiary::add_beneficiary_handler(ctx)
    }

    pub fn deposit_collateral(ctx: Context<Deposit>) -> Result<()> {
        deposit::deposit_collateral_handler(ctx)
    }

    pub fn deposit_monthly(ctx: Context<Deposit>) -> Result<()> {
        deposit::deposit_monthly_handler(ctx)
    }

    pub fn withdraw(ctx: Context<Payout>) -> Result<()> {
        withdraw::withdraw_handler(ctx)
    }

    pub fn skip_turn(ctx: Context<SkipTurn>) -> Result<()> {
        skip_turn::skip_turn_handler(ctx)
    }

    pub fn punish(ctx: Context<Punish>) -> Result<()> {
        punish::punish_handler(ctx)
    }

    pub fn claim_collateral(ctx: Context<Payout>) -> Result<()> {
        claim::claim_handler(ctx)
    }

    pub fn cycle_status(ctx: Context<ReadOnlyStatus>) -> Result<CycleSnapshot> {
        cycle_status::cycle_status_handler(ctx)
    }
}
