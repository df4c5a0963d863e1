use anchor_lang::prelude::*;

use crate::constants::*;
use crate::cycle::{self, CycleSnapshot};
use crate::state::{ConfigAccount, VaultAccount};

#[derive(Accounts)]
pub struct ReadOnlyStatus<'info> {
    #[account(seeds = [CONFIG_SEED, config.admin.as_ref()], bump = config.bump)]
    pub config: Account<'info, ConfigAccount>,
    #[account(seeds = [VAULT_SEED, config.key().as_ref()], bump = vault.bump)]
    pub vault: Account<'info, VaultAccount>,
}

pub fn cycle_status_handler(ctx: Context<ReadOnlyStatus>) -> Result<CycleSnapshot> {
    Ok(cycle::status(&ctx.accounts.config, &ctx.accounts.vault))
}
