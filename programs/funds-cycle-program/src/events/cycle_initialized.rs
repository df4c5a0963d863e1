use anchor_lang::prelude::*;

#[event]
pub struct CycleInitialized {
    pub config: Pubkey,
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub monthly_payout: u64,
    pub collateral_amount: u64,
    pub max_beneficiaries: u8,
    pub withdraw_percent: u8,
}
