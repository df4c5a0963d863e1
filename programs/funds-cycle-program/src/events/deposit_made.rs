use anchor_lang::prelude::*;

#[event]
pub struct CollateralDeposited {
    pub config: Pubkey,
    pub wallet: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}

#[event]
pub struct MonthlyDeposited {
    pub config: Pubkey,
    pub wallet: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
    pub time: i64,
}
