use anchor_lang::prelude::*;

#[event]
pub struct TurnWithdrawn {
    pub config: Pubkey,
    pub wallet: Pubkey,
    pub slot: u8,
    pub amount: u64,
    /// Cursor after the withdrawal
    pub current_index: u8,
    pub time: i64,
}

#[event]
pub struct TurnSkipped {
    pub config: Pubkey,
    pub wallet: Pubkey,
    pub slot: u8,
    pub current_index: u8,
}
