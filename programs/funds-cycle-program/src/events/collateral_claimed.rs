use anchor_lang::prelude::*;

#[event]
pub struct CollateralClaimed {
    pub config: Pubkey,
    pub wallet: Pubkey,
    pub amount: u64,
    pub claims_completed: u8,
}
