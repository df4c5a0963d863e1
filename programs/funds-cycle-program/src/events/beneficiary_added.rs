use anchor_lang::prelude::*;

#[event]
pub struct BeneficiaryAdded {
    pub config: Pubkey,
    pub wallet: Pubkey,
    pub slot: u8,
}
