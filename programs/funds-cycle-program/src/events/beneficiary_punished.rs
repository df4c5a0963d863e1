use anchor_lang::prelude::*;

use crate::state::BeneficiaryPhase;

#[event]
pub struct BeneficiaryPunished {
    pub config: Pubkey,
    pub wallet: Pubkey,
    /// Where the beneficiary stood when it was deactivated
    pub phase: BeneficiaryPhase,
    /// Collateral kept by the vault
    pub forfeited: u64,
}
