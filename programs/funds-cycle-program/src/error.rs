use anchor_lang::prelude::*;

#[error_code]
pub enum FundCycleError {
    #[msg("Caller is not the admin of this cycle.")]
    Unauthorized,
    #[msg("Cycle is already initialized for this admin.")]
    AlreadyInitialized,
    #[msg("Group size must be 1..=16 and withdraw percent at most 100.")]
    InvalidParameters,
    #[msg("Group already has the maximum number of beneficiaries.")]
    GroupFull,
    #[msg("Wallet is already a beneficiary of this cycle.")]
    DuplicateBeneficiary,
    #[msg("Rotation cannot start before every slot is filled.")]
    GroupNotFull,
    #[msg("Beneficiary is inactive.")]
    Inactive,
    #[msg("Payment already made for this round.")]
    AlreadyPaid,
    #[msg("Collateral not paid.")]
    CollateralNotPaid,
    #[msg("Monthly contribution not paid.")]
    MonthlyNotPaid,
    #[msg("Payment interval has not elapsed since the last round.")]
    TooEarly,
    #[msg("It's not your turn to withdraw.")]
    NotYourTurn,
    #[msg("Every slot has already had its turn.")]
    RotationComplete,
    #[msg("Turn holder is still active and cannot be skipped.")]
    TurnHolderActive,
    #[msg("Insufficient balance in vault.")]
    InsufficientVaultBalance,
    #[msg("Amount overflow.")]
    AmountOverflow,
    #[msg("Claiming is not enabled until the rotation completes.")]
    NotClaimable,
    #[msg("Collateral already claimed.")]
    AlreadyClaimed,
    #[msg("Beneficiary is already inactive.")]
    AlreadyInactive,
    #[msg("Account does not belong to this config.")]
    InvalidConfig,
}

impl FundCycleError {
    /// True for errors a retrying caller can treat as "already done".
    pub fn is_idempotent_confirmation(&self) -> bool {
        matches!(
            self,
            FundCycleError::AlreadyPaid
                | FundCycleError::AlreadyClaimed
                | FundCycleError::AlreadyInitialized
                | FundCycleError::AlreadyInactive
        )
    }
}


#[cfg(test)]
pub(crate) fn assert_cycle_err<T: std::fmt::Debug>(result: Result<T>, expected: FundCycleError) {
    match result {
        Err(anchor_lang::error::Error::AnchorError(err)) => {
            assert_eq!(
                err.error_code_number,
                u32::from(expected),
                "expected {:?}, got {}",
                expected,
                err.error_name
            );
        }
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}
