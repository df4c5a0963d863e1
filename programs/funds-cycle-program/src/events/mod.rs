pub mod beneficiary_added;
pub mod beneficiary_punished;
pub mod collateral_claimed;
pub mod cycle_initialized;
pub mod deposit_made;
pub mod turn_completed;

pub use beneficiary_added::*;
pub use beneficiary_punished::*;
pub use collateral_claimed::*;
pub use cycle_initialized::*;
pub use deposit_made::*;
pub use turn_completed::*;
