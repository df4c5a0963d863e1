pub mod add_beneficiary;
pub mod claim;
pub mod cycle_status;
pub mod deposit;
pub mod initialize;
pub mod payout;
pub mod punish;
pub mod skip_turn;
pub mod withdraw;

pub use add_beneficiary::*;
pub use claim::*;
pub use cycle_status::*;
pub use deposit::*;
pub use initialize::*;
pub use payout::*;
pub use punish::*;
pub use skip_turn::*;
pub use withdraw::*;
