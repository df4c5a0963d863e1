pub mod beneficiary;
pub mod config;
pub mod vault;

pub use beneficiary::*;
pub use config::*;
pub use vault::*;
