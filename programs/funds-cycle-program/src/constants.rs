pub const CONFIG_SEED: &[u8] = b"config";
pub const VAULT_SEED: &[u8] = b"vault";
pub const VAULT_TOKENS_SEED: &[u8] = b"vault_tokens";
pub const BENEFICIARY_SEED: &[u8] = b"beneficiary";

/// Capacity of the slot roster. Must match the array length in `ConfigAccount::roster`.
pub const MAX_BENEFICIARIES: usize = 16;

pub const PERCENT_DENOMINATOR: u64 = 100;
pub const SECONDS_PER_DAY: i64 = 86_400;
