//! Seeds and fixed-point constants shared across the program.

/// PDA seed for the pool account: `[POOL_SEED, token_mint]`.
pub const POOL_SEED: &[u8] = b"pool";

/// PDA seed for the pool vault token account: `[VAULT_SEED, pool]`.
pub const VAULT_SEED: &[u8] = b"vault";

/// PDA seed for participant records: `[STAKE_SEED, pool, owner]`.
pub const STAKE_SEED: &[u8] = b"stake";

/// Scaling factor of `acc_reward_per_share` and every value derived from it.
pub const PRECISION: u128 = 1_000_000_000_000;
