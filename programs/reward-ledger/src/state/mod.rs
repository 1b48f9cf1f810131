//! State account definitions for the reward ledger

pub mod staking_pool;
pub mod user_stake;

pub use staking_pool::StakingPool;
pub use user_stake::UserStake;
