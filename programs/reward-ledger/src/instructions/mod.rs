//! Instruction handlers for the reward ledger

pub mod deposit;
pub mod fund_rewards;
pub mod initialize_pool;
pub mod pending_reward;
pub mod withdraw;

pub use deposit::*;
pub use fund_rewards::*;
pub use initialize_pool::*;
pub use pending_reward::*;
pub use withdraw::*;
