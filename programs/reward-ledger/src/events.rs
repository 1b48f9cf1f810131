//! Event definitions for the reward ledger
//!
//! Events are emitted only after the state change and the token transfer
//! both succeed.

use anchor_lang::prelude::*;

/// Emitted when a new reward pool is initialized.
#[event]
pub struct PoolInitialized {
    /// Pool account address
    pub pool: Pubkey,
    /// SPL token mint staked and paid out by this pool
    pub token_mint: Pubkey,
    /// Reward base units emitted per second
    pub reward_rate: u64,
    /// Window start (inclusive)
    pub start_time: i64,
    /// Window end (exclusive)
    pub end_time: i64,
    /// Unix timestamp
    pub timestamp: i64,
}

/// Emitted when reward tokens are added to the vault.
#[event]
pub struct RewardsFunded {
    pub pool: Pubkey,
    pub funder: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

/// Emitted when a participant stakes tokens.
#[event]
pub struct Deposited {
    /// Pool receiving the deposit
    pub pool: Pubkey,
    /// Participant
    pub owner: Pubkey,
    /// Amount deposited
    pub amount: u64,
    /// Unix timestamp
    pub timestamp: i64,
}

/// Emitted when a participant's principal is returned.
#[event]
pub struct Withdrawn {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub principal: u64,
    pub timestamp: i64,
}

/// Emitted alongside [`Withdrawn`] with the reward part of the payout.
#[event]
pub struct RewardPaid {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub reward: u64,
    pub timestamp: i64,
}
