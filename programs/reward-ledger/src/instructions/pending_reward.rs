//! Pending Reward View
//!
//! Read-only: returns the reward a withdrawal at the current clock would
//! pay, through the instruction's return data.

use anchor_lang::prelude::*;

use crate::constants::POOL_SEED;
use crate::error::LedgerError;
use crate::ledger;
use crate::state::{StakingPool, UserStake};

#[derive(Accounts)]
pub struct PendingReward<'info> {
    #[account(
        seeds = [POOL_SEED, staking_pool.token_mint.as_ref()],
        bump = staking_pool.bump,
    )]
    pub staking_pool: Account<'info, StakingPool>,

    /// Participant record; `None` for a wallet that never deposited.
    #[account(
        constraint = user_stake.pool == staking_pool.key() @ LedgerError::Unauthorized,
    )]
    pub user_stake: Option<Account<'info, UserStake>>,
}

pub fn handler(ctx: Context<PendingReward>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let stake = ctx.accounts.user_stake.as_deref();
    ledger::pending_reward(&ctx.accounts.staking_pool, stake, now)
}
