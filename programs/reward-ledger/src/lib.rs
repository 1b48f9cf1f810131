//! Reward Ledger - time-weighted staking rewards
//!
//! Participants stake one SPL token during a fixed window and earn a share
//! of a constant per-second emission proportional to their stake over time.

use anchor_lang::prelude::*;

pub mod constants;
pub mod custodian;
pub mod error;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod math;
pub mod state;


use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod reward_ledger {
    use super::*;

    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        reward_rate: u64,
        start_time: i64,
        end_time: i64,
    ) -> Result<()> {
        instructions::initialize_pool::handler(ctx, reward_rate, start_time, end_time)
    }

    pub fn fund_rewards(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
        instructions::fund_rewards::handler(ctx, amount)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw::handler(ctx)
    }

    pub fn pending_reward(ctx: Context<PendingReward>) -> Result<u64> {
        instructions::pending_reward::handler(ctx)
    }
}
