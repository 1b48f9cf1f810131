//! Initialize Pool Instruction

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{POOL_SEED, VAULT_SEED};
use crate::events::PoolInitialized;
use crate::state::StakingPool;

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(
        init,
        payer = creator,
        space = StakingPool::LEN,
        seeds = [POOL_SEED, token_mint.key().as_ref()],
        bump
    )]
    pub staking_pool: Box<Account<'info, StakingPool>>,

    #[account(
        init,
        payer = creator,
        token::mint = token_mint,
        token::authority = staking_pool,
        seeds = [VAULT_SEED, staking_pool.key().as_ref()],
        bump
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    pub token_mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn handler(
    ctx: Context<InitializePool>,
    reward_rate: u64,
    start_time: i64,
    end_time: i64,
) -> Result<()> {
    let staking_pool = &mut ctx.accounts.staking_pool;

    staking_pool.initialize(
        ctx.accounts.creator.key(),
        ctx.accounts.token_mint.key(),
        ctx.accounts.vault.key(),
        reward_rate,
        start_time,
        end_time,
        ctx.bumps.staking_pool,
        ctx.bumps.vault,
    )?;

    emit!(PoolInitialized {
        pool: staking_pool.key(),
        token_mint: ctx.accounts.token_mint.key(),
        reward_rate,
        start_time,
        end_time,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Reward pool initialized");
    Ok(())
}
