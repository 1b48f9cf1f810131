//! Deposit Instruction
//!
//! Stakes SPL tokens into the pool. The participant record is created on
//! first use and reused after a full withdrawal.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{POOL_SEED, STAKE_SEED, VAULT_SEED};
use crate::custodian::VaultCustodian;
use crate::error::LedgerError;
use crate::events::Deposited;
use crate::ledger;
use crate::state::{StakingPool, UserStake};

/// Accounts for deposit instruction.
#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED, staking_pool.token_mint.as_ref()],
        bump = staking_pool.bump,
    )]
    pub staking_pool: Account<'info, StakingPool>,

    #[account(
        init_if_needed,
        payer = owner,
        space = UserStake::LEN,
        seeds = [STAKE_SEED, staking_pool.key().as_ref(), owner.key().as_ref()],
        bump
    )]
    pub user_stake: Account<'info, UserStake>,

    /// Pool vault (receives deposited tokens).
    #[account(
        mut,
        seeds = [VAULT_SEED, staking_pool.key().as_ref()],
        bump = staking_pool.vault_bump,
        constraint = vault.mint == staking_pool.token_mint @ LedgerError::InvalidMint,
        constraint = vault.owner == staking_pool.key() @ LedgerError::Unauthorized,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Participant's source token account.
    #[account(
        mut,
        constraint = owner_token_account.mint == staking_pool.token_mint @ LedgerError::InvalidMint,
        constraint = owner_token_account.owner == owner.key() @ LedgerError::Unauthorized,
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// Handler for deposit instruction.
///
/// # Arguments
/// * `amount` - Token amount to stake (must be > 0)
///
/// Fails with `WindowClosed` outside `[start_time, end_time)`.
pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();

    let mut custodian = VaultCustodian::new(
        ctx.accounts.token_program.to_account_info(),
        &ctx.accounts.vault,
        &ctx.accounts.staking_pool,
        ctx.accounts.owner.to_account_info(),
        &ctx.accounts.owner_token_account,
    );

    let staking_pool = &mut ctx.accounts.staking_pool;
    let user_stake = &mut ctx.accounts.user_stake;

    if !user_stake.is_bound() {
        user_stake.bind(staking_pool.key(), owner, ctx.bumps.user_stake);
    }

    let receipt = ledger::deposit(
        staking_pool,
        user_stake,
        &owner,
        amount,
        now,
        &mut custodian,
    )?;

    emit!(Deposited {
        pool: staking_pool.key(),
        owner,
        amount: receipt.amount,
        timestamp: now,
    });

    msg!("Deposit successful");
    msg!("Amount: {}", receipt.amount);
    msg!("Staked: {}", receipt.staked_amount);

    Ok(())
}
