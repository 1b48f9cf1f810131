//! Withdraw Instruction
//!
//! Returns the participant's whole stake together with every reward it has
//! accrued. There is no partial withdrawal.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{POOL_SEED, STAKE_SEED, VAULT_SEED};
use crate::custodian::VaultCustodian;
use crate::error::LedgerError;
use crate::events::{RewardPaid, Withdrawn};
use crate::ledger;
use crate::state::{StakingPool, UserStake};

/// Accounts for withdraw instruction.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED, staking_pool.token_mint.as_ref()],
        bump = staking_pool.bump,
    )]
    pub staking_pool: Account<'info, StakingPool>,

    #[account(
        mut,
        seeds = [STAKE_SEED, staking_pool.key().as_ref(), owner.key().as_ref()],
        bump = user_stake.bump,
        has_one = owner @ LedgerError::Unauthorized,
        constraint = user_stake.pool == staking_pool.key() @ LedgerError::Unauthorized,
    )]
    pub user_stake: Account<'info, UserStake>,

    #[account(
        mut,
        seeds = [VAULT_SEED, staking_pool.key().as_ref()],
        bump = staking_pool.vault_bump,
        constraint = vault.mint == staking_pool.token_mint @ LedgerError::InvalidMint,
        constraint = vault.owner == staking_pool.key() @ LedgerError::Unauthorized,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Participant's destination token account.
    #[account(
        mut,
        constraint = owner_token_account.mint == staking_pool.token_mint @ LedgerError::InvalidMint,
        constraint = owner_token_account.owner == owner.key() @ LedgerError::Unauthorized,
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Handler for withdraw instruction.
///
/// # Verification Flow
/// 1. Settle the pool accumulator to the current clock
/// 2. Realize the participant's pending reward
/// 3. Check the vault covers principal + reward
/// 4. Transfer both in one CPI signed by the pool PDA
pub fn handler(ctx: Context<Withdraw>) -> Result<()> {
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

    let receipt = ledger::withdraw(staking_pool, user_stake, &owner, now, &mut custodian)?;

    emit!(Withdrawn {
        pool: staking_pool.key(),
        owner,
        principal: receipt.principal,
        timestamp: now,
    });
    emit!(RewardPaid {
        pool: staking_pool.key(),
        owner,
        reward: receipt.reward,
        timestamp: now,
    });

    msg!("Withdrawal successful");
    msg!("Principal: {}", receipt.principal);
    msg!("Reward: {}", receipt.reward);

    Ok(())
}
