//! Fund Rewards Instruction
//!
//! Moves reward tokens into the pool vault. Anyone may fund; funding does
//! not touch the accumulator, it only makes accrued reward withdrawable.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{POOL_SEED, VAULT_SEED};
use crate::custodian::VaultCustodian;
use crate::error::LedgerError;
use crate::events::RewardsFunded;
use crate::ledger;
use crate::state::StakingPool;

/// Accounts for fund_rewards instruction.
#[derive(Accounts)]
pub struct FundRewards<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED, staking_pool.token_mint.as_ref()],
        bump = staking_pool.bump,
    )]
    pub staking_pool: Account<'info, StakingPool>,

    /// Pool vault (receives reward tokens).
    #[account(
        mut,
        seeds = [VAULT_SEED, staking_pool.key().as_ref()],
        bump = staking_pool.vault_bump,
        constraint = vault.mint == staking_pool.token_mint @ LedgerError::InvalidMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = funder_token_account.mint == staking_pool.token_mint @ LedgerError::InvalidMint,
        constraint = funder_token_account.owner == funder.key() @ LedgerError::Unauthorized,
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    pub funder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Handler for fund_rewards instruction.
pub fn handler(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
    let funder = ctx.accounts.funder.key();

    let mut custodian = VaultCustodian::new(
        ctx.accounts.token_program.to_account_info(),
        &ctx.accounts.vault,
        &ctx.accounts.staking_pool,
        ctx.accounts.funder.to_account_info(),
        &ctx.accounts.funder_token_account,
    );

    let staking_pool = &mut ctx.accounts.staking_pool;
    ledger::fund_rewards(staking_pool, &funder, amount, &mut custodian)?;

    emit!(RewardsFunded {
        pool: staking_pool.key(),
        funder,
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Rewards funded: {}", amount);
    Ok(())
}
