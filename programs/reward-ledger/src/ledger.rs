//! Core ledger operations
//!
//! Everything here works on explicit state and an explicit timestamp. The
//! instruction handlers load the accounts and read the clock; this module
//! only does the accounting.
//!
//! # Accrual
//! The pool keeps one accumulator, `acc_reward_per_share`: the reward earned
//! by a single staked unit since the window opened. A participant's reward
//! since their last settlement is
//!
//! ```text
//! staked_amount * acc_reward_per_share / PRECISION - reward_debt
//! ```
//!
//! where `reward_debt` is the first term evaluated at that settlement. Each
//! operation settles the accumulator lazily, so no operation touches more
//! than the pool and one participant.
//!
//! # Atomicity
//! Mutating operations work on copies of the pool and participant records
//! and write them back only once the custodian transfer has succeeded.
//! An error leaves both records exactly as they were.

use anchor_lang::prelude::*;

use crate::custodian::Custodian;
use crate::error::LedgerError;
use crate::state::{StakingPool, UserStake};

/// Outcome of a successful deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositReceipt {
    pub amount: u64,
    pub staked_amount: u64,
    pub reward_due: u64,
}

/// Outcome of a successful withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawReceipt {
    pub principal: u64,
    pub reward: u64,
}

impl WithdrawReceipt {
    /// Total amount transferred to the participant.
    pub fn payout(&self) -> Result<u64> {
        self.principal
            .checked_add(self.reward)
            .ok_or(error!(LedgerError::ArithmeticOverflow))
    }
}

/// Bring the pool accumulator up to `now`.
pub fn settle(pool: &mut StakingPool, now: i64) -> Result<()> {
    pool.settle(now)
}

fn require_owner(stake: &UserStake, owner: &Pubkey) -> Result<()> {
    require!(
        !stake.is_bound() || stake.owner == *owner,
        LedgerError::Unauthorized
    );
    Ok(())
}

/// Stake `amount` for `owner`.
pub fn deposit<C: Custodian + ?Sized>(
    pool: &mut StakingPool,
    stake: &mut UserStake,
    owner: &Pubkey,
    amount: u64,
    now: i64,
    custodian: &mut C,
) -> Result<DepositReceipt> {
    require!(pool.is_open(now), LedgerError::WindowClosed);
    require!(amount > 0, LedgerError::ZeroAmount);
    require_owner(stake, owner)?;

    let mut next_pool = pool.clone();
    let mut next_stake = stake.clone();

    next_pool.settle(now)?;
    next_stake.realize(next_pool.acc_reward_per_share)?;
    next_stake.add_stake(amount, next_pool.acc_reward_per_share, now)?;
    next_pool.add_stake(amount)?;

    custodian.transfer_in(owner, amount)?;

    *pool = next_pool;
    *stake = next_stake;

    Ok(DepositReceipt {
        amount,
        staked_amount: stake.staked_amount,
        reward_due: stake.reward_due,
    })
}

/// Exit `owner`'s whole position, paying principal and reward together.
///
/// Fails with `InsufficientRewardFunds` rather than paying out a partial
/// amount when custody cannot cover every staked principal plus this reward.
pub fn withdraw<C: Custodian + ?Sized>(
    pool: &mut StakingPool,
    stake: &mut UserStake,
    owner: &Pubkey,
    now: i64,
    custodian: &mut C,
) -> Result<WithdrawReceipt> {
    require!(stake.is_active(), LedgerError::NoActiveStake);
    require_owner(stake, owner)?;

    let mut next_pool = pool.clone();
    let mut next_stake = stake.clone();

    next_pool.settle(now)?;
    next_stake.realize(next_pool.acc_reward_per_share)?;

    let receipt = WithdrawReceipt {
        principal: next_stake.staked_amount,
        reward: next_stake.reward_due,
    };
    let payout = receipt.payout()?;

    // Reward is only ever paid from funds beyond the staked principal.
    let required = next_pool
        .total_staked
        .checked_add(receipt.reward)
        .ok_or(error!(LedgerError::ArithmeticOverflow))?;
    require!(
        custodian.balance() >= required,
        LedgerError::InsufficientRewardFunds
    );

    next_stake.clear(receipt.reward)?;
    next_pool.record_exit(receipt.principal, receipt.reward)?;

    custodian.transfer_out(owner, payout)?;

    *pool = next_pool;
    *stake = next_stake;

    Ok(receipt)
}

/// Move `amount` of reward tokens from `funder` into custody.
///
/// Funding never touches the accumulator; it only makes accrued reward
/// withdrawable.
pub fn fund_rewards<C: Custodian + ?Sized>(
    pool: &mut StakingPool,
    funder: &Pubkey,
    amount: u64,
    custodian: &mut C,
) -> Result<()> {
    require!(amount > 0, LedgerError::ZeroAmount);

    let mut next_pool = pool.clone();
    next_pool.record_funding(amount)?;

    custodian.transfer_in(funder, amount)?;

    *pool = next_pool;
    Ok(())
}

/// Reward `stake` could withdraw at `now`. Read only.
pub fn pending_reward(pool: &StakingPool, stake: Option<&UserStake>, now: i64) -> Result<u64> {
    let Some(stake) = stake else {
        return Ok(0);
    };

    let acc_reward_per_share = pool.simulate_acc_reward_per_share(now)?;
    stake
        .pending_since_settlement(acc_reward_per_share)?
        .checked_add(stake.reward_due)
        .ok_or(error!(LedgerError::ArithmeticOverflow))
}
