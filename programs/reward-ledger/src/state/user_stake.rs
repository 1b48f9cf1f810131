//! Participant position account

use anchor_lang::prelude::*;

use crate::error::LedgerError;
use crate::math;

/// One participant's position in a pool.
///
/// PDA Seeds: `[b"stake", pool.key().as_ref(), owner.key().as_ref()]`
///
/// Created on first deposit and never closed: after a full withdrawal the
/// record is reused by the next deposit.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct UserStake {
    /// Pool this position belongs to
    pub pool: Pubkey,

    /// Participant wallet
    pub owner: Pubkey,

    /// Currently staked balance, zero when inactive
    pub staked_amount: u64,

    /// `staked_amount * acc_reward_per_share / PRECISION` at last settlement
    pub reward_debt: u128,

    /// Realized reward not yet paid out
    pub reward_due: u64,

    /// First deposit since the balance last reached zero
    pub first_staked_time: i64,

    /// Lifetime reward paid to this participant
    pub total_reward_claimed: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl UserStake {
    /// Account space calculation
    pub const LEN: usize = 8 // discriminator
        + 32 // pool
        + 32 // owner
        + 8  // staked_amount
        + 16 // reward_debt
        + 8  // reward_due
        + 8  // first_staked_time
        + 8  // total_reward_claimed
        + 1; // bump

    /// Bind a freshly created record to its pool and owner.
    pub fn bind(&mut self, pool: Pubkey, owner: Pubkey, bump: u8) {
        self.pool = pool;
        self.owner = owner;
        self.bump = bump;
    }

    /// Whether the record has been bound by a previous deposit.
    pub fn is_bound(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn is_active(&self) -> bool {
        self.staked_amount > 0
    }

    /// Reward accrued since the last settlement at accumulator `acc`.
    pub fn pending_since_settlement(&self, acc_reward_per_share: u128) -> Result<u64> {
        let accrued = math::accrued(self.staked_amount, acc_reward_per_share)?;
        let pending = accrued
            .checked_sub(self.reward_debt)
            .ok_or(error!(LedgerError::ArithmeticOverflow))?;
        math::to_token_amount(pending)
    }

    /// Move pending reward into `reward_due` and re-price the debt.
    pub fn realize(&mut self, acc_reward_per_share: u128) -> Result<()> {
        let pending = self.pending_since_settlement(acc_reward_per_share)?;
        self.reward_due = self
            .reward_due
            .checked_add(pending)
            .ok_or(error!(LedgerError::ArithmeticOverflow))?;
        self.reward_debt = math::accrued(self.staked_amount, acc_reward_per_share)?;
        Ok(())
    }

    /// Increase the position and re-price the debt against the new amount.
    pub fn add_stake(&mut self, amount: u64, acc_reward_per_share: u128, now: i64) -> Result<()> {
        if !self.is_active() {
            self.first_staked_time = now;
        }
        self.staked_amount = self
            .staked_amount
            .checked_add(amount)
            .ok_or(error!(LedgerError::ArithmeticOverflow))?;
        self.reward_debt = math::accrued(self.staked_amount, acc_reward_per_share)?;
        Ok(())
    }

    /// Clear the position after a full payout. `first_staked_time` is kept.
    pub fn clear(&mut self, reward_paid: u64) -> Result<()> {
        self.staked_amount = 0;
        self.reward_debt = 0;
        self.reward_due = 0;
        self.total_reward_claimed = self
            .total_reward_claimed
            .checked_add(reward_paid)
            .ok_or(error!(LedgerError::ArithmeticOverflow))?;
        Ok(())
    }
}
