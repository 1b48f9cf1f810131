//! Staking pool state account
//!
//! Holds the immutable emission parameters and the lazily updated
//! reward accumulator shared by every participant.

use anchor_lang::prelude::*;

use crate::error::LedgerError;
use crate::math;

/// Pool-level ledger state.
///
/// PDA Seeds: `[b"pool", token_mint.key().as_ref()]`
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct StakingPool {
    /// Payer of the initialization, informational only
    pub creator: Pubkey,

    /// SPL token mint staked and paid out as reward
    pub token_mint: Pubkey,

    /// Vault token account PDA (cached for convenience)
    pub vault: Pubkey,

    /// Reward base units emitted per second (immutable after init)
    pub reward_rate: u64,

    /// Window start, inclusive (immutable after init)
    pub start_time: i64,

    /// Window end, exclusive (immutable after init)
    pub end_time: i64,

    /// Timestamp the accumulator has been brought up to
    pub last_settled_time: i64,

    /// Cumulative reward per staked unit, scaled by `PRECISION`
    pub acc_reward_per_share: u128,

    /// Sum of every participant's `staked_amount`
    pub total_staked: u64,

    /// Cumulative reward transferred out
    pub total_reward_paid: u64,

    /// Cumulative reward top-ups recorded through `fund_rewards`
    pub total_funded: u64,

    /// PDA bump seed
    pub bump: u8,

    /// Vault PDA bump seed
    pub vault_bump: u8,

    /// Reserved space for future upgrades
    pub _reserved: [u8; 32],
}

impl StakingPool {
    /// Account space calculation
    pub const LEN: usize = 8 // discriminator
        + 32 // creator
        + 32 // token_mint
        + 32 // vault
        + 8  // reward_rate
        + 8  // start_time
        + 8  // end_time
        + 8  // last_settled_time
        + 16 // acc_reward_per_share
        + 8  // total_staked
        + 8  // total_reward_paid
        + 8  // total_funded
        + 1  // bump
        + 1  // vault_bump
        + 32; // reserved

    /// Initialize pool state. Parameters are validated once, here.
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        creator: Pubkey,
        token_mint: Pubkey,
        vault: Pubkey,
        reward_rate: u64,
        start_time: i64,
        end_time: i64,
        bump: u8,
        vault_bump: u8,
    ) -> Result<()> {
        require!(reward_rate > 0, LedgerError::InvalidRewardRate);
        require!(start_time < end_time, LedgerError::InvalidTimeWindow);

        self.creator = creator;
        self.token_mint = token_mint;
        self.vault = vault;
        self.reward_rate = reward_rate;
        self.start_time = start_time;
        self.end_time = end_time;
        self.last_settled_time = start_time;
        self.acc_reward_per_share = 0;
        self.total_staked = 0;
        self.total_reward_paid = 0;
        self.total_funded = 0;
        self.bump = bump;
        self.vault_bump = vault_bump;
        self._reserved = [0u8; 32];
        Ok(())
    }

    /// Whether deposits are accepted at `now`.
    pub fn is_open(&self, now: i64) -> bool {
        self.start_time <= now && now < self.end_time
    }

    /// Window-clamped settlement target for `now`.
    #[inline]
    fn effective_time(&self, now: i64) -> i64 {
        now.min(self.end_time)
    }

    /// Accumulator value a settlement at `now` would produce.
    pub fn simulate_acc_reward_per_share(&self, now: i64) -> Result<u128> {
        let effective = self.effective_time(now);
        if effective <= self.last_settled_time || self.total_staked == 0 {
            return Ok(self.acc_reward_per_share);
        }

        let elapsed = u64::try_from(effective - self.last_settled_time)
            .map_err(|_| error!(LedgerError::ArithmeticOverflow))?;
        let delta = math::reward_per_share_delta(elapsed, self.reward_rate, self.total_staked)?;

        self.acc_reward_per_share
            .checked_add(delta)
            .ok_or(error!(LedgerError::ArithmeticOverflow))
    }

    /// Bring the accumulator up to `min(now, end_time)`.
    ///
    /// An interval with nothing staked only advances the clock: its
    /// emission is not credited to anyone, now or later.
    pub fn settle(&mut self, now: i64) -> Result<()> {
        let effective = self.effective_time(now);
        if effective <= self.last_settled_time {
            return Ok(());
        }

        self.acc_reward_per_share = self.simulate_acc_reward_per_share(now)?;
        self.last_settled_time = effective;
        Ok(())
    }

    /// Add a participant's deposit to the pool total (checked arithmetic)
    pub fn add_stake(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(error!(LedgerError::ArithmeticOverflow))?;
        Ok(())
    }

    /// Remove a participant's principal and record the reward paid with it
    pub fn record_exit(&mut self, principal: u64, reward: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_sub(principal)
            .ok_or(error!(LedgerError::ArithmeticOverflow))?;
        self.total_reward_paid = self
            .total_reward_paid
            .checked_add(reward)
            .ok_or(error!(LedgerError::ArithmeticOverflow))?;
        Ok(())
    }

    /// Record a reward top-up (checked arithmetic)
    pub fn record_funding(&mut self, amount: u64) -> Result<()> {
        self.total_funded = self
            .total_funded
            .checked_add(amount)
            .ok_or(error!(LedgerError::ArithmeticOverflow))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: i64 = 1_000;
    const END: i64 = 11_000;
    const RATE: u64 = 10_000_000;

    fn pool() -> StakingPool {
        let mut pool = StakingPool::default();
        pool.initialize(
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            RATE,
            START,
            END,
            255,
            254,
        )
        .unwrap();
        pool
    }

    #[test]
    fn test_staking_pool_size() {
        assert!(StakingPool::LEN >= 8 + 32 * 3 + 8 * 4 + 16 + 8 * 3 + 2 + 32);
    }

    #[test]
    fn test_initialize_sets_last_settled_to_start() {
        let pool = pool();
        assert_eq!(pool.last_settled_time, START);
        assert_eq!(pool.acc_reward_per_share, 0);
        assert_eq!(pool.reward_rate, RATE);
    }

    #[test]
    fn test_initialize_rejects_bad_config() {
        let mut pool = StakingPool::default();
        let key = Pubkey::new_unique();
        assert!(pool.initialize(key, key, key, 0, START, END, 0, 0).is_err());
        assert!(pool.initialize(key, key, key, RATE, END, START, 0, 0).is_err());
        assert!(pool.initialize(key, key, key, RATE, START, START, 0, 0).is_err());
    }

    #[test]
    fn test_window_bounds() {
        let pool = pool();
        assert!(!pool.is_open(START - 1));
        assert!(pool.is_open(START));
        assert!(pool.is_open(END - 1));
        assert!(!pool.is_open(END));
    }

    #[test]
    fn test_settle_before_start_is_noop() {
        let mut pool = pool();
        pool.settle(START - 500).unwrap();
        assert_eq!(pool.last_settled_time, START);
    }

    #[test]
    fn test_settle_empty_pool_only_moves_clock() {
        let mut pool = pool();
        pool.settle(START + 1_000).unwrap();
        assert_eq!(pool.last_settled_time, START + 1_000);
        assert_eq!(pool.acc_reward_per_share, 0);
    }

    #[test]
    fn test_settle_accumulates_and_clamps_to_end() {
        let mut pool = pool();
        pool.add_stake(100_000_000_000).unwrap();
        pool.settle(START + 100).unwrap();
        assert_eq!(pool.acc_reward_per_share, 10_000_000_000);

        pool.settle(END + 5_000).unwrap();
        assert_eq!(pool.last_settled_time, END);
        // 10_000 s in total at the same share price per second
        assert_eq!(pool.acc_reward_per_share, 1_000_000_000_000);

        let snapshot = pool.clone();
        pool.settle(END + 10_000).unwrap();
        assert_eq!(pool, snapshot);
    }

    #[test]
    fn test_simulate_matches_settle() {
        let mut pool = pool();
        pool.add_stake(3).unwrap();
        let simulated = pool.simulate_acc_reward_per_share(START + 77).unwrap();
        pool.settle(START + 77).unwrap();
        assert_eq!(simulated, pool.acc_reward_per_share);
    }

    #[test]
    fn test_record_funding_accumulates() {
        let mut pool = pool();
        pool.record_funding(5).unwrap();
        pool.record_funding(7).unwrap();
        assert_eq!(pool.total_funded, 12);

        pool.total_funded = u64::MAX - 1;
        assert!(pool.record_funding(2).is_err());
        assert_eq!(pool.total_funded, u64::MAX - 1);
    }

    #[test]
    fn test_record_exit_underflow_is_error() {
        let mut pool = pool();
        pool.add_stake(10).unwrap();
        assert!(pool.record_exit(11, 0).is_err());
    }
}
