//! Fixed-point helpers
//!
//! Every product is formed in 256 bits and divided with floor semantics
//! before narrowing back to `u128`. Only a quotient that does not fit is an
//! error; the intermediate product never is.

use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::constants::PRECISION;
use crate::error::LedgerError;

/// `a * b / denominator`, floored.
pub fn mul_div_floor(a: u128, b: u128, denominator: u128) -> Result<u128> {
    require!(denominator > 0, LedgerError::ArithmeticOverflow);
    // u128 * u128 always fits in 256 bits
    let quotient = U256::from(a) * U256::from(b) / U256::from(denominator);
    require!(
        quotient <= U256::from(u128::MAX),
        LedgerError::ArithmeticOverflow
    );
    Ok(quotient.as_u128())
}

/// Accumulator growth for `elapsed` seconds shared across `total_staked`.
///
/// `elapsed * reward_rate * PRECISION / total_staked`
pub fn reward_per_share_delta(elapsed: u64, reward_rate: u64, total_staked: u64) -> Result<u128> {
    let emitted = (elapsed as u128)
        .checked_mul(reward_rate as u128)
        .ok_or(error!(LedgerError::ArithmeticOverflow))?;
    mul_div_floor(emitted, PRECISION, total_staked as u128)
}

/// Reward priced into `amount` at accumulator value `acc_reward_per_share`.
///
/// `amount * acc_reward_per_share / PRECISION`
#[inline]
pub fn accrued(amount: u64, acc_reward_per_share: u128) -> Result<u128> {
    mul_div_floor(amount as u128, acc_reward_per_share, PRECISION)
}

/// Narrow a wide intermediate back to a token amount.
#[inline]
pub fn to_token_amount(value: u128) -> Result<u64> {
    u64::try_from(value).map_err(|_| error!(LedgerError::ArithmeticOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_div_floors() {
        assert_eq!(mul_div_floor(7, 3, 2).unwrap(), 10);
        assert_eq!(mul_div_floor(1, 1, 3).unwrap(), 0);
    }

    #[test]
    fn test_mul_div_wide_intermediate() {
        // The product exceeds u128 but the quotient does not
        assert_eq!(
            mul_div_floor(u128::MAX, PRECISION, PRECISION).unwrap(),
            u128::MAX
        );
        assert_eq!(
            mul_div_floor(1_000_000_000_000, 2_000_000_000_000_000_000_000_000_000, PRECISION)
                .unwrap(),
            2_000_000_000_000_000_000_000_000_000
        );
    }

    #[test]
    fn test_mul_div_overflow_is_error() {
        assert!(mul_div_floor(u128::MAX, 2, 1).is_err());
        assert!(mul_div_floor(1, 1, 0).is_err());
    }

    #[test]
    fn test_reward_per_share_delta_reference_vector() {
        // 100 s at 0.01 token/s over 100 tokens (9 decimals)
        let delta = reward_per_share_delta(100, 10_000_000, 100_000_000_000).unwrap();
        assert_eq!(delta, 10_000_000_000);
    }

    #[test]
    fn test_accrued_reference_vector() {
        assert_eq!(accrued(100_000_000_000, 10_000_000_000).unwrap(), 1_000_000_000);
        assert_eq!(accrued(0, u128::MAX).unwrap(), 0);
    }

    #[test]
    fn test_to_token_amount_bounds() {
        assert_eq!(to_token_amount(u64::MAX as u128).unwrap(), u64::MAX);
        assert!(to_token_amount(u64::MAX as u128 + 1).is_err());
    }
}
