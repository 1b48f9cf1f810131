//! Error types for the reward ledger
//!
//! Error codes are stable across versions for client compatibility.

use anchor_lang::prelude::*;

#[error_code]
pub enum LedgerError {
    // ========== Operation Errors (6000-6004) ==========

    /// Deposit outside of `[start_time, end_time)`
    #[msg("Not allowed to deposit: outside of the reward window")]
    WindowClosed, // 6000

    /// Deposit amount must be greater than zero
    #[msg("Amount must be non-zero")]
    ZeroAmount, // 6001

    /// Withdraw without a position
    #[msg("There is no active stake to withdraw")]
    NoActiveStake, // 6002

    /// Vault cannot cover principal plus accrued reward
    #[msg("Not enough funds for reward")]
    InsufficientRewardFunds, // 6003

    /// Custodian refused or failed a transfer
    #[msg("Token transfer failed")]
    TransferFailed, // 6004

    // ========== Configuration Errors (6005-6006) ==========

    /// Reward rate must be greater than zero
    #[msg("Reward rate must be greater than zero")]
    InvalidRewardRate, // 6005

    /// Start time must be strictly before end time
    #[msg("Start time must be before end time")]
    InvalidTimeWindow, // 6006

    // ========== Account Errors (6007-6008) ==========

    /// Account does not belong to this pool or signer
    #[msg("Unauthorized: account does not belong to this pool or signer")]
    Unauthorized, // 6007

    /// Token mint mismatch
    #[msg("Token mint does not match pool configuration")]
    InvalidMint, // 6008

    // ========== Computation Errors (6009) ==========

    /// Arithmetic overflow occurred
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow, // 6009
}
