//! Custodian boundary
//!
//! The ledger never moves tokens itself. Deposits and withdrawals hand the
//! movement to a [`Custodian`]; on chain that is the SPL token program
//! acting on the pool vault.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, TokenAccount, Transfer};

use crate::constants::POOL_SEED;
use crate::error::LedgerError;
use crate::state::StakingPool;

/// Holder of the pool's underlying balance.
pub trait Custodian {
    /// Debit `from` and credit pool custody.
    fn transfer_in(&mut self, from: &Pubkey, amount: u64) -> Result<()>;

    /// Debit pool custody and credit `to`.
    fn transfer_out(&mut self, to: &Pubkey, amount: u64) -> Result<()>;

    /// Balance currently held in pool custody.
    fn balance(&self) -> u64;
}

/// [`Custodian`] over the pool vault token account.
///
/// Bound to a single participant per instruction: inbound transfers are
/// signed by the participant, outbound transfers by the pool PDA.
pub struct VaultCustodian<'info> {
    token_program: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    vault_balance: u64,
    pool: AccountInfo<'info>,
    token_mint: Pubkey,
    pool_bump: u8,
    participant: Pubkey,
    participant_authority: AccountInfo<'info>,
    participant_token_account: AccountInfo<'info>,
}

impl<'info> VaultCustodian<'info> {
    pub fn new(
        token_program: AccountInfo<'info>,
        vault: &Account<'info, TokenAccount>,
        pool: &Account<'info, StakingPool>,
        participant_authority: AccountInfo<'info>,
        participant_token_account: &Account<'info, TokenAccount>,
    ) -> Self {
        Self {
            token_program,
            vault: vault.to_account_info(),
            vault_balance: vault.amount,
            pool: pool.to_account_info(),
            token_mint: pool.token_mint,
            pool_bump: pool.bump,
            participant: participant_authority.key(),
            participant_authority,
            participant_token_account: participant_token_account.to_account_info(),
        }
    }
}

impl<'info> Custodian for VaultCustodian<'info> {
    fn transfer_in(&mut self, from: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*from, self.participant, LedgerError::Unauthorized);

        let cpi_accounts = Transfer {
            from: self.participant_token_account.clone(),
            to: self.vault.clone(),
            authority: self.participant_authority.clone(),
        };
        let cpi_ctx = CpiContext::new(self.token_program.clone(), cpi_accounts);
        token::transfer(cpi_ctx, amount)?;

        self.vault_balance = self
            .vault_balance
            .checked_add(amount)
            .ok_or(error!(LedgerError::ArithmeticOverflow))?;
        Ok(())
    }

    fn transfer_out(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*to, self.participant, LedgerError::Unauthorized);

        let pool_seeds = &[POOL_SEED, self.token_mint.as_ref(), &[self.pool_bump]];
        let signer_seeds = &[&pool_seeds[..]];

        let cpi_accounts = Transfer {
            from: self.vault.clone(),
            to: self.participant_token_account.clone(),
            authority: self.pool.clone(),
        };
        let cpi_ctx =
            CpiContext::new_with_signer(self.token_program.clone(), cpi_accounts, signer_seeds);
        token::transfer(cpi_ctx, amount)?;

        self.vault_balance = self
            .vault_balance
            .checked_sub(amount)
            .ok_or(error!(LedgerError::ArithmeticOverflow))?;
        Ok(())
    }

    fn balance(&self) -> u64 {
        self.vault_balance
    }
}
