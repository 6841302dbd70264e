//! The fund's balance counter.

use crate::error::TreasuryError;
use agora_types::Amount;
use serde::{Deserialize, Serialize};

/// The shared fund's available balance.
///
/// Non-negative by construction (u128 raw units). Increases on deposit,
/// decreases only when the execution engine debits an approved proposal's
/// amount. The check-then-debit sequence is guarded by the execution
/// engine holding `&mut` for the whole decision, so no interleaving can
/// slip between the balance check and the debit.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TreasuryLedger {
    balance: Amount,
}

impl Default for TreasuryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl TreasuryLedger {
    /// Create an empty treasury.
    pub fn new() -> Self {
        Self {
            balance: Amount::ZERO,
        }
    }

    /// Create a treasury seeded with an initial balance.
    pub fn with_balance(balance: Amount) -> Self {
        Self { balance }
    }

    /// Current available balance.
    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Whether the treasury can cover a requested amount.
    pub fn can_cover(&self, amount: Amount) -> bool {
        amount <= self.balance
    }

    /// Deposit funds. Rejects zero deposits; overflow is surfaced, never
    /// wrapped.
    pub fn deposit(&mut self, amount: Amount) -> Result<(), TreasuryError> {
        if amount.is_zero() {
            return Err(TreasuryError::ZeroAmount);
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(TreasuryError::Overflow)?;
        Ok(())
    }

    /// Debit funds for an approved proposal.
    pub fn debit(&mut self, amount: Amount) -> Result<(), TreasuryError> {
        if amount.is_zero() {
            return Err(TreasuryError::ZeroAmount);
        }
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(TreasuryError::InsufficientFunds {
                needed: amount.raw(),
                available: self.balance.raw(),
            })?;
        Ok(())
    }

    /// Restore a previously debited amount (transfer-failure rollback).
    ///
    /// Infallible: the amount was just subtracted from this balance, so
    /// adding it back cannot overflow.
    pub fn credit(&mut self, amount: Amount) {
        self.balance = self.balance.saturating_add(amount);
    }
}
