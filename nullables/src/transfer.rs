//! Nullable fund transfer — records payouts, can be armed to fail.

use agora_treasury::{FundTransfer, TransferError};
use agora_types::{Amount, HolderAddress};
use std::collections::HashMap;

/// A deterministic payout recorder.
///
/// Successful transfers accumulate per recipient so tests can assert the
/// exact amount delivered. Arming `fail_next` makes the next transfer
/// refuse, which exercises the execution engine's rollback path.
#[derive(Clone, Debug, Default)]
pub struct NullTransfer {
    received: HashMap<HolderAddress, u128>,
    fail_next: bool,
}

impl NullTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total amount delivered to a recipient so far.
    pub fn received_by(&self, recipient: &HolderAddress) -> Amount {
        Amount::new(self.received.get(recipient).copied().unwrap_or(0))
    }

    /// Number of distinct recipients paid.
    pub fn recipient_count(&self) -> usize {
        self.received.len()
    }

    /// Make the next transfer fail with a refusal.
    pub fn fail_next(&mut self) {
        self.fail_next = true;
    }
}

impl FundTransfer for NullTransfer {
    fn transfer(
        &mut self,
        recipient: &HolderAddress,
        amount: Amount,
    ) -> Result<(), TransferError> {
        if self.fail_next {
            self.fail_next = false;
            return Err(TransferError("null transfer armed to fail".into()));
        }
        let entry = self.received.entry(recipient.clone()).or_insert(0);
        *entry = entry.saturating_add(amount.raw());
        Ok(())
    }
}
