//! Outbound fund transfer seam.
//!
//! The actual payout mechanism (a token ledger, a bank adapter, a chain
//! call) lives outside the core. The execution engine drives exactly one
//! transfer per approved proposal through this trait and treats any
//! failure as a signal to roll the whole execution back.

use agora_types::{Amount, HolderAddress};
use thiserror::Error;

/// A transfer attempt was refused by the external payout mechanism.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("transfer failed: {0}")]
pub struct TransferError(pub String);

/// Capability to move funds out of the treasury to a recipient.
pub trait FundTransfer {
    /// Deliver `amount` to `recipient`. Must either fully succeed or
    /// fully fail — a partial delivery is not representable.
    fn transfer(&mut self, recipient: &HolderAddress, amount: Amount)
        -> Result<(), TransferError>;
}
