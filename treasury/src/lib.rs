//! Treasury ledger for the agora fund.
//!
//! A single non-negative balance counter: deposits from any caller
//! increase it, and only a successful proposal execution decreases it.
//! The ledger is the sole source of truth for "sufficient funds" checks.

pub mod error;
pub mod ledger;
pub mod transfer;

pub use error::TreasuryError;
pub use ledger::TreasuryLedger;
pub use transfer::{FundTransfer, TransferError};
