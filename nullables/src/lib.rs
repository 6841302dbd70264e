//! Nullable infrastructure for deterministic testing.
//!
//! The core's external collaborators (wall clock, balance oracle, payout
//! mechanism) are abstracted behind traits. This crate provides
//! test-friendly implementations that:
//! - Return deterministic, programmable values
//! - Never touch the system clock or any external ledger
//! - Can be armed to fail on demand (transfer rollback tests)
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod oracle;
pub mod transfer;

pub use clock::NullClock;
pub use oracle::NullOracle;
pub use transfer::NullTransfer;
