//! Core domain types for the agora treasury.
//!
//! All quantities are fixed-point integers (u128 raw units) — no floats
//! anywhere in the core. Timestamps are whole Unix seconds so every
//! deadline comparison is deterministic integer arithmetic.

pub mod amount;
pub mod holder;
pub mod time;

pub use amount::Amount;
pub use holder::HolderAddress;
pub use time::Timestamp;
