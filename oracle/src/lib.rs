//! Abstract balance oracle for the agora core.
//!
//! The fungible ledger that supplies voting weight lives outside the core.
//! Every core component depends only on this trait, never on a concrete
//! ledger implementation, so tests and deployments can substitute freely.
//!
//! Both reads are side-effect-free from the core's perspective and may
//! return different values between calls — the core never assumes they
//! are stable except where it explicitly snapshots a value into a vote
//! record.

use agora_types::{Amount, HolderAddress};

/// Read-only view of the external fungible-balance ledger.
pub trait BalanceOracle {
    /// Current balance (voting weight) of a holder. Zero for unknown holders.
    fn balance_of(&self, holder: &HolderAddress) -> Amount;

    /// Total supply of the fungible balance across all holders.
    fn total_supply(&self) -> Amount;
}

impl<O: BalanceOracle + ?Sized> BalanceOracle for &O {
    fn balance_of(&self, holder: &HolderAddress) -> Amount {
        (**self).balance_of(holder)
    }

    fn total_supply(&self) -> Amount {
        (**self).total_supply()
    }
}
