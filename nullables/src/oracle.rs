//! Nullable balance oracle — programmable voting weights.

use agora_oracle::BalanceOracle;
use agora_types::{Amount, HolderAddress};
use std::collections::HashMap;

/// A deterministic in-memory balance oracle.
///
/// Holds an explicit total supply independent of the tracked balances,
/// so a test can model "10,000 supply of which only three holders are
/// named" without enumerating the rest.
#[derive(Clone, Debug, Default)]
pub struct NullOracle {
    balances: HashMap<HolderAddress, u128>,
    total_supply: u128,
}

impl NullOracle {
    /// An oracle with zero supply and no holders.
    pub fn new() -> Self {
        Self::default()
    }

    /// An oracle with a fixed total supply and no named holders yet.
    pub fn with_supply(total_supply: u128) -> Self {
        Self {
            balances: HashMap::new(),
            total_supply,
        }
    }

    /// Set a holder's balance. Does not touch the total supply.
    pub fn set_balance(&mut self, holder: &HolderAddress, balance: u128) {
        self.balances.insert(holder.clone(), balance);
    }

    /// Replace the reported total supply.
    pub fn set_total_supply(&mut self, total_supply: u128) {
        self.total_supply = total_supply;
    }
}

impl BalanceOracle for NullOracle {
    fn balance_of(&self, holder: &HolderAddress) -> Amount {
        Amount::new(self.balances.get(holder).copied().unwrap_or(0))
    }

    fn total_supply(&self) -> Amount {
        Amount::new(self.total_supply)
    }
}
