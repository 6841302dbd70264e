//! Governance snapshots — capture the persisted state at a point in time.
//!
//! The core's whole persisted footprint is the append-only proposal table
//! (with its nested voter records), the treasury balance counter, and the
//! configuration. A snapshot is a plain serde value of exactly that, so a
//! host can persist it with any codec and rebuild an engine from it.

use crate::engine::GovernanceEngine;
use crate::params::GovernanceParams;
use crate::proposal::Proposal;
use crate::store::ProposalStore;
use agora_oracle::BalanceOracle;
use agora_treasury::{FundTransfer, TreasuryLedger};
use agora_types::{Amount, Timestamp};
use serde::{Deserialize, Serialize};

/// A point-in-time capture of the governance core's persisted state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GovernanceSnapshot {
    /// When the snapshot was taken.
    pub captured_at: Timestamp,
    /// Every proposal in id order, voter records included.
    pub proposals: Vec<Proposal>,
    /// The treasury balance counter.
    pub treasury_balance: Amount,
    /// Configuration at capture time.
    pub params: GovernanceParams,
    /// Snapshot format version for compatibility.
    pub version: u32,
}

impl GovernanceSnapshot {
    pub const CURRENT_VERSION: u32 = 1;

    /// Capture the current state of an engine.
    pub fn capture<O: BalanceOracle, T: FundTransfer>(
        engine: &GovernanceEngine<O, T>,
        now: Timestamp,
    ) -> Self {
        Self {
            captured_at: now,
            proposals: engine.store().proposals().to_vec(),
            treasury_balance: engine.treasury_balance(),
            params: engine.params().clone(),
            version: Self::CURRENT_VERSION,
        }
    }

    /// Replace an engine's state with this snapshot's.
    pub fn restore<O: BalanceOracle, T: FundTransfer>(self, engine: &mut GovernanceEngine<O, T>) {
        engine.restore_state(
            ProposalStore::from_proposals(self.proposals),
            TreasuryLedger::with_balance(self.treasury_balance),
            self.params,
        );
    }
}
