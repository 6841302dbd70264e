//! Funding proposals and their lifecycle.

use agora_types::{Amount, HolderAddress, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sequential proposal identifier, allocated from 1 and never reused.
pub type ProposalId = u64;

/// Lifecycle states of a funding proposal.
///
/// Only two transitions exist: `Active → Executed` and `Active → Rejected`,
/// both driven by the execution engine after the voting deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalState {
    /// Reserved — no code path assigns it. Proposals are created `Active`.
    Pending,
    /// Open for voting until the deadline, awaiting execution after it.
    Active,
    /// Approved and paid out. Terminal.
    Executed,
    /// Failed the majority check. Terminal.
    Rejected,
    /// Reserved — no cancellation path exists.
    Cancelled,
}

impl ProposalState {
    /// Whether no further transition is possible from this state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Executed | Self::Rejected)
    }
}

/// One holder's vote: direction plus the weight snapshotted at cast time.
///
/// Append-only — once recorded, a vote is never modified or removed, and
/// the weight stays fixed regardless of later oracle balance changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    /// True for a vote in favor.
    pub support: bool,
    /// Oracle balance of the voter at the moment the vote was cast.
    pub weight: Amount,
}

/// A funding request against the treasury.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// Sequential id, unique, never reused.
    pub id: ProposalId,
    /// Who created the proposal (held positive weight at creation time).
    pub proposer: HolderAddress,
    /// Who receives the funds if approved. Never the null identity.
    pub recipient: HolderAddress,
    /// Requested quantity; positive and covered by the treasury at creation.
    pub amount: Amount,
    /// Free-text label, opaque to the engine.
    pub description: String,
    /// Accumulated weight in favor. Monotone until terminal.
    pub votes_for: Amount,
    /// Accumulated weight against. Monotone until terminal.
    pub votes_against: Amount,
    pub created_at: Timestamp,
    /// Fixed absolute deadline: `created_at + voting period`.
    pub voting_deadline: Timestamp,
    pub state: ProposalState,
    /// Per-voter record; presence means the holder has voted.
    pub voter_record: HashMap<HolderAddress, VoteRecord>,
}

impl Proposal {
    /// Total weight cast either way.
    pub fn votes_cast(&self) -> Amount {
        self.votes_for.saturating_add(self.votes_against)
    }

    /// Whether a holder has already voted on this proposal.
    pub fn has_voted(&self, voter: &HolderAddress) -> bool {
        self.voter_record.contains_key(voter)
    }

    /// The weight a holder's vote carried, zero if they never voted.
    pub fn voter_weight(&self, voter: &HolderAddress) -> Amount {
        self.voter_record
            .get(voter)
            .map(|record| record.weight)
            .unwrap_or(Amount::ZERO)
    }

    /// Whether the voting window is still open at `now`.
    pub fn window_open(&self, now: Timestamp) -> bool {
        now <= self.voting_deadline
    }
}
