//! Vote casting — one weighted vote per stakeholder per proposal.

use crate::error::GovernanceError;
use crate::proposal::{ProposalId, ProposalState, VoteRecord};
use crate::store::ProposalStore;
use agora_oracle::BalanceOracle;
use agora_types::{Amount, HolderAddress, Timestamp};

/// Records weighted votes against the proposal store.
///
/// The voter's weight is read from the oracle exactly once, at cast time,
/// and snapshotted into the vote record. Acquiring or shedding balance
/// afterwards changes nothing — neither the record nor the tallies.
pub struct VotingEngine;

impl VotingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Cast one vote. Returns the weight that was recorded.
    pub fn cast_vote<O: BalanceOracle>(
        &self,
        store: &mut ProposalStore,
        oracle: &O,
        id: ProposalId,
        voter: &HolderAddress,
        support: bool,
        now: Timestamp,
    ) -> Result<Amount, GovernanceError> {
        let proposal = store.get_mut(id)?;
        if proposal.state != ProposalState::Active {
            return Err(GovernanceError::ProposalNotActive);
        }
        if !proposal.window_open(now) {
            return Err(GovernanceError::VotingWindowClosed);
        }
        if proposal.has_voted(voter) {
            return Err(GovernanceError::AlreadyVoted(voter.to_string()));
        }
        let weight = oracle.balance_of(voter);
        if weight.is_zero() {
            return Err(GovernanceError::NoVotingPower(voter.to_string()));
        }

        proposal
            .voter_record
            .insert(voter.clone(), VoteRecord { support, weight });
        if support {
            proposal.votes_for = proposal.votes_for.saturating_add(weight);
        } else {
            proposal.votes_against = proposal.votes_against.saturating_add(weight);
        }
        tracing::debug!(
            proposal = id,
            voter = %voter,
            weight = weight.raw(),
            support,
            "vote recorded"
        );
        Ok(weight)
    }
}

impl Default for VotingEngine {
    fn default() -> Self {
        Self::new()
    }
}
