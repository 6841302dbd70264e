//! Authoritative proposal storage.
//!
//! Proposals live in an arena keyed by their sequential id: id `n` is
//! slot `n - 1`, allocated in creation order and never reused. Terminal
//! proposals are retained permanently for audit. The store owns the data
//! invariants (valid recipient, positive amount, id resolution); policy
//! lives in the voting and execution engines.

use crate::error::GovernanceError;
use crate::proposal::{Proposal, ProposalId, ProposalState};
use agora_types::{Amount, HolderAddress, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Append-only registry of proposals and their vote records.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProposalStore {
    proposals: Vec<Proposal>,
}

impl ProposalStore {
    pub fn new() -> Self {
        Self {
            proposals: Vec::new(),
        }
    }

    /// Rebuild a store from previously captured proposals.
    ///
    /// Slot order is identity: proposal `n` must sit at index `n - 1`.
    pub(crate) fn from_proposals(proposals: Vec<Proposal>) -> Self {
        debug_assert!(proposals
            .iter()
            .enumerate()
            .all(|(i, p)| p.id == (i as u64) + 1));
        Self { proposals }
    }

    /// Data-invariant checks for a creation request, in precedence order.
    pub fn validate_request(
        recipient: &HolderAddress,
        amount: Amount,
    ) -> Result<(), GovernanceError> {
        if recipient.is_null() {
            return Err(GovernanceError::InvalidRecipient);
        }
        if amount.is_zero() {
            return Err(GovernanceError::InvalidAmount);
        }
        Ok(())
    }

    /// Allocate the next id and store a new `Active` proposal.
    ///
    /// Callers are responsible for the policy preconditions (treasury
    /// coverage, proposer stake); no id is consumed when validation fails.
    pub fn create(
        &mut self,
        proposer: HolderAddress,
        recipient: HolderAddress,
        amount: Amount,
        description: String,
        now: Timestamp,
        voting_period_secs: u64,
    ) -> Result<ProposalId, GovernanceError> {
        Self::validate_request(&recipient, amount)?;
        let id = self.proposals.len() as ProposalId + 1;
        self.proposals.push(Proposal {
            id,
            proposer,
            recipient,
            amount,
            description,
            votes_for: Amount::ZERO,
            votes_against: Amount::ZERO,
            created_at: now,
            voting_deadline: now.plus_secs(voting_period_secs),
            state: ProposalState::Active,
            voter_record: HashMap::new(),
        });
        Ok(id)
    }

    /// Look up a proposal by id.
    pub fn get(&self, id: ProposalId) -> Result<&Proposal, GovernanceError> {
        if id == 0 || id > self.proposals.len() as u64 {
            return Err(GovernanceError::ProposalNotFound(id));
        }
        Ok(&self.proposals[(id - 1) as usize])
    }

    pub(crate) fn get_mut(&mut self, id: ProposalId) -> Result<&mut Proposal, GovernanceError> {
        if id == 0 || id > self.proposals.len() as u64 {
            return Err(GovernanceError::ProposalNotFound(id));
        }
        Ok(&mut self.proposals[(id - 1) as usize])
    }

    /// Whether a holder has voted on a proposal.
    pub fn has_voted(
        &self,
        id: ProposalId,
        voter: &HolderAddress,
    ) -> Result<bool, GovernanceError> {
        Ok(self.get(id)?.has_voted(voter))
    }

    /// The snapshot weight a holder's vote carried, zero if they never voted.
    pub fn voter_weight(
        &self,
        id: ProposalId,
        voter: &HolderAddress,
    ) -> Result<Amount, GovernanceError> {
        Ok(self.get(id)?.voter_weight(voter))
    }

    /// Number of proposals ever created.
    pub fn count(&self) -> u64 {
        self.proposals.len() as u64
    }

    /// All proposals in id order.
    pub fn proposals(&self) -> &[Proposal] {
        &self.proposals
    }
}
