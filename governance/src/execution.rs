//! Proposal execution — the deadline-gated, at-most-once decision.
//!
//! Decision policy: quorum over total supply, then majority over votes
//! cast. Approved proposals are flipped to `Executed` *before* the
//! outbound transfer is attempted, so the transfer step can never be
//! used to re-enter and pay the same proposal twice. A refused transfer
//! rolls back both the debit and the state flip.

use crate::error::GovernanceError;
use crate::params::GovernanceParams;
use crate::proposal::{ProposalId, ProposalState};
use crate::store::ProposalStore;
use agora_oracle::BalanceOracle;
use agora_treasury::{FundTransfer, TreasuryLedger};
use agora_types::Timestamp;

/// Whether `part` makes up at least `percent`% of `whole`.
///
/// Equivalent to `part * 100 >= whole * percent`, but computed as
/// `part >= ceil(whole * percent / 100)` without ever forming the full
/// product, so it stays exact for raw supplies anywhere in u128 range.
/// Requires `percent <= 100` (enforced by `GovernanceParams`).
fn meets_percent(part: u128, whole: u128, percent: u64) -> bool {
    let percent = percent as u128;
    let threshold = (whole / 100) * percent + ((whole % 100) * percent).div_ceil(100);
    part >= threshold
}

/// Finalizes expired proposals and pays out approved ones.
pub struct ExecutionEngine;

impl ExecutionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Execute a proposal whose voting window has closed. Callable by
    /// anyone; returns the terminal state reached.
    ///
    /// `QuorumNotReached` leaves the proposal `Active`. Past the deadline
    /// no further votes can arrive, so callers must treat that as an
    /// effective rejection — the core does not decide for them.
    pub fn execute<O: BalanceOracle, T: FundTransfer>(
        &self,
        store: &mut ProposalStore,
        treasury: &mut TreasuryLedger,
        oracle: &O,
        transfer: &mut T,
        params: &GovernanceParams,
        id: ProposalId,
        now: Timestamp,
    ) -> Result<ProposalState, GovernanceError> {
        let proposal = store.get_mut(id)?;
        if proposal.state != ProposalState::Active {
            return Err(GovernanceError::ProposalNotActive);
        }
        if proposal.window_open(now) {
            return Err(GovernanceError::VotingWindowNotClosed);
        }

        let votes_cast = proposal.votes_cast().raw();
        let votes_for = proposal.votes_for.raw();
        let total_supply = oracle.total_supply().raw();

        // Participation gate: votes_cast / supply >= quorum_percent / 100.
        if !meets_percent(votes_cast, total_supply, params.quorum_percent) {
            return Err(GovernanceError::QuorumNotReached {
                votes_cast,
                total_supply,
            });
        }

        // Approval gate: votes_for / votes_cast >= majority_percent / 100.
        if !meets_percent(votes_for, votes_cast, params.majority_percent) {
            proposal.state = ProposalState::Rejected;
            tracing::info!(
                proposal = id,
                votes_for,
                votes_cast,
                "proposal rejected by majority vote"
            );
            return Ok(ProposalState::Rejected);
        }

        let amount = proposal.amount;
        let recipient = proposal.recipient.clone();
        treasury
            .debit(amount)
            .map_err(|_| GovernanceError::InsufficientTreasuryBalance {
                needed: amount.raw(),
                available: treasury.balance().raw(),
            })?;

        // Terminal state is committed before the external transfer so a
        // re-entrant call sees `Executed` and fails with ProposalNotActive.
        proposal.state = ProposalState::Executed;

        if let Err(err) = transfer.transfer(&recipient, amount) {
            treasury.credit(amount);
            proposal.state = ProposalState::Active;
            tracing::warn!(
                proposal = id,
                recipient = %recipient,
                error = %err,
                "fund transfer refused, execution rolled back"
            );
            return Err(GovernanceError::TransferFailed {
                recipient: recipient.to_string(),
                reason: err.0,
            });
        }

        tracing::info!(
            proposal = id,
            recipient = %recipient,
            amount = amount.raw(),
            "proposal executed"
        );
        Ok(ProposalState::Executed)
    }
}

impl Default for ExecutionEngine {
    fn default() -> Self {
        Self::new()
    }
}
