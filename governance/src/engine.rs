//! The outward governance facade.
//!
//! Owns the proposal store, the treasury, the configuration, the balance
//! oracle, and the outbound transfer mechanism, and exposes every
//! operation callers use. All state-changing operations take an explicit
//! `now` so the host clock stays outside the core.

use crate::error::GovernanceError;
use crate::execution::ExecutionEngine;
use crate::params::GovernanceParams;
use crate::proposal::{Proposal, ProposalId, ProposalState};
use crate::store::ProposalStore;
use crate::voting::VotingEngine;
use agora_oracle::BalanceOracle;
use agora_treasury::{FundTransfer, TreasuryLedger};
use agora_types::{Amount, HolderAddress, Timestamp};

/// Treasury governance core: proposals, weighted votes, gated payouts.
pub struct GovernanceEngine<O: BalanceOracle, T: FundTransfer> {
    store: ProposalStore,
    treasury: TreasuryLedger,
    params: GovernanceParams,
    oracle: O,
    transfer: T,
    voting: VotingEngine,
    execution: ExecutionEngine,
}

impl<O: BalanceOracle, T: FundTransfer> GovernanceEngine<O, T> {
    /// Create an engine with default parameters and an empty treasury.
    pub fn new(oracle: O, transfer: T) -> Self {
        Self::with_params(oracle, transfer, GovernanceParams::default())
    }

    pub fn with_params(oracle: O, transfer: T, params: GovernanceParams) -> Self {
        Self {
            store: ProposalStore::new(),
            treasury: TreasuryLedger::new(),
            params,
            oracle,
            transfer,
            voting: VotingEngine::new(),
            execution: ExecutionEngine::new(),
        }
    }

    /// Deposit funds into the treasury.
    pub fn deposit(&mut self, amount: Amount) -> Result<(), GovernanceError> {
        if amount.is_zero() {
            return Err(GovernanceError::InvalidAmount);
        }
        self.treasury.deposit(amount)?;
        tracing::info!(amount = amount.raw(), "treasury deposit");
        Ok(())
    }

    /// Create a funding proposal. Returns the new sequential id.
    ///
    /// Precondition order: valid recipient, positive amount, treasury
    /// coverage, proposer stake. No id is consumed on any failure.
    pub fn create_proposal(
        &mut self,
        proposer: HolderAddress,
        recipient: HolderAddress,
        amount: Amount,
        description: String,
        now: Timestamp,
    ) -> Result<ProposalId, GovernanceError> {
        ProposalStore::validate_request(&recipient, amount)?;
        if !self.treasury.can_cover(amount) {
            return Err(GovernanceError::InsufficientTreasuryFunds {
                requested: amount.raw(),
                available: self.treasury.balance().raw(),
            });
        }
        if self.oracle.balance_of(&proposer).is_zero() {
            return Err(GovernanceError::NotAStakeholder(proposer.to_string()));
        }
        let id = self.store.create(
            proposer,
            recipient,
            amount,
            description,
            now,
            self.params.voting_period_secs,
        )?;
        tracing::info!(proposal = id, amount = amount.raw(), "proposal created");
        Ok(id)
    }

    /// Cast a weighted vote on an active proposal.
    pub fn vote(
        &mut self,
        id: ProposalId,
        voter: &HolderAddress,
        support: bool,
        now: Timestamp,
    ) -> Result<Amount, GovernanceError> {
        self.voting
            .cast_vote(&mut self.store, &self.oracle, id, voter, support, now)
    }

    /// Finalize an expired proposal and pay it out if approved.
    pub fn execute_proposal(
        &mut self,
        id: ProposalId,
        now: Timestamp,
    ) -> Result<ProposalState, GovernanceError> {
        self.execution.execute(
            &mut self.store,
            &mut self.treasury,
            &self.oracle,
            &mut self.transfer,
            &self.params,
            id,
            now,
        )
    }

    /// Read a proposal's stored state.
    pub fn get_proposal(&self, id: ProposalId) -> Result<&Proposal, GovernanceError> {
        self.store.get(id)
    }

    /// Whether a holder has voted on a proposal.
    pub fn has_voted(&self, id: ProposalId, voter: &HolderAddress) -> Result<bool, GovernanceError> {
        self.store.has_voted(id, voter)
    }

    /// The weight a holder's vote carried, zero if they never voted.
    pub fn voter_weight(
        &self,
        id: ProposalId,
        voter: &HolderAddress,
    ) -> Result<Amount, GovernanceError> {
        self.store.voter_weight(id, voter)
    }

    /// Current treasury balance.
    pub fn treasury_balance(&self) -> Amount {
        self.treasury.balance()
    }

    /// Number of proposals ever created.
    pub fn proposal_count(&self) -> u64 {
        self.store.count()
    }

    /// Current configuration.
    pub fn params(&self) -> &GovernanceParams {
        &self.params
    }

    /// The balance oracle this engine reads from.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Mutable access to the oracle, for hosts that own it through the
    /// engine (and for tests that churn balances between calls).
    pub fn oracle_mut(&mut self) -> &mut O {
        &mut self.oracle
    }

    /// The outbound transfer mechanism.
    pub fn transfer(&self) -> &T {
        &self.transfer
    }

    /// Change the voting window for future proposals.
    pub fn set_voting_period(&mut self, secs: u64) -> Result<(), GovernanceError> {
        self.params.set_voting_period(secs)
    }

    /// Change the quorum threshold.
    pub fn set_quorum_percent(&mut self, percent: u64) -> Result<(), GovernanceError> {
        self.params.set_quorum_percent(percent)
    }

    /// Change the majority threshold.
    pub fn set_majority_percent(&mut self, percent: u64) -> Result<(), GovernanceError> {
        self.params.set_majority_percent(percent)
    }

    pub(crate) fn store(&self) -> &ProposalStore {
        &self.store
    }

    pub(crate) fn restore_state(
        &mut self,
        store: ProposalStore,
        treasury: TreasuryLedger,
        params: GovernanceParams,
    ) {
        self.store = store;
        self.treasury = treasury;
        self.params = params;
    }
}
