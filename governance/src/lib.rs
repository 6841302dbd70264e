//! Treasury governance for the agora fund.
//!
//! A shared fund whose disbursement is gated by weighted voting: holders
//! create funding proposals, stakeholders vote with their oracle balance
//! as weight during a fixed window, and after the deadline anyone may
//! trigger execution — quorum and majority checks decide pass/fail, and
//! an approved proposal is paid out exactly once.
//!
//! Key properties: vote weight is snapshotted at cast time, terminal
//! states are final, and the payout is committed-before-effect so the
//! transfer step cannot re-enter and double-spend.

pub mod engine;
pub mod error;
pub mod execution;
pub mod params;
pub mod proposal;
pub mod snapshot;
pub mod store;
pub mod voting;

pub use engine::GovernanceEngine;
pub use error::GovernanceError;
pub use execution::ExecutionEngine;
pub use params::GovernanceParams;
pub use proposal::{Proposal, ProposalId, ProposalState, VoteRecord};
pub use snapshot::GovernanceSnapshot;
pub use store::ProposalStore;
pub use voting::VotingEngine;
