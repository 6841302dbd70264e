use agora_treasury::TreasuryError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GovernanceError {
    #[error("recipient must not be the null identity")]
    InvalidRecipient,

    #[error("amount must be positive")]
    InvalidAmount,

    #[error("insufficient treasury funds: requested {requested}, available {available}")]
    InsufficientTreasuryFunds { requested: u128, available: u128 },

    #[error("proposer {0} holds no voting power")]
    NotAStakeholder(String),

    #[error("proposal {0} not found")]
    ProposalNotFound(u64),

    #[error("proposal is not active")]
    ProposalNotActive,

    #[error("voting window has closed")]
    VotingWindowClosed,

    #[error("voting window has not closed yet")]
    VotingWindowNotClosed,

    #[error("voter {0} has already voted on this proposal")]
    AlreadyVoted(String),

    #[error("voter {0} holds no voting power")]
    NoVotingPower(String),

    /// The proposal stays `Active` on this error. Past the deadline no
    /// further votes can arrive, so a post-deadline quorum failure is a
    /// dead end callers must treat as effectively rejected.
    #[error("quorum not reached: {votes_cast} of {total_supply} total weight voted")]
    QuorumNotReached { votes_cast: u128, total_supply: u128 },

    #[error("insufficient treasury balance at execution: need {needed}, have {available}")]
    InsufficientTreasuryBalance { needed: u128, available: u128 },

    #[error("fund transfer to {recipient} failed: {reason}")]
    TransferFailed { recipient: String, reason: String },

    #[error("invalid configuration value: {0}")]
    InvalidConfigurationValue(String),

    #[error("treasury error: {0}")]
    Treasury(#[from] TreasuryError),
}
