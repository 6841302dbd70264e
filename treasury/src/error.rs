use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreasuryError {
    #[error("amount must be positive")]
    ZeroAmount,

    #[error("insufficient treasury funds: need {needed}, have {available}")]
    InsufficientFunds { needed: u128, available: u128 },

    #[error("treasury balance overflow")]
    Overflow,
}
