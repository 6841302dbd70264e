//! Governance configuration — voting window and decision thresholds.

use crate::error::GovernanceError;
use serde::{Deserialize, Serialize};

/// Tunable parameters of the proposal state machine.
///
/// The decision policy is quorum + majority over votes cast:
/// participation must reach `quorum_percent` of the oracle's total supply,
/// and affirmative weight must reach `majority_percent` of the weight cast.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceParams {
    /// Length of the voting window in seconds.
    pub voting_period_secs: u64,
    /// Minimum participation as a percentage of total supply, in (0, 100].
    pub quorum_percent: u64,
    /// Minimum affirmative share of votes cast, in (0, 100].
    pub majority_percent: u64,
}

impl Default for GovernanceParams {
    fn default() -> Self {
        Self {
            voting_period_secs: 604_800, // 7 days
            quorum_percent: 50,
            majority_percent: 51,
        }
    }
}

impl GovernanceParams {
    /// Change the voting window. Must be positive.
    pub fn set_voting_period(&mut self, secs: u64) -> Result<(), GovernanceError> {
        if secs == 0 {
            return Err(GovernanceError::InvalidConfigurationValue(
                "voting period must be positive".into(),
            ));
        }
        self.voting_period_secs = secs;
        Ok(())
    }

    /// Change the quorum threshold. Must lie in (0, 100].
    pub fn set_quorum_percent(&mut self, percent: u64) -> Result<(), GovernanceError> {
        Self::check_percent(percent, "quorum")?;
        self.quorum_percent = percent;
        Ok(())
    }

    /// Change the majority threshold. Must lie in (0, 100].
    pub fn set_majority_percent(&mut self, percent: u64) -> Result<(), GovernanceError> {
        Self::check_percent(percent, "majority")?;
        self.majority_percent = percent;
        Ok(())
    }

    fn check_percent(percent: u64, name: &str) -> Result<(), GovernanceError> {
        if percent == 0 || percent > 100 {
            return Err(GovernanceError::InvalidConfigurationValue(format!(
                "{name} percent must lie in (0, 100], got {percent}"
            )));
        }
        Ok(())
    }
}
