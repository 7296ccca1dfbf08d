//! Classified proposal outcomes

use serde::{Deserialize, Serialize};

/// Outcome labels produced by the quorum classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Proposal was canceled
    Vetoed,
    /// Voting still open, currently on track to pass
    WillSucceed,
    /// Voting closed, quorum and majority met
    Succeeded,
    /// Voting still open, currently short of quorum or majority
    WillBeDefeated,
    /// Voting closed short of quorum or majority
    Defeated,
}

impl Outcome {
    /// Human-readable label text for the panel
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Vetoed => "Vetoed",
            Outcome::WillSucceed => "Will succeed",
            Outcome::Succeeded => "Succeeded",
            Outcome::WillBeDefeated => "Will be defeated",
            Outcome::Defeated => "Defeated",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
