//! Proposal snapshot and lifecycle state
//!
//! A [`Proposal`] is an immutable snapshot produced by the chain indexer /
//! RPC layer. All vote tallies and thresholds are 18-decimal fixed-point
//! ("wei") quantities, carried as [`Decimal`] and serialized as decimal
//! strings on the wire. This crate never mutates a proposal.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Governor lifecycle states, as reported by the chain indexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalState {
    /// Submitted, voting has not opened yet
    Pending,
    /// Voting window is open
    Active,
    /// Canceled by the proposer or guardian
    Canceled,
    /// Voting closed without meeting quorum or majority
    Defeated,
    /// Voting closed with quorum and majority met
    Succeeded,
    /// Queued in the timelock
    Queued,
    /// Queued but not executed before the grace period ended
    Expired,
    /// Executed on chain
    Executed,
}

impl ProposalState {
    /// Whether voting is still in progress (outcome is a projection).
    ///
    /// This single predicate drives both the classifier branch
    /// (`WillSucceed` vs `Succeeded`) and the panel label
    /// ("Current outcome" vs "Outcome").
    pub fn is_in_progress(&self) -> bool {
        matches!(self, ProposalState::Active | ProposalState::Pending)
    }
}

/// Immutable proposal snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    /// Block height at which voting power was snapshotted
    pub start_block: u64,

    /// Unix timestamp (seconds) of the voting-power snapshot
    pub start_time: i64,

    /// Absolute for-vote threshold required to pass (wei-scale)
    pub majority_percentage: Decimal,

    /// Absolute voting-power threshold for quorum (wei-scale)
    pub quorum: Decimal,

    /// Voting power cast in favor (wei-scale); missing on the wire means 0
    #[serde(default)]
    pub for_votes: Decimal,

    /// Voting power cast against (wei-scale); missing on the wire means 0
    #[serde(default)]
    pub against_votes: Decimal,
}

impl Proposal {
    /// Create a snapshot with the given thresholds and zeroed tallies
    pub fn new(
        start_block: u64,
        start_time: i64,
        majority_percentage: Decimal,
        quorum: Decimal,
    ) -> Self {
        Self {
            start_block,
            start_time,
            majority_percentage,
            quorum,
            for_votes: Decimal::ZERO,
            against_votes: Decimal::ZERO,
        }
    }

    /// Set the for-vote tally
    pub fn with_for_votes(mut self, for_votes: Decimal) -> Self {
        self.for_votes = for_votes;
        self
    }

    /// Set the against-vote tally
    pub fn with_against_votes(mut self, against_votes: Decimal) -> Self {
        self.against_votes = against_votes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_in_progress_predicate() {
        assert!(ProposalState::Pending.is_in_progress());
        assert!(ProposalState::Active.is_in_progress());
        assert!(!ProposalState::Canceled.is_in_progress());
        assert!(!ProposalState::Defeated.is_in_progress());
        assert!(!ProposalState::Succeeded.is_in_progress());
        assert!(!ProposalState::Queued.is_in_progress());
        assert!(!ProposalState::Expired.is_in_progress());
        assert!(!ProposalState::Executed.is_in_progress());
    }

    #[test]
    fn test_deserialize_wire_format() {
        // Decimal strings for wei-scale values, camelCase keys
        let json = r#"{
            "startBlock": 4510000,
            "startTime": 1612345678,
            "majorityPercentage": "725000000000000000000000",
            "quorum": "1450000000000000000000000",
            "forVotes": "900000000000000000000000",
            "againstVotes": "100000000000000000000000"
        }"#;

        let proposal: Proposal = serde_json::from_str(json).unwrap();
        assert_eq!(proposal.start_block, 4510000);
        assert_eq!(proposal.for_votes, dec!(900000000000000000000000));
        assert_eq!(proposal.against_votes, dec!(100000000000000000000000));
    }

    #[test]
    fn test_missing_tallies_default_to_zero() {
        let json = r#"{
            "startBlock": 4510000,
            "startTime": 1612345678,
            "majorityPercentage": "1",
            "quorum": "2"
        }"#;

        let proposal: Proposal = serde_json::from_str(json).unwrap();
        assert_eq!(proposal.for_votes, Decimal::ZERO);
        assert_eq!(proposal.against_votes, Decimal::ZERO);
    }

    #[test]
    fn test_builder() {
        let proposal = Proposal::new(100, 1_600_000_000, dec!(50), dec!(500))
            .with_for_votes(dec!(600))
            .with_against_votes(dec!(400));
        assert_eq!(proposal.for_votes, dec!(600));
        assert_eq!(proposal.against_votes, dec!(400));
    }
}
