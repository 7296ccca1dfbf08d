//! Outcome classifier
//!
//! A fixed-priority decision table over the computed ratios. Comparisons
//! are exact decimal strict greater-than; a threshold hit exactly (equal)
//! does not pass.

use agora_common::{Outcome, ProposalState, QuorumError};
use rust_decimal::Decimal;

use crate::ratios::QuorumRatios;

/// Classify a proposal's outcome.
///
/// Priority order:
/// 1. `Canceled` is always `Vetoed`, whatever the tallies look like.
/// 2. An undefined `for_percent` or `support_needed` (zero-denominator
///    sentinel from the ratio engine) is insufficient data, not a verdict.
/// 3. Above both thresholds: `WillSucceed` while voting is in progress,
///    `Succeeded` once final.
/// 4. Otherwise: `WillBeDefeated` while in progress, `Defeated` once final.
pub fn classify_outcome(
    state: ProposalState,
    for_percent: Option<Decimal>,
    support_needed: Option<Decimal>,
    votes_cast: Decimal,
    quorum: Decimal,
) -> Result<Outcome, QuorumError> {
    if state == ProposalState::Canceled {
        return Ok(Outcome::Vetoed);
    }

    let (for_percent, support_needed) = match (for_percent, support_needed) {
        (Some(f), Some(s)) => (f, s),
        (None, _) => {
            return Err(QuorumError::InsufficientData {
                reason: "for-vote percentage is undefined (no votes cast)",
            })
        }
        (_, None) => {
            return Err(QuorumError::InsufficientData {
                reason: "support threshold is undefined (zero or out-of-range total voting power)",
            })
        }
    };

    let in_progress = state.is_in_progress();

    if for_percent > support_needed && votes_cast > quorum {
        Ok(if in_progress {
            Outcome::WillSucceed
        } else {
            Outcome::Succeeded
        })
    } else {
        Ok(if in_progress {
            Outcome::WillBeDefeated
        } else {
            Outcome::Defeated
        })
    }
}

/// Classify directly from the ratio engine's output
pub fn classify_ratios(
    state: ProposalState,
    ratios: &QuorumRatios,
    quorum: Decimal,
) -> Result<Outcome, QuorumError> {
    classify_outcome(
        state,
        ratios.for_percent,
        ratios.support_needed,
        ratios.votes_cast,
        quorum,
    )
}
