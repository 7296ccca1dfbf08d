//! Quorum panel view model
//!
//! Assembles the four text lines of the proposal quorum panel from the
//! ratio engine, the outcome classifier, and the tracked voting-power
//! snapshot. Pure view-model assembly; actual rendering belongs to the
//! host dashboard.

use agora_common::{Loadable, Outcome, Proposal, ProposalState};
use serde::Serialize;

use crate::config::QuorumConfig;
use crate::format::{abbreviate, display_percent, from_wei};
use crate::outcome::classify_ratios;
use crate::ratios::{compute_ratios, QuorumRatios};
use crate::tracker::VotingPowerSnapshot;

/// Display state of the quorum panel
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum PanelState {
    /// Snapshot fetch pending
    Loading { placeholder: String },
    /// Snapshot fetch failed; recoverable, not perpetual loading
    Unavailable { reason: String },
    /// Snapshot resolved; panel lines are ready
    Ready(QuorumDetails),
}

/// The four panel lines plus the raw numbers behind them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuorumDetails {
    /// Raw computed ratios, pre-rounded to 9/2 fractional digits
    pub ratios: QuorumRatios,
    /// Classified outcome; `None` when the ratios were insufficient
    pub outcome: Option<Outcome>,
    pub support_required: String,
    pub vp_needed: String,
    pub turnout: String,
    pub outcome_line: String,
}

impl QuorumDetails {
    /// The panel lines in display order
    pub fn lines(&self) -> [&str; 4] {
        [
            &self.support_required,
            &self.vp_needed,
            &self.turnout,
            &self.outcome_line,
        ]
    }
}

/// Build the panel view for a proposal at its current lifecycle state
pub fn render_panel(
    proposal: &Proposal,
    state: ProposalState,
    snapshot: &Loadable<VotingPowerSnapshot>,
    config: &QuorumConfig,
) -> PanelState {
    let snapshot = match snapshot {
        Loadable::Loading => {
            return PanelState::Loading {
                placeholder: config.loading_placeholder.clone(),
            }
        }
        Loadable::Failed(reason) => {
            return PanelState::Unavailable {
                reason: format!("Unable to load voting power: {reason}"),
            }
        }
        Loadable::Ready(snapshot) => snapshot,
    };

    let ratios = compute_ratios(proposal, snapshot.total_voting_power);
    let outcome = classify_ratios(state, &ratios, proposal.quorum).ok();

    let support_required = match ratios.support_needed {
        Some(pct) => format!("Support Required: >{}%", display_percent(pct)),
        None => "Support Required: n/a".to_string(),
    };
    let vp_needed = format!(
        "VP needed for quorum: >{} ({})",
        abbreviate(from_wei(proposal.quorum)),
        match ratios.vp_needed {
            Some(pct) => format!(">{}%", display_percent(pct)),
            None => "n/a".to_string(),
        }
    );
    let turnout = format!(
        "VP turnout: {} ({})",
        abbreviate(from_wei(ratios.votes_cast)),
        match ratios.voted_percent {
            Some(pct) => format!("{}%", display_percent(pct)),
            None => "n/a".to_string(),
        }
    );

    // The same predicate picks the classifier branch and the label prefix
    let prefix = if state.is_in_progress() {
        "Current outcome"
    } else {
        "Outcome"
    };
    let verdict = outcome.map_or("Insufficient data", |o| o.label());
    let outcome_line = format!("{prefix}: {verdict}");

    PanelState::Ready(QuorumDetails {
        ratios,
        outcome,
        support_required,
        vp_needed,
        turnout,
        outcome_line,
    })
}
