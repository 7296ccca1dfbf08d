//! # Agora Quorum
//!
//! Quorum outcome calculator for the Agora governance dashboard.
//!
//! ## Pipeline
//!
//! ```text
//! (startBlock, startTime) --fetch--> total voting power
//! (proposal, total voting power) --ratios--> percentages
//! (state, percentages) --classify--> outcome
//! ```
//!
//! All ratio math runs on exact decimals; 18-decimal fixed-point chain
//! values never touch a native float. The voting-power snapshot is fetched
//! once per `(startBlock, startTime)` pair and guarded by a generation
//! counter so a superseded fetch can never overwrite a newer one.

pub mod config;
pub mod fetch;
pub mod format;
pub mod outcome;
pub mod panel;
pub mod ratios;
pub mod tracker;

pub use config::QuorumConfig;
pub use fetch::{ChainClient, StakingVotingPower, VotingPowerFetcher};
pub use outcome::{classify_outcome, classify_ratios};
pub use panel::{render_panel, PanelState, QuorumDetails};
pub use ratios::{compute_ratios, QuorumRatios};
pub use tracker::{SnapshotKey, VotingPowerSnapshot, VotingPowerTracker};
