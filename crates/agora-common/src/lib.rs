//! # Agora Common
//!
//! Shared types and errors for the Agora governance dashboard core.
//!
//! ## Core Types
//!
//! - [`Proposal`]: immutable on-chain proposal snapshot (18-decimal
//!   fixed-point vote tallies and thresholds)
//! - [`ProposalState`]: Governor lifecycle states
//! - [`Outcome`]: classified proposal outcome labels
//! - [`Loadable`]: loading / ready / failed display state for async values

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{AgoraError, ChainError, QuorumError, Result};
pub use types::{
    loadable::Loadable,
    outcome::Outcome,
    proposal::{Proposal, ProposalState},
};

/// Agora version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fractional digits of the on-chain fixed-point encoding ("wei")
pub const TOKEN_DECIMALS: u32 = 18;

/// Fractional digits kept on support / quorum / for-vote percentages
pub const RATIO_DP: u32 = 9;

/// Fractional digits kept on the turnout percentage
pub const TURNOUT_DP: u32 = 2;
