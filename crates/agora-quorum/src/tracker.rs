//! Voting-power snapshot tracker
//!
//! One fetch per distinct `(startBlock, startTime)` pair, cached for the
//! current display cycle only. A generation counter guards against
//! out-of-order resolution: when a new pair supersedes an in-flight fetch,
//! the stale result is discarded instead of overwriting the newer one.
//! The lock is never held across an await.

use std::sync::Arc;

use agora_common::Loadable;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::fetch::VotingPowerFetcher;

/// Identity of a voting-power snapshot point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SnapshotKey {
    pub start_block: u64,
    pub start_time: i64,
}

/// A resolved total-voting-power snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingPowerSnapshot {
    /// Total voting power at the snapshot point, wei-scale
    pub total_voting_power: Decimal,
    /// Unix millis at which the value was fetched
    pub fetched_at: i64,
}

struct TrackerInner {
    generation: u64,
    key: Option<SnapshotKey>,
    state: Loadable<VotingPowerSnapshot>,
}

/// Tracks the voting-power snapshot for one displayed proposal
pub struct VotingPowerTracker<F> {
    fetcher: Arc<F>,
    inner: Arc<RwLock<TrackerInner>>,
}

impl<F> Clone for VotingPowerTracker<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F: VotingPowerFetcher> VotingPowerTracker<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            inner: Arc::new(RwLock::new(TrackerInner {
                generation: 0,
                key: None,
                state: Loadable::Loading,
            })),
        }
    }

    /// Current display state for the tracked snapshot
    pub fn state(&self) -> Loadable<VotingPowerSnapshot> {
        self.inner.read().state.clone()
    }

    /// Ensure the snapshot for `key` is loaded, fetching if needed.
    ///
    /// An unchanged key with a resolved or in-flight fetch is a no-op; a
    /// changed key (or a previous failure) issues a fresh fetch under a new
    /// generation. Returns the state after this call's fetch settled or was
    /// superseded.
    #[instrument(skip(self))]
    pub async fn refresh(&self, key: SnapshotKey) -> Loadable<VotingPowerSnapshot> {
        let generation = {
            let mut inner = self.inner.write();
            if inner.key == Some(key) && !matches!(inner.state, Loadable::Failed(_)) {
                // Single-shot per distinct pair within a display cycle
                return inner.state.clone();
            }
            inner.generation += 1;
            inner.key = Some(key);
            inner.state = Loadable::Loading;
            inner.generation
        };

        let result = self
            .fetcher
            .prior_total_voting_power(key.start_block, key.start_time)
            .await;

        let mut inner = self.inner.write();
        if inner.generation != generation {
            debug!(
                generation,
                current = inner.generation,
                "discarding superseded voting power fetch"
            );
            return inner.state.clone();
        }

        inner.state = match result {
            Ok(total_voting_power) => Loadable::Ready(VotingPowerSnapshot {
                total_voting_power,
                fetched_at: chrono::Utc::now().timestamp_millis(),
            }),
            Err(e) => {
                warn!(?key, error = %e, "voting power fetch failed");
                Loadable::Failed(e.to_string())
            }
        };
        inner.state.clone()
    }
}
