//! Display state for asynchronously loaded values
//!
//! Consumers of a pending fetch must always observe a well-defined loading
//! state, never a stale or undefined value. `Failed` is a distinct
//! recoverable state so a failed chain call cannot leave a panel stuck in
//! perpetual loading.

use serde::{Deserialize, Serialize};

/// A value that is loading, loaded, or failed to load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "value")]
pub enum Loadable<T> {
    /// Fetch pending; render a placeholder
    Loading,
    /// Value resolved
    Ready(T),
    /// Fetch failed with a human-readable reason
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Loadable::Ready(_))
    }

    /// The resolved value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Apply a function to the resolved value, preserving the other states
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Loadable<U> {
        match self {
            Loadable::Loading => Loadable::Loading,
            Loadable::Ready(value) => Loadable::Ready(f(value)),
            Loadable::Failed(reason) => Loadable::Failed(reason),
        }
    }
}
