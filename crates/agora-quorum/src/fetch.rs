//! Voting-power fetcher
//!
//! The dashboard core never talks to the chain directly. It depends on a
//! [`ChainClient`] collaborator with one call shape, and adapts it into the
//! typed [`VotingPowerFetcher`] the tracker consumes. Transport, encoding,
//! and retry policy belong to the client implementation.

use agora_common::ChainError;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tracing::{debug, instrument, warn};

use crate::config::QuorumConfig;

/// Read-only contract call collaborator
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Call a named read method on a named contract
    async fn call(
        &self,
        contract: &str,
        method: &str,
        args: &[Value],
    ) -> Result<Value, ChainError>;
}

/// Typed fetch contract consumed by the snapshot tracker
#[async_trait]
pub trait VotingPowerFetcher: Send + Sync {
    /// Total voting power at a historical `(block, time)` point, wei-scale
    async fn prior_total_voting_power(
        &self,
        start_block: u64,
        start_time: i64,
    ) -> Result<Decimal, ChainError>;
}

/// [`VotingPowerFetcher`] backed by the staking contract
pub struct StakingVotingPower<C> {
    client: C,
    contract: String,
    method: String,
}

impl<C: ChainClient> StakingVotingPower<C> {
    pub fn new(client: C, config: &QuorumConfig) -> Self {
        Self {
            client,
            contract: config.staking_contract.clone(),
            method: config.voting_power_method.clone(),
        }
    }
}

#[async_trait]
impl<C: ChainClient> VotingPowerFetcher for StakingVotingPower<C> {
    #[instrument(skip(self))]
    async fn prior_total_voting_power(
        &self,
        start_block: u64,
        start_time: i64,
    ) -> Result<Decimal, ChainError> {
        let args = [json!(start_block), json!(start_time)];
        let response = self
            .client
            .call(&self.contract, &self.method, &args)
            .await
            .map_err(|e| {
                warn!(start_block, start_time, error = %e, "voting power call failed");
                e
            })?;

        // The contract returns the wei quantity as a decimal string
        let raw = response
            .as_str()
            .ok_or_else(|| ChainError::MalformedResponse {
                method: self.method.clone(),
                reason: format!("expected a decimal string, got {response}"),
            })?;

        let total = raw
            .parse::<Decimal>()
            .map_err(|e| ChainError::MalformedResponse {
                method: self.method.clone(),
                reason: format!("{raw:?} is not a decimal: {e}"),
            })?;

        debug!(start_block, start_time, %total, "fetched total voting power");
        Ok(total)
    }
}
