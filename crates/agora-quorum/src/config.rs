//! Quorum panel configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Configuration for the quorum panel and its chain collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuorumConfig {
    /// Name of the staking contract holding historical voting power
    pub staking_contract: String,
    /// Read method returning total voting power at (block, time)
    pub voting_power_method: String,
    /// Placeholder text shown while the snapshot is loading
    pub loading_placeholder: String,
}

impl Default for QuorumConfig {
    fn default() -> Self {
        Self {
            staking_contract: "staking".to_string(),
            voting_power_method: "getPriorTotalVotingPower".to_string(),
            loading_placeholder: "Loading, please wait...".to_string(),
        }
    }
}

impl QuorumConfig {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        let mut cfg = Self::default();

        if let Ok(contract) = std::env::var("AGORA_STAKING_CONTRACT") {
            cfg.staking_contract = contract;
        }
        if let Ok(method) = std::env::var("AGORA_VOTING_POWER_METHOD") {
            cfg.voting_power_method = method;
        }
        if let Ok(placeholder) = std::env::var("AGORA_LOADING_PLACEHOLDER") {
            cfg.loading_placeholder = placeholder;
        }

        Ok(cfg)
    }
}
