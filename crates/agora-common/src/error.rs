//! Error types for the Agora dashboard core
//!
//! Provides a unified error type and domain-specific error variants

use thiserror::Error;

/// Result type alias using AgoraError
pub type Result<T> = std::result::Result<T, AgoraError>;

/// Unified error type for Agora operations
#[derive(Debug, Error)]
pub enum AgoraError {
    // Quorum calculation errors
    #[error("Quorum error: {0}")]
    Quorum(#[from] QuorumError),

    // Chain call errors
    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Quorum/ratio calculation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuorumError {
    #[error("Insufficient data to classify outcome: {reason}")]
    InsufficientData { reason: &'static str },
}

/// Errors from the chain-call collaborator
#[derive(Debug, Clone, Error)]
pub enum ChainError {
    #[error("Unknown contract: {0}")]
    UnknownContract(String),

    #[error("Call to {contract}.{method} failed: {reason}")]
    CallFailed {
        contract: String,
        method: String,
        reason: String,
    },

    #[error("Malformed response from {method}: {reason}")]
    MalformedResponse { method: String, reason: String },
}

// Implement From for common external error types
impl From<serde_json::Error> for AgoraError {
    fn from(err: serde_json::Error) -> Self {
        AgoraError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for AgoraError {
    fn from(err: std::io::Error) -> Self {
        AgoraError::Internal(err.to_string())
    }
}

impl From<anyhow::Error> for AgoraError {
    fn from(err: anyhow::Error) -> Self {
        AgoraError::Internal(err.to_string())
    }
}
