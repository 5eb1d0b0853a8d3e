use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid direction: {0:?} (expected \"inflow\" or \"outflow\")")]
    InvalidDirection(String),

    #[error("invalid network: {0:?} (expected \"mainnet\" or \"testnet\")")]
    InvalidNetwork(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}
