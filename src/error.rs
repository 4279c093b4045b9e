// src/error.rs
use thiserror::Error;

/// Everything that can go wrong while building requests or decoding
/// PowerDNS payloads.
#[derive(Debug, Error)]
pub enum PdnsError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("failed to deserialize PowerDNS payload: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("'{kind}' is not a valid {role} zone kind")]
    InvalidZoneKind { kind: String, role: &'static str },

    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl PdnsError {
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        PdnsError::InvalidRequest(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        PdnsError::InvalidConfig(msg.into())
    }

    /// True for failures caused by how the client or path were set up.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, PdnsError::InvalidRequest(_))
    }
}

pub type Result<T> = std::result::Result<T, PdnsError>;
