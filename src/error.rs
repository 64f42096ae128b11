//! Error Types
//!
//! Failures that can reach a screen. Validation problems are not errors here,
//! they live in `validation` and never leave the form.

use thiserror::Error;

/// Any failed call to the REST service
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, body: Option<String> },
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(error: gloo_net::Error) -> Self {
        match error {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("api base url must not be empty")]
    EmptyBaseUrl,
    #[error("api base url must use http:// or https:// and include a host: {0}")]
    InvalidBaseUrl(String),
    #[error("unknown log level: {0}")]
    InvalidLogLevel(String),
}

/// Persistent token storage failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("failed to write {key} to storage")]
    Write { key: String },
}
