//! Error types for feed loading.
//!
//! # Design
//! Loading collapses every failure into two kinds. `Connectivity` covers any
//! transport failure, whatever its cause. `InvalidData` covers every response
//! that arrived but could not be used: a status other than 200, a body that is
//! not JSON, or a body that does not match the feed envelope. The cause is not
//! kept; callers only need to know which of the two happened.

use thiserror::Error;

/// Terminal failure of a single `load` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The transport failed before an HTTP response was obtained.
    #[error("connectivity failure")]
    Connectivity,

    /// A response arrived but was unusable.
    #[error("invalid data")]
    InvalidData,
}

/// Failure reported by an `HttpClient` when no response could be obtained.
///
/// The loader never inspects it; every `TransportError` becomes
/// `LoadError::Connectivity`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport failure: {message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
