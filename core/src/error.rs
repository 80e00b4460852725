//! Unified error types for the confera core
//!
//! The core exposes a single `DomainError` taxonomy. Every failure surfaces
//! immediately and unchanged to the caller of a core operation; translating
//! an error kind into a transport-level response is the embedding layer's
//! concern and never happens here.

use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// Eligibility check failed: ticket unpaid, reserved, remote, or
    /// hotel-exclusive where hotel access is required.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Store-enforced uniqueness violation (duplicate activity registration).
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// True for errors caused by the caller's state rather than the store.
    ///
    /// For the embedding transport layer: client errors map to 4xx-style
    /// responses, the rest to 5xx. Nothing inside this crate branches on it.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, DomainError::Database(_) | DomainError::Internal(_))
    }
}
