//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`ItemHubError`]
//! via `#[from]`. Adapters box their failures into [`ItemHubError::Storage`]
//! so the domain never names a driver type.

use crate::id::ItemId;

/// Top-level error returned by every application operation.
#[derive(Debug, thiserror::Error)]
pub enum ItemHubError {
    /// The request violates a domain rule and can be corrected by the caller.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The referenced record does not exist.
    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    /// The backing store failed. Not recovered locally.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain rule violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The `id` carried in a replacement body disagrees with the targeted id.
    #[error("body id {body} does not match path id {path}")]
    IdMismatch {
        /// Identifier taken from the request path.
        path: ItemId,
        /// Identifier found in the request body.
        body: ItemId,
    },
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up.
    pub entity: &'static str,
    /// Identifier that was looked up, rendered as text.
    pub id: String,
}
