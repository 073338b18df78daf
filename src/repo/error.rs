//! Repository error types.
//!
//! Variant policy:
//!
//! | Variant | When |
//! |---------|------|
//! | `Conflict` | Uniqueness violation detected before insert |
//! | `NotFound` | Update or delete aimed at a missing id |
//! | `NoFields` | Partial update with nothing to change |
//! | `Backend` | Connection or statement failure from the driver |
//!
//! Lookups where absence is normal (fetch-by-location with zero rows)
//! return an empty `Vec`, never `NotFound`; escalating an empty result
//! is the router's call.

use thiserror::Error;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Repository errors
#[derive(Debug, Error)]
pub enum RepoError {
    /// Duplicate key detected on insert
    #[error("{0}")]
    Conflict(String),

    /// No row with the given store-assigned id
    #[error("{0}")]
    NotFound(String),

    /// Partial update carried no updatable fields
    #[error("No valid fields to update.")]
    NoFields,

    /// Driver-level failure, surfaced unchanged
    #[error("Database error: {0}")]
    Backend(#[from] sqlx::Error),
}
