//! Store error model.

use stockbook_auth::CredentialError;
use thiserror::Error;

/// Result type used across the store layer.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
///
/// Absence on a point lookup is **not** an error (those operations return
/// `Ok(None)`); this enum covers the cases a caller may want to present
/// distinctly.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be opened at all. Fatal at startup; no
    /// other operation may be attempted.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A unique constraint was violated (product sku/barcode, username).
    #[error("duplicate value: {0}")]
    Duplicate(String),

    /// A transaction row referenced a missing product, party, or operator.
    #[error("referential integrity violated: {0}")]
    ForeignKey(String),

    /// Credential hashing/verification infrastructure failed.
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// Any other backend failure for a single operation. The pool stays
    /// usable; later operations may still succeed.
    #[error("store operation failed: {0}")]
    Backend(#[from] sqlx::Error),
}

/// Classify an sqlx error into the store taxonomy.
pub(crate) fn classify(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return StoreError::Duplicate(db.message().to_string());
        }
        if db.is_foreign_key_violation() {
            return StoreError::ForeignKey(db.message().to_string());
        }
    }
    StoreError::Backend(err)
}
