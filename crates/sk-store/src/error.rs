use sk_core::BattleId;
use thiserror::Error;

/// Errors surfaced by store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No battle is stored under this id.
    #[error("battle not found: {0}")]
    NotFound(BattleId),

    /// A battle with this id is already stored.
    #[error("battle already exists: {0}")]
    AlreadyExists(BattleId),

    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored document could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The in-memory store's lock was poisoned by a panicking writer.
    #[error("battle store lock was poisoned")]
    LockPoisoned,
}

/// Convenience alias for store results.
pub type StoreResult<T> = Result<T, StoreError>;
