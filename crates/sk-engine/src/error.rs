//! Error types for the turn-resolution engine.

use sk_core::BattleStatus;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur when setting up turn resolution.
///
/// Resolving a turn itself never fails; only opening a session on a battle
/// in the wrong state does.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Turns can only be resolved on an ongoing battle.
    #[error("cannot resolve turns: battle is {0}")]
    InvalidState(BattleStatus),
}
