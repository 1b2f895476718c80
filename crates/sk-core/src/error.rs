use crate::battle::BattleStatus;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or transitioning battle data.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An action name could not be parsed.
    #[error("unknown action: \"{0}\"")]
    UnknownAction(String),

    /// An archetype name does not match any built-in archetype.
    #[error("unknown archetype: \"{0}\"")]
    UnknownArchetype(String),

    /// An action weight vector is not a probability distribution.
    #[error("invalid action weights: {0}")]
    InvalidWeights(String),

    /// A dodge chance lies outside [0, 1].
    #[error("dodge chance {0} is not a probability")]
    InvalidDodgeChance(f64),

    /// The battle is not in the status the operation requires.
    #[error("battle is {actual}, expected {expected}")]
    InvalidState {
        /// The status the operation requires.
        expected: BattleStatus,
        /// The status the battle is actually in.
        actual: BattleStatus,
    },
}
