//! Error types for the engine.

/// Errors that can occur when setting up a game.
///
/// Gameplay itself never fails: invalid commands are no-ops and defeat is a
/// game state, not an error.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The engine configuration cannot produce a playable floor.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
