//! Unified error types surfaced by the runtime API.
//!
//! Wraps gameplay failures from `game-core` and snapshot decoding or validation
//! failures so
//! clients can bubble them up with consistent context.
use game_core::{CastError, ErrorSeverity, GameError, GoldError, ResourceError, StateError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session is paused")]
    Paused,

    #[error(transparent)]
    Cast(#[from] CastError),

    #[error(transparent)]
    Gold(#[from] GoldError),

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error("session snapshot encoding failed")]
    Snapshot(#[source] bincode::Error),

    #[error("session snapshot holds an invalid character")]
    InvalidState(#[from] StateError),
}

impl RuntimeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Paused => ErrorSeverity::Recoverable,
            Self::Cast(e) => e.severity(),
            Self::Gold(e) => e.severity(),
            Self::Resource(e) => e.severity(),
            Self::Snapshot(_) => ErrorSeverity::Validation,
            Self::InvalidState(e) => e.severity(),
        }
    }
}
