//! Error types for game-core.
//!
//! Every failure in the rules engine is an expected gameplay outcome (not
//! enough MP, not enough gold, a spell that is not equipped). Operations that
//! fail leave the character untouched, so callers may simply report the error
//! and continue.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each operation family has its own error enum
//! - **No Partial Mutation**: An `Err` always means "nothing changed"
//! - **Severity Classification**: Errors are categorized for recovery strategies

use crate::ids::MagicId;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The same request may succeed later (e.g. after MP regenerates)
/// - **Validation**: The request refers to something that does not exist
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Temporary condition; retrying later with the same input may succeed.
    ///
    /// Examples: insufficient MP, insufficient gold
    Recoverable,

    /// Invalid input that should not be retried without changes.
    ///
    /// Examples: casting a spell the character has not equipped
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all game-core errors.
///
/// Provides a uniform interface for error classification across the crate so
/// the runtime can log and route failures without matching on every variant.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// MP could not be consumed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceError {
    #[error("insufficient MP: required {required}, available {available}")]
    InsufficientMp { required: u32, available: u32 },
}

impl GameError for ResourceError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientMp { .. } => "RESOURCE_INSUFFICIENT_MP",
        }
    }
}

/// Gold could not be spent.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GoldError {
    #[error("insufficient gold: required {required}, available {available}")]
    InsufficientGold { required: u32, available: u32 },
}

impl GameError for GoldError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientGold { .. } => "GOLD_INSUFFICIENT",
        }
    }
}

/// A spell could not be cast.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastError {
    #[error("magic {0} is not equipped")]
    UnknownMagic(MagicId),

    #[error("cannot cast {magic}")]
    InsufficientMp {
        magic: MagicId,
        #[source]
        source: ResourceError,
    },
}

impl GameError for CastError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownMagic(_) => ErrorSeverity::Validation,
            Self::InsufficientMp { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownMagic(_) => "CAST_UNKNOWN_MAGIC",
            Self::InsufficientMp { .. } => "CAST_INSUFFICIENT_MP",
        }
    }
}

/// A character loaded from outside the rules engine breaks an invariant the
/// engine's own mutations maintain.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    #[error("character level must be at least 1")]
    ZeroLevel,

    #[error("HP {current} exceeds maximum {maximum}")]
    HpOverflow { current: u32, maximum: u32 },

    #[error("MP {current} exceeds maximum {maximum}")]
    MpOverflow { current: u32, maximum: u32 },

    #[error("magic {0} is equipped more than once")]
    DuplicateMagic(MagicId),

    #[error("proficiency of {magic} is inconsistent: exp {exp}, next {next_exp}")]
    Proficiency {
        magic: MagicId,
        exp: u32,
        next_exp: u32,
    },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroLevel => "STATE_ZERO_LEVEL",
            Self::HpOverflow { .. } => "STATE_HP_OVERFLOW",
            Self::MpOverflow { .. } => "STATE_MP_OVERFLOW",
            Self::DuplicateMagic(_) => "STATE_DUPLICATE_MAGIC",
            Self::Proficiency { .. } => "STATE_PROFICIENCY",
        }
    }
}
