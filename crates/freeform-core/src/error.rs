//! Error taxonomy shared by every generator.

use crate::bounds::Bound;

/// Error type for generation calls.
///
/// Every variant is detected before any sampling happens, so a caller that
/// receives one never gets a partially built value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    /// A length or count bound is negative
    #[error("{bound} cannot be negative")]
    NegativeLength { bound: Bound },

    /// A range or count bound has its minimum above its maximum
    #[error("min {bound} cannot exceed max {bound}")]
    MinGreaterThanMax { bound: Bound },

    /// A string generator received a charset without characters
    #[error("charset cannot be empty")]
    EmptyCharset,

    /// A float range has a NaN or infinite end
    #[error("float range bounds must be finite")]
    NonFiniteRange,

    /// The tag dispatcher received the wrong number of arguments
    #[error("wrong number of arguments for {tag:?}: expected {expected}, got {got}")]
    IncorrectArgumentCount {
        tag: String,
        expected: usize,
        got: usize,
    },

    /// The tag dispatcher received an unknown tag
    #[error("invalid type {0:?}")]
    InvalidType(String),

    /// A dispatcher argument has the wrong shape for its position
    #[error("argument {index} of {tag:?} must be {expected}")]
    InvalidArgument {
        tag: String,
        index: usize,
        expected: &'static str,
    },

    /// Unique object key generation gave up
    #[error("no unique object key found after {attempts} attempts")]
    KeyspaceSaturated { attempts: usize },
}

impl GenerationError {
    pub fn negative(bound: Bound) -> Self {
        Self::NegativeLength { bound }
    }

    pub fn inverted(bound: Bound) -> Self {
        Self::MinGreaterThanMax { bound }
    }
}
