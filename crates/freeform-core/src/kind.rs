//! Element kinds for the flat container generators.
//!
//! [`ElementKind`] is the typed selector: each variant carries exactly the
//! parameters its scalar generator needs. [`ElementKind::from_tag`] is the
//! runtime front end that turns a string tag plus loosely typed arguments
//! (from a CLI, a template, or YAML) into an `ElementKind`.

use crate::error::GenerationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar kind used to fill vectors and matrices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementKind {
    /// Null slots
    Null,

    /// Fair coin flips
    Bool,

    /// Any primitive, chosen uniformly per slot
    Primitive,

    /// Integers in a range
    Int {
        /// Minimum value (inclusive)
        min: i64,
        /// Maximum value (inclusive)
        max: i64,
    },

    /// Floats in a range
    Float {
        /// Minimum value (inclusive)
        min: f64,
        /// Maximum value (exclusive unless equal to `min`)
        max: f64,
    },

    /// Strings drawn from a charset
    String {
        /// Minimum string length in characters
        min_length: i64,
        /// Maximum string length in characters
        max_length: i64,
        /// Alphabet to draw characters from
        charset: String,
    },
}

impl ElementKind {
    /// Every tag understood by [`ElementKind::from_tag`].
    pub const TAGS: [&'static str; 6] = ["null", "bool", "primitive", "int", "float", "string"];

    /// Number of arguments a tag requires, or `None` for an unknown tag.
    pub fn arity(tag: &str) -> Option<usize> {
        match tag {
            "null" | "bool" | "primitive" => Some(0),
            "int" | "float" => Some(2),
            "string" => Some(3),
            _ => None,
        }
    }

    /// Resolve a tag and its arguments into a typed kind.
    ///
    /// Checks run in order: unknown tag, argument count, argument shapes.
    pub fn from_tag(tag: &str, args: &[Arg]) -> Result<Self, GenerationError> {
        let expected =
            Self::arity(tag).ok_or_else(|| GenerationError::InvalidType(tag.to_string()))?;
        if args.len() != expected {
            return Err(GenerationError::IncorrectArgumentCount {
                tag: tag.to_string(),
                expected,
                got: args.len(),
            });
        }

        let kind = match tag {
            "null" => Self::Null,
            "bool" => Self::Bool,
            "primitive" => Self::Primitive,
            "int" => Self::Int {
                min: args[0].to_int(tag, 0)?,
                max: args[1].to_int(tag, 1)?,
            },
            "float" => Self::Float {
                min: args[0].to_float(tag, 0)?,
                max: args[1].to_float(tag, 1)?,
            },
            "string" => Self::String {
                min_length: args[0].to_int(tag, 0)?,
                max_length: args[1].to_int(tag, 1)?,
                charset: args[2].to_text(tag, 2)?.to_string(),
            },
            _ => return Err(GenerationError::InvalidType(tag.to_string())),
        };
        Ok(kind)
    }

    /// The tag naming this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            ElementKind::Null => "null",
            ElementKind::Bool => "bool",
            ElementKind::Primitive => "primitive",
            ElementKind::Int { .. } => "int",
            ElementKind::Float { .. } => "float",
            ElementKind::String { .. } => "string",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Loosely typed dispatcher argument.
///
/// Text arguments are parsed on demand, so a CLI can pass every argument
/// through as `Text`.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Arg {
    /// Read the argument as an integer.
    pub fn to_int(&self, tag: &str, index: usize) -> Result<i64, GenerationError> {
        match self {
            Arg::Int(i) => Ok(*i),
            Arg::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| invalid_argument(tag, index, "an integer")),
            Arg::Float(_) => Err(invalid_argument(tag, index, "an integer")),
        }
    }

    /// Read the argument as a float. Integers widen.
    pub fn to_float(&self, tag: &str, index: usize) -> Result<f64, GenerationError> {
        match self {
            Arg::Float(f) => Ok(*f),
            Arg::Int(i) => Ok(*i as f64),
            Arg::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| invalid_argument(tag, index, "a number")),
        }
    }

    /// Read the argument as text.
    pub fn to_text(&self, tag: &str, index: usize) -> Result<&str, GenerationError> {
        match self {
            Arg::Text(s) => Ok(s.as_str()),
            _ => Err(invalid_argument(tag, index, "a string")),
        }
    }
}

fn invalid_argument(tag: &str, index: usize, expected: &'static str) -> GenerationError {
    GenerationError::InvalidArgument {
        tag: tag.to_string(),
        index,
        expected,
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Arg::Int(value)
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Arg::Int(value.into())
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Text(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Text(value)
    }
}
