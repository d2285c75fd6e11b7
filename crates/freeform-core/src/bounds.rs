//! Constraint types consumed by the generators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies which bound a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    /// Numeric value range (int or float kinds)
    Value,
    /// Vector length
    Length,
    /// String length
    StringLength,
    /// Matrix row count
    Rows,
    /// Matrix column count
    Columns,
    /// Random array length in tree generation
    ArrayLength,
    /// Random object length in tree generation
    ObjectLength,
    /// Object key length in tree generation
    KeyLength,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Bound::Value => "value",
            Bound::Length => "length",
            Bound::StringLength => "string length",
            Bound::Rows => "row count",
            Bound::Columns => "column count",
            Bound::ArrayLength => "array length",
            Bound::ObjectLength => "object length",
            Bound::KeyLength => "key length",
        };
        f.write_str(name)
    }
}

/// Inclusive `[min, max]` bound on a count.
///
/// Both ends are signed so that a negative bound can be reported as an
/// error instead of being unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBound {
    /// Minimum count (inclusive)
    pub min: i64,
    /// Maximum count (inclusive)
    pub max: i64,
}

impl LengthBound {
    /// Create a new bound.
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Bound that only admits `len`.
    pub const fn exactly(len: i64) -> Self {
        Self { min: len, max: len }
    }

    /// Whether the bound admits exactly one count.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Whether `len` lies inside the bound.
    pub fn contains(&self, len: usize) -> bool {
        i64::try_from(len).is_ok_and(|len| self.min <= len && len <= self.max)
    }
}

/// Ordered alphabet of code points used for string sampling.
///
/// Duplicated characters are kept, so a character listed twice is twice as
/// likely to be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Charset {
    chars: Vec<char>,
}

impl Charset {
    /// Build a charset from the characters of `source`.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
        }
    }

    /// Printable ASCII, space through tilde.
    pub fn printable_ascii() -> Self {
        Self {
            chars: (' '..='~').collect(),
        }
    }

    /// The characters in order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of code points.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Whether `c` belongs to the alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

impl From<&str> for Charset {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
