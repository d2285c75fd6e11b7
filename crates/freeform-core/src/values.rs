//! Value representations produced by the generators.
//!
//! Every value is created fresh per call and handed to the caller by
//! value. All of them serialize untagged, so JSON output looks like the
//! data itself rather than like the enum.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single scalar value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimitiveValue {
    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// String value
    String(String),

    /// Boolean value
    Bool(bool),

    /// Null value
    Null,
}

impl PrimitiveValue {
    /// Tag of the kind this value belongs to.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Bool(_) => "bool",
            Self::Null => "null",
        }
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Recursively nested array/object value bottoming out in primitives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeValue {
    /// Leaf value
    Primitive(PrimitiveValue),

    /// Ordered sequence
    Array(Vec<TreeValue>),

    /// Mapping with unique keys
    Object(BTreeMap<String, TreeValue>),
}

impl TreeValue {
    /// Container nesting depth: 0 for a primitive, 1 for a flat container.
    pub fn depth(&self) -> usize {
        match self {
            Self::Primitive(_) => 0,
            Self::Array(items) => 1 + items.iter().map(Self::depth).max().unwrap_or(0),
            Self::Object(entries) => 1 + entries.values().map(Self::depth).max().unwrap_or(0),
        }
    }

    pub fn is_container(&self) -> bool {
        !matches!(self, Self::Primitive(_))
    }

    pub fn as_primitive(&self) -> Option<&PrimitiveValue> {
        match self {
            Self::Primitive(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[TreeValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, TreeValue>> {
        match self {
            Self::Object(entries) => Some(entries),
            _ => None,
        }
    }
}

impl From<PrimitiveValue> for TreeValue {
    fn from(value: PrimitiveValue) -> Self {
        Self::Primitive(value)
    }
}

/// A generated vector, one variant per element kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VectorValue {
    Null(Vec<()>),
    Bool(Vec<bool>),
    Int(Vec<i64>),
    Float(Vec<f64>),
    String(Vec<String>),
    Primitive(Vec<PrimitiveValue>),
}

impl VectorValue {
    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            Self::Null(v) => v.len(),
            Self::Bool(v) => v.len(),
            Self::Int(v) => v.len(),
            Self::Float(v) => v.len(),
            Self::String(v) => v.len(),
            Self::Primitive(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tag of the element kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null(_) => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Primitive(_) => "primitive",
        }
    }
}

/// A generated matrix. Rows may differ in length.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MatrixValue {
    Null(Vec<Vec<()>>),
    Bool(Vec<Vec<bool>>),
    Int(Vec<Vec<i64>>),
    Float(Vec<Vec<f64>>),
    String(Vec<Vec<String>>),
    Primitive(Vec<Vec<PrimitiveValue>>),
}

impl MatrixValue {
    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.row_lengths().len()
    }

    /// Length of every row, in order.
    pub fn row_lengths(&self) -> Vec<usize> {
        match self {
            Self::Null(m) => m.iter().map(Vec::len).collect(),
            Self::Bool(m) => m.iter().map(Vec::len).collect(),
            Self::Int(m) => m.iter().map(Vec::len).collect(),
            Self::Float(m) => m.iter().map(Vec::len).collect(),
            Self::String(m) => m.iter().map(Vec::len).collect(),
            Self::Primitive(m) => m.iter().map(Vec::len).collect(),
        }
    }

    /// Tag of the element kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null(_) => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Primitive(_) => "primitive",
        }
    }
}

/// Any value a fixture field can hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeneratedValue {
    Scalar(PrimitiveValue),
    Vector(VectorValue),
    Matrix(MatrixValue),
    Tree(TreeValue),
}

/// One generated fixture record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixtureRecord {
    /// Zero-based position in the generated sequence
    pub index: u64,

    /// Field values keyed by field name
    pub fields: BTreeMap<String, GeneratedValue>,
}

impl FixtureRecord {
    pub fn new(index: u64) -> Self {
        Self {
            index,
            fields: BTreeMap::new(),
        }
    }

    /// Get a field value by name.
    pub fn get_field(&self, name: &str) -> Option<&GeneratedValue> {
        self.fields.get(name)
    }

    /// Get the number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}
