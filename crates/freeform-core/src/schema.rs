//! Fixture schema definitions loaded from YAML.
//!
//! A fixture schema names a list of fields and the generator that fills
//! each of them:
//!
//! ```yaml
//! version: 1
//! seed: 42
//! fields:
//!   - name: scores
//!     generator:
//!       type: vector_of
//!       min_length: 3
//!       max_length: 6
//!       element:
//!         type: int
//!         min: 0
//!         max: 100
//!   - name: payload
//!     generator:
//!       type: object
//! ```

use crate::kind::ElementKind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Schema versions this crate understands.
pub const SUPPORTED_VERSION: u32 = 1;

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Two fields share a name
    #[error("Duplicate field name: {0}")]
    DuplicateField(String),

    /// Schema declares a version this build cannot read
    #[error("Unsupported schema version: {0}")]
    UnsupportedVersion(u32),

    /// Schema has no fields
    #[error("Schema defines no fields")]
    NoFields,
}

fn default_version() -> u32 {
    SUPPORTED_VERSION
}

fn random_length() -> i64 {
    -1
}

/// Generator configuration for a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorConfig {
    /// One scalar of the given kind
    Scalar { element: ElementKind },

    /// A vector of the given kind
    VectorOf {
        element: ElementKind,
        /// Minimum vector length (inclusive)
        min_length: i64,
        /// Maximum vector length (inclusive)
        max_length: i64,
    },

    /// A matrix of the given kind
    MatrixOf {
        element: ElementKind,
        min_rows: i64,
        max_rows: i64,
        min_cols: i64,
        max_cols: i64,
    },

    /// A nested array; a negative length picks one at random
    Array {
        #[serde(default = "random_length")]
        length: i64,
    },

    /// A nested object; a negative length picks one at random
    Object {
        #[serde(default = "random_length")]
        length: i64,
    },

    /// An array, object, or primitive chosen at random
    Tree,
}

impl GeneratorConfig {
    /// Short name used in logs.
    pub fn type_name(&self) -> &'static str {
        match self {
            GeneratorConfig::Scalar { .. } => "scalar",
            GeneratorConfig::VectorOf { .. } => "vector_of",
            GeneratorConfig::MatrixOf { .. } => "matrix_of",
            GeneratorConfig::Array { .. } => "array",
            GeneratorConfig::Object { .. } => "object",
            GeneratorConfig::Tree => "tree",
        }
    }
}

/// A named field and its generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name
    pub name: String,

    /// Generator that fills the field
    pub generator: GeneratorConfig,
}

/// Full fixture schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureSchema {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Seed for reproducible output; omitted means OS entropy
    #[serde(default)]
    pub seed: Option<u64>,

    /// Field definitions in output order
    pub fields: Vec<FieldDefinition>,
}

impl FixtureSchema {
    /// Load schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse schema from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let schema: FixtureSchema = serde_yaml::from_str(yaml)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Check structural invariants. Generator bounds are checked by the
    /// generator crate, which owns the bounds validator.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.version != SUPPORTED_VERSION {
            return Err(SchemaError::UnsupportedVersion(self.version));
        }
        if self.fields.is_empty() {
            return Err(SchemaError::NoFields);
        }
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
        }
        Ok(())
    }

    /// Get a field definition by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get all field names in order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SCHEMA: &str = r#"
version: 1
seed: 7
fields:
  - name: scores
    generator:
      type: vector_of
      min_length: 3
      max_length: 6
      element:
        type: int
        min: 0
        max: 100
  - name: grid
    generator:
      type: matrix_of
      min_rows: 1
      max_rows: 2
      min_cols: 0
      max_cols: 4
      element:
        type: string
        min_length: 1
        max_length: 3
        charset: "xyz"
  - name: flag
    generator:
      type: scalar
      element:
        type: bool
  - name: payload
    generator:
      type: object
  - name: items
    generator:
      type: array
      length: 4
  - name: anything
    generator:
      type: tree
"#;

    #[test]
    fn test_parse_fixture_schema() {
        let schema = FixtureSchema::from_yaml(SCHEMA).unwrap();
        assert_eq!(schema.version, 1);
        assert_eq!(schema.seed, Some(7));
        assert_eq!(
            schema.field_names(),
            vec!["scores", "grid", "flag", "payload", "items", "anything"]
        );
    }

    #[test]
    fn test_generator_configs() {
        let schema = FixtureSchema::from_yaml(SCHEMA).unwrap();

        assert_eq!(
            schema.get_field("scores").unwrap().generator,
            GeneratorConfig::VectorOf {
                element: ElementKind::Int { min: 0, max: 100 },
                min_length: 3,
                max_length: 6,
            }
        );
        assert_eq!(
            schema.get_field("payload").unwrap().generator,
            GeneratorConfig::Object { length: -1 }
        );
        assert_eq!(
            schema.get_field("items").unwrap().generator,
            GeneratorConfig::Array { length: 4 }
        );
        assert_eq!(
            schema.get_field("anything").unwrap().generator.type_name(),
            "tree"
        );
        assert!(schema.get_field("missing").is_none());
    }

    #[test]
    fn test_default_version_and_seed() {
        let schema = FixtureSchema::from_yaml(
            "fields:\n  - name: a\n    generator:\n      type: tree\n",
        )
        .unwrap();
        assert_eq!(schema.version, SUPPORTED_VERSION);
        assert_eq!(schema.seed, None);
    }

    #[test]
    fn test_duplicate_field() {
        let yaml = r#"
fields:
  - name: a
    generator:
      type: tree
  - name: a
    generator:
      type: tree
"#;
        let err = FixtureSchema::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateField(name) if name == "a"));
    }

    #[test]
    fn test_unsupported_version() {
        let yaml = "version: 2\nfields:\n  - name: a\n    generator:\n      type: tree\n";
        let err = FixtureSchema::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, SchemaError::UnsupportedVersion(2)));
    }

    #[test]
    fn test_no_fields() {
        let err = FixtureSchema::from_yaml("fields: []\n").unwrap_err();
        assert!(matches!(err, SchemaError::NoFields));
    }

    #[test]
    fn test_unknown_generator_type() {
        let yaml = "fields:\n  - name: a\n    generator:\n      type: histogram\n";
        let err = FixtureSchema::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, SchemaError::YamlError(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SCHEMA.as_bytes()).unwrap();

        let schema = FixtureSchema::from_file(file.path()).unwrap();
        assert_eq!(schema.fields.len(), 6);

        let err = FixtureSchema::from_file(file.path().with_extension("missing")).unwrap_err();
        assert!(matches!(err, SchemaError::IoError(_)));
    }
}
