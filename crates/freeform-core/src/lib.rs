//! Core types for the freeformgen fixture generator.
//!
//! This crate provides the foundational types shared by the generator
//! crate and the CLI:
//!
//! - [`PrimitiveValue`], [`TreeValue`], [`VectorValue`], [`MatrixValue`] - generated values
//! - [`LengthBound`], [`Charset`], [`Bound`] - generation constraints
//! - [`GenerationError`] - the error taxonomy shared by every generator
//! - [`ElementKind`], [`Arg`] - typed and tag-based element selection
//! - [`FixtureSchema`] - fixture definitions loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! freeform-core (this crate)
//!    │
//!    ├─── freeform-generator  (samples values satisfying these types)
//!    │
//!    └─── freeformgen         (CLI, renders values as JSON)
//! ```
//!
//! No randomness lives here; the generator crate owns every sampling
//! decision.
//!
//! # Example
//!
//! ```rust
//! use freeform_core::{Arg, ElementKind};
//!
//! let kind = ElementKind::from_tag("int", &[Arg::from(0), Arg::from(3)]).unwrap();
//! assert_eq!(kind, ElementKind::Int { min: 0, max: 3 });
//! ```

pub mod bounds;
pub mod error;
pub mod kind;
pub mod schema;
pub mod values;

// Re-exports for convenience
pub use bounds::{Bound, Charset, LengthBound};
pub use error::GenerationError;
pub use kind::{Arg, ElementKind};
pub use schema::{FieldDefinition, FixtureSchema, GeneratorConfig, SchemaError};
pub use values::{
    FixtureRecord, GeneratedValue, MatrixValue, PrimitiveValue, TreeValue, VectorValue,
};
