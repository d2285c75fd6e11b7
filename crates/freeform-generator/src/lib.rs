//! Constrained random value generators for freeformgen.
//!
//! This crate produces random scalars, vectors, matrices, and nested
//! array/object trees that satisfy caller-supplied bounds. It exists to
//! build realistic fixture data without hand-writing sample payloads.
//!
//! # Architecture
//!
//! ```text
//! caller
//!   │
//!   ├── dispatch (tag / ElementKind) ──┐
//!   │                                  ▼
//!   ├── tree ─────────────────► container (vector, matrix)
//!   │                                  │
//!   │                                  ▼
//!   └─────────────────────────► scalars (int, float, string, bool, null, primitive)
//!                                      │
//!                                      ▼
//!                               bounds (checked before any sampling)
//! ```
//!
//! Every generator takes the RNG explicitly. Use a seeded `StdRng` for
//! reproducible output or `rand::rng()` otherwise.
//!
//! # Example
//!
//! ```rust
//! use freeform_generator::{vector_of_tag, Arg};
//! use freeform_core::VectorValue;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let value = vector_of_tag(&mut rng, "int", 3, 6, &[Arg::from(0), Arg::from(3)]).unwrap();
//! if let VectorValue::Int(values) = value {
//!     assert!((3..=6).contains(&values.len()));
//! }
//! ```
//!
//! # Errors
//!
//! Bounds are validated before sampling and the first violation wins:
//! negative length, then min above max on a length, then kind-specific
//! checks (value range, string length, charset). Tree generation treats a
//! negative length as "pick one" and only fails when unique object keys run
//! out.

pub mod bounds;
pub mod dispatch;
pub mod generator;
pub mod generators;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use dispatch::{matrix_of, matrix_of_tag, scalar_of, scalar_of_tag, vector_of, vector_of_tag};
pub use freeform_core::{Arg, ElementKind, GenerationError};
pub use generator::{generate_field, FixtureGenerator, GeneratorError, RecordIterator};
pub use generators::tree::{array, object, value};
pub use generators::{
    generate_bool, generate_float, generate_int, generate_matrix, generate_null,
    generate_primitive, generate_string, generate_vector, TreeGenerator, TreeOptions,
};
