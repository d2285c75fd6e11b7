//! Individual value generators.
//!
//! Every generator takes the RNG as an explicit `&mut R` so callers decide
//! between a seeded `StdRng` for reproducible fixtures and `rand::rng()`
//! for fresh ones.

pub mod container;
pub mod numeric;
pub mod primitive;
pub mod string;
pub mod tree;

pub use container::{generate_matrix, generate_vector};
pub use numeric::{generate_float, generate_int};
pub use primitive::{generate_bool, generate_null, generate_primitive};
pub use string::generate_string;
pub use tree::{TreeGenerator, TreeOptions};
