//! freeformgen library
//!
//! Command handlers behind the `freeformgen` binary. Each handler builds
//! its values with `freeform_generator` and writes JSON lines to a caller
//! supplied writer, so the binary passes stdout and tests pass a buffer.
//!
//! # CLI Usage
//!
//! ```bash
//! # Ten ints in [0, 3]
//! freeformgen vector int 10 10 0 3
//!
//! # A 2x3 matrix of short strings
//! freeformgen matrix string 2 2 3 3 1 4 abc
//!
//! # Reproducible fixture records
//! freeformgen --seed 42 generate --schema fixtures.yaml --count 100
//! ```

pub mod commands;

pub use commands::{
    make_rng, parse_args, run_array, run_generate, run_matrix, run_object, run_scalar, run_value,
    run_vector, GenerateOpts, MatrixOpts, VectorOpts,
};
