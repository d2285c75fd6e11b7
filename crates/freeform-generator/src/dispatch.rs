//! Element-kind dispatch for scalars, vectors, and matrices.
//!
//! The typed entry points (`scalar_of`, `vector_of`, `matrix_of`) match
//! exhaustively on [`ElementKind`]. The `*_of_tag` variants are the runtime
//! front end: they resolve a string tag plus loosely typed arguments into
//! an `ElementKind` first, so an unknown tag or a wrong argument count is
//! rejected before anything is sampled.

use crate::generators::container::{
    matrix_of_bools, matrix_of_floats, matrix_of_ints, matrix_of_nulls, matrix_of_primitives,
    matrix_of_strings, vector_of_bools, vector_of_floats, vector_of_ints, vector_of_nulls,
    vector_of_primitives, vector_of_strings,
};
use crate::generators::numeric::{generate_float, generate_int};
use crate::generators::primitive::{generate_bool, generate_null, generate_primitive};
use crate::generators::string::generate_string;
use freeform_core::{Arg, ElementKind, GenerationError, MatrixValue, PrimitiveValue, VectorValue};
use rand::Rng;

/// Generate one scalar of the given kind.
pub fn scalar_of<R: Rng>(rng: &mut R, kind: &ElementKind) -> Result<PrimitiveValue, GenerationError> {
    match kind {
        ElementKind::Null => Ok(generate_null()),
        ElementKind::Bool => Ok(PrimitiveValue::Bool(generate_bool(rng))),
        ElementKind::Primitive => Ok(generate_primitive(rng)),
        ElementKind::Int { min, max } => generate_int(rng, *min, *max).map(PrimitiveValue::Int),
        ElementKind::Float { min, max } => {
            generate_float(rng, *min, *max).map(PrimitiveValue::Float)
        }
        ElementKind::String {
            min_length,
            max_length,
            charset,
        } => generate_string(rng, *min_length, *max_length, charset).map(PrimitiveValue::String),
    }
}

/// Generate a vector of the given kind with a length in
/// `[min_length, max_length]`.
pub fn vector_of<R: Rng>(
    rng: &mut R,
    kind: &ElementKind,
    min_length: i64,
    max_length: i64,
) -> Result<VectorValue, GenerationError> {
    tracing::debug!(kind = %kind, min_length, max_length, "generating vector");
    match kind {
        ElementKind::Null => vector_of_nulls(rng, min_length, max_length).map(VectorValue::Null),
        ElementKind::Bool => vector_of_bools(rng, min_length, max_length).map(VectorValue::Bool),
        ElementKind::Primitive => {
            vector_of_primitives(rng, min_length, max_length).map(VectorValue::Primitive)
        }
        ElementKind::Int { min, max } => {
            vector_of_ints(rng, min_length, max_length, *min, *max).map(VectorValue::Int)
        }
        ElementKind::Float { min, max } => {
            vector_of_floats(rng, min_length, max_length, *min, *max).map(VectorValue::Float)
        }
        ElementKind::String {
            min_length: min_str_length,
            max_length: max_str_length,
            charset,
        } => vector_of_strings(
            rng,
            min_length,
            max_length,
            *min_str_length,
            *max_str_length,
            charset,
        )
        .map(VectorValue::String),
    }
}

/// Generate a matrix of the given kind.
pub fn matrix_of<R: Rng>(
    rng: &mut R,
    kind: &ElementKind,
    min_rows: i64,
    max_rows: i64,
    min_cols: i64,
    max_cols: i64,
) -> Result<MatrixValue, GenerationError> {
    tracing::debug!(
        kind = %kind,
        min_rows,
        max_rows,
        min_cols,
        max_cols,
        "generating matrix"
    );
    match kind {
        ElementKind::Null => {
            matrix_of_nulls(rng, min_rows, max_rows, min_cols, max_cols).map(MatrixValue::Null)
        }
        ElementKind::Bool => {
            matrix_of_bools(rng, min_rows, max_rows, min_cols, max_cols).map(MatrixValue::Bool)
        }
        ElementKind::Primitive => matrix_of_primitives(rng, min_rows, max_rows, min_cols, max_cols)
            .map(MatrixValue::Primitive),
        ElementKind::Int { min, max } => {
            matrix_of_ints(rng, min_rows, max_rows, min_cols, max_cols, *min, *max)
                .map(MatrixValue::Int)
        }
        ElementKind::Float { min, max } => {
            matrix_of_floats(rng, min_rows, max_rows, min_cols, max_cols, *min, *max)
                .map(MatrixValue::Float)
        }
        ElementKind::String {
            min_length,
            max_length,
            charset,
        } => matrix_of_strings(
            rng,
            min_rows,
            max_rows,
            min_cols,
            max_cols,
            *min_length,
            *max_length,
            charset,
        )
        .map(MatrixValue::String),
    }
}

/// Tag front end for [`scalar_of`].
pub fn scalar_of_tag<R: Rng>(
    rng: &mut R,
    tag: &str,
    args: &[Arg],
) -> Result<PrimitiveValue, GenerationError> {
    let kind = ElementKind::from_tag(tag, args)?;
    scalar_of(rng, &kind)
}

/// Tag front end for [`vector_of`].
///
/// | tag         | args                                  |
/// |-------------|---------------------------------------|
/// | `null`      | none                                  |
/// | `bool`      | none                                  |
/// | `primitive` | none                                  |
/// | `int`       | min, max                              |
/// | `float`     | min, max                              |
/// | `string`    | min length, max length, charset       |
pub fn vector_of_tag<R: Rng>(
    rng: &mut R,
    tag: &str,
    min_length: i64,
    max_length: i64,
    args: &[Arg],
) -> Result<VectorValue, GenerationError> {
    let kind = ElementKind::from_tag(tag, args)?;
    vector_of(rng, &kind, min_length, max_length)
}

/// Tag front end for [`matrix_of`]. Takes the same arguments as
/// [`vector_of_tag`].
pub fn matrix_of_tag<R: Rng>(
    rng: &mut R,
    tag: &str,
    min_rows: i64,
    max_rows: i64,
    min_cols: i64,
    max_cols: i64,
    args: &[Arg],
) -> Result<MatrixValue, GenerationError> {
    let kind = ElementKind::from_tag(tag, args)?;
    matrix_of(rng, &kind, min_rows, max_rows, min_cols, max_cols)
}
