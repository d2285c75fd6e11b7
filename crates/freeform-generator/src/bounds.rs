//! Precondition checks run before any sampling.
//!
//! Every check is a pure function returning the first violated invariant.
//! Generators call these inline, before touching the RNG, so a failed call
//! never consumes entropy and never builds a partial value.
//!
//! Priority, first failure wins:
//!
//! 1. negative length/count
//! 2. min > max on a length/count
//! 3. kind-specific checks (value range, then string length, then charset)

use freeform_core::{Bound, ElementKind, GenerationError, GeneratorConfig};

/// Reject negative ends of a count bound.
pub fn check_non_negative(bound: Bound, min: i64, max: i64) -> Result<(), GenerationError> {
    if min < 0 || max < 0 {
        return Err(GenerationError::negative(bound));
    }
    Ok(())
}

/// Reject `min > max`.
pub fn check_order<T: PartialOrd>(bound: Bound, min: T, max: T) -> Result<(), GenerationError> {
    if min > max {
        return Err(GenerationError::inverted(bound));
    }
    Ok(())
}

/// Full check of a single count bound.
pub fn check_length(bound: Bound, min: i64, max: i64) -> Result<(), GenerationError> {
    check_non_negative(bound, min, max)?;
    check_order(bound, min, max)
}

/// Row and column bounds of a matrix. Negative counts on either axis are
/// reported before any ordering problem, rows before columns.
pub fn check_matrix_bounds(
    min_rows: i64,
    max_rows: i64,
    min_cols: i64,
    max_cols: i64,
) -> Result<(), GenerationError> {
    check_non_negative(Bound::Rows, min_rows, max_rows)?;
    check_non_negative(Bound::Columns, min_cols, max_cols)?;
    check_order(Bound::Rows, min_rows, max_rows)?;
    check_order(Bound::Columns, min_cols, max_cols)
}

/// Float ranges must be ordered and finite.
pub fn check_float_range(min: f64, max: f64) -> Result<(), GenerationError> {
    check_order(Bound::Value, min, max)?;
    if !min.is_finite() || !max.is_finite() {
        return Err(GenerationError::NonFiniteRange);
    }
    Ok(())
}

pub fn check_charset(charset: &str) -> Result<(), GenerationError> {
    if charset.is_empty() {
        return Err(GenerationError::EmptyCharset);
    }
    Ok(())
}

/// String parameters: length bound first, charset last.
pub fn check_string(min_length: i64, max_length: i64, charset: &str) -> Result<(), GenerationError> {
    check_length(Bound::StringLength, min_length, max_length)?;
    check_charset(charset)
}

/// Kind-specific parameters of an element kind.
pub fn check_kind(kind: &ElementKind) -> Result<(), GenerationError> {
    match kind {
        ElementKind::Null | ElementKind::Bool | ElementKind::Primitive => Ok(()),
        ElementKind::Int { min, max } => check_order(Bound::Value, min, max),
        ElementKind::Float { min, max } => check_float_range(*min, *max),
        ElementKind::String {
            min_length,
            max_length,
            charset,
        } => check_string(*min_length, *max_length, charset),
    }
}

/// Dry-run of a fixture field's configuration.
pub fn check_config(config: &GeneratorConfig) -> Result<(), GenerationError> {
    match config {
        GeneratorConfig::Scalar { element } => check_kind(element),
        GeneratorConfig::VectorOf {
            element,
            min_length,
            max_length,
        } => {
            check_length(Bound::Length, *min_length, *max_length)?;
            check_kind(element)
        }
        GeneratorConfig::MatrixOf {
            element,
            min_rows,
            max_rows,
            min_cols,
            max_cols,
        } => {
            check_matrix_bounds(*min_rows, *max_rows, *min_cols, *max_cols)?;
            check_kind(element)
        }
        // Negative tree lengths mean "pick one", never an error.
        GeneratorConfig::Array { .. } | GeneratorConfig::Object { .. } | GeneratorConfig::Tree => {
            Ok(())
        }
    }
}
