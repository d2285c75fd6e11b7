//! Vector and matrix generators.
//!
//! [`generate_vector`] and [`generate_matrix`] are the generic algorithms;
//! the `vector_of_*`/`matrix_of_*` functions instantiate them with a scalar
//! generator and validate that kind's parameters up front. Nothing is
//! sampled until every bound has passed, and an element error aborts the
//! whole container.

use crate::bounds::{
    check_float_range, check_length, check_matrix_bounds, check_order, check_string,
};
use crate::generators::numeric::{sample_count, sample_float, sample_int};
use crate::generators::primitive::{generate_bool, generate_primitive};
use crate::generators::string::sample_string;
use freeform_core::{Bound, Charset, GenerationError, PrimitiveValue};
use rand::Rng;

/// Generate a vector with a length in `[min_length, max_length]`, filling
/// every slot from `element`.
pub fn generate_vector<R, T, F>(
    rng: &mut R,
    min_length: i64,
    max_length: i64,
    element: F,
) -> Result<Vec<T>, GenerationError>
where
    R: Rng,
    F: FnMut(&mut R) -> Result<T, GenerationError>,
{
    check_length(Bound::Length, min_length, max_length)?;
    fill_vector(rng, min_length, max_length, element)
}

/// Generate a matrix with a row count in `[min_rows, max_rows]`. Each row is
/// an independent vector with a length in `[min_cols, max_cols]`, so rows
/// may differ in length.
pub fn generate_matrix<R, T, F>(
    rng: &mut R,
    min_rows: i64,
    max_rows: i64,
    min_cols: i64,
    max_cols: i64,
    element: F,
) -> Result<Vec<Vec<T>>, GenerationError>
where
    R: Rng,
    F: FnMut(&mut R) -> Result<T, GenerationError>,
{
    check_matrix_bounds(min_rows, max_rows, min_cols, max_cols)?;
    fill_matrix(rng, min_rows, max_rows, min_cols, max_cols, element)
}

fn fill_vector<R, T, F>(
    rng: &mut R,
    min_length: i64,
    max_length: i64,
    mut element: F,
) -> Result<Vec<T>, GenerationError>
where
    R: Rng,
    F: FnMut(&mut R) -> Result<T, GenerationError>,
{
    let length = sample_count(rng, min_length, max_length);
    tracing::trace!(length, "sampled vector length");
    (0..length).map(|_| element(rng)).collect()
}

fn fill_matrix<R, T, F>(
    rng: &mut R,
    min_rows: i64,
    max_rows: i64,
    min_cols: i64,
    max_cols: i64,
    mut element: F,
) -> Result<Vec<Vec<T>>, GenerationError>
where
    R: Rng,
    F: FnMut(&mut R) -> Result<T, GenerationError>,
{
    let rows = sample_count(rng, min_rows, max_rows);
    tracing::trace!(rows, "sampled matrix row count");
    (0..rows)
        .map(|_| fill_vector(rng, min_cols, max_cols, &mut element))
        .collect()
}

pub fn vector_of_nulls<R: Rng>(
    rng: &mut R,
    min_length: i64,
    max_length: i64,
) -> Result<Vec<()>, GenerationError> {
    generate_vector(rng, min_length, max_length, |_| Ok(()))
}

pub fn vector_of_bools<R: Rng>(
    rng: &mut R,
    min_length: i64,
    max_length: i64,
) -> Result<Vec<bool>, GenerationError> {
    generate_vector(rng, min_length, max_length, |rng| Ok(generate_bool(rng)))
}

pub fn vector_of_primitives<R: Rng>(
    rng: &mut R,
    min_length: i64,
    max_length: i64,
) -> Result<Vec<PrimitiveValue>, GenerationError> {
    generate_vector(rng, min_length, max_length, |rng| {
        Ok(generate_primitive(rng))
    })
}

/// Vector of integers in `[min, max]`.
pub fn vector_of_ints<R: Rng>(
    rng: &mut R,
    min_length: i64,
    max_length: i64,
    min: i64,
    max: i64,
) -> Result<Vec<i64>, GenerationError> {
    check_length(Bound::Length, min_length, max_length)?;
    check_order(Bound::Value, min, max)?;
    fill_vector(rng, min_length, max_length, |rng| {
        Ok(sample_int(rng, min, max))
    })
}

/// Vector of floats in `[min, max)`.
pub fn vector_of_floats<R: Rng>(
    rng: &mut R,
    min_length: i64,
    max_length: i64,
    min: f64,
    max: f64,
) -> Result<Vec<f64>, GenerationError> {
    check_length(Bound::Length, min_length, max_length)?;
    check_float_range(min, max)?;
    fill_vector(rng, min_length, max_length, |rng| {
        Ok(sample_float(rng, min, max))
    })
}

/// Vector of strings, each with a length in `[min_str_length, max_str_length]`.
pub fn vector_of_strings<R: Rng>(
    rng: &mut R,
    min_length: i64,
    max_length: i64,
    min_str_length: i64,
    max_str_length: i64,
    charset: &str,
) -> Result<Vec<String>, GenerationError> {
    check_length(Bound::Length, min_length, max_length)?;
    check_string(min_str_length, max_str_length, charset)?;
    let alphabet = Charset::new(charset);
    fill_vector(rng, min_length, max_length, |rng| {
        Ok(sample_string(
            rng,
            min_str_length,
            max_str_length,
            alphabet.chars(),
        ))
    })
}

pub fn matrix_of_nulls<R: Rng>(
    rng: &mut R,
    min_rows: i64,
    max_rows: i64,
    min_cols: i64,
    max_cols: i64,
) -> Result<Vec<Vec<()>>, GenerationError> {
    generate_matrix(rng, min_rows, max_rows, min_cols, max_cols, |_| Ok(()))
}

pub fn matrix_of_bools<R: Rng>(
    rng: &mut R,
    min_rows: i64,
    max_rows: i64,
    min_cols: i64,
    max_cols: i64,
) -> Result<Vec<Vec<bool>>, GenerationError> {
    generate_matrix(rng, min_rows, max_rows, min_cols, max_cols, |rng| {
        Ok(generate_bool(rng))
    })
}

pub fn matrix_of_primitives<R: Rng>(
    rng: &mut R,
    min_rows: i64,
    max_rows: i64,
    min_cols: i64,
    max_cols: i64,
) -> Result<Vec<Vec<PrimitiveValue>>, GenerationError> {
    generate_matrix(rng, min_rows, max_rows, min_cols, max_cols, |rng| {
        Ok(generate_primitive(rng))
    })
}

pub fn matrix_of_ints<R: Rng>(
    rng: &mut R,
    min_rows: i64,
    max_rows: i64,
    min_cols: i64,
    max_cols: i64,
    min: i64,
    max: i64,
) -> Result<Vec<Vec<i64>>, GenerationError> {
    check_matrix_bounds(min_rows, max_rows, min_cols, max_cols)?;
    check_order(Bound::Value, min, max)?;
    fill_matrix(rng, min_rows, max_rows, min_cols, max_cols, |rng| {
        Ok(sample_int(rng, min, max))
    })
}

pub fn matrix_of_floats<R: Rng>(
    rng: &mut R,
    min_rows: i64,
    max_rows: i64,
    min_cols: i64,
    max_cols: i64,
    min: f64,
    max: f64,
) -> Result<Vec<Vec<f64>>, GenerationError> {
    check_matrix_bounds(min_rows, max_rows, min_cols, max_cols)?;
    check_float_range(min, max)?;
    fill_matrix(rng, min_rows, max_rows, min_cols, max_cols, |rng| {
        Ok(sample_float(rng, min, max))
    })
}

#[allow(clippy::too_many_arguments)]
pub fn matrix_of_strings<R: Rng>(
    rng: &mut R,
    min_rows: i64,
    max_rows: i64,
    min_cols: i64,
    max_cols: i64,
    min_str_length: i64,
    max_str_length: i64,
    charset: &str,
) -> Result<Vec<Vec<String>>, GenerationError> {
    check_matrix_bounds(min_rows, max_rows, min_cols, max_cols)?;
    check_string(min_str_length, max_str_length, charset)?;
    let alphabet = Charset::new(charset);
    fill_matrix(rng, min_rows, max_rows, min_cols, max_cols, |rng| {
        Ok(sample_string(
            rng,
            min_str_length,
            max_str_length,
            alphabet.chars(),
        ))
    })
}
