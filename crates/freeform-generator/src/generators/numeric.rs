//! Numeric value generators.

use crate::bounds::{check_float_range, check_order};
use freeform_core::{Bound, GenerationError};
use rand::Rng;

/// Generate a random integer in `[min, max]`.
///
/// A degenerate range returns `min` without touching the RNG.
pub fn generate_int<R: Rng>(rng: &mut R, min: i64, max: i64) -> Result<i64, GenerationError> {
    check_order(Bound::Value, min, max)?;
    Ok(sample_int(rng, min, max))
}

/// Generate a random float in `[min, max)`, or exactly `min` when the
/// range is degenerate.
pub fn generate_float<R: Rng>(rng: &mut R, min: f64, max: f64) -> Result<f64, GenerationError> {
    check_float_range(min, max)?;
    Ok(sample_float(rng, min, max))
}

/// Unchecked integer sampling; callers validate first.
pub(crate) fn sample_int<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    if min == max {
        return min;
    }
    rng.random_range(min..=max)
}

/// Unchecked float sampling; callers validate first.
pub(crate) fn sample_float<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    if min == max {
        return min;
    }
    let unit: f64 = rng.random();
    // Interpolating avoids overflowing `max - min` on very wide ranges.
    let value = (min * (1.0 - unit) + max * unit).max(min);
    // Rounding can land on `max`; the interval is half-open.
    if value < max {
        value
    } else {
        min
    }
}

/// Sample a count from an already validated, non-negative bound.
pub(crate) fn sample_count<R: Rng>(rng: &mut R, min: i64, max: i64) -> usize {
    sample_int(rng, min, max) as usize
}
