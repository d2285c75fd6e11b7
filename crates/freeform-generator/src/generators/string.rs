//! String value generator.

use crate::bounds::check_string;
use crate::generators::numeric::sample_count;
use freeform_core::{Charset, GenerationError};
use rand::Rng;

/// Generate a string whose length in characters lies in
/// `[min_length, max_length]`, drawing every character uniformly from
/// `charset`.
///
/// Errors are checked in order: negative length, min length above max
/// length, empty charset.
pub fn generate_string<R: Rng>(
    rng: &mut R,
    min_length: i64,
    max_length: i64,
    charset: &str,
) -> Result<String, GenerationError> {
    check_string(min_length, max_length, charset)?;
    Ok(sample_string(
        rng,
        min_length,
        max_length,
        Charset::new(charset).chars(),
    ))
}

/// Unchecked string sampling. `alphabet` must not be empty; the result
/// always holds exactly the sampled number of characters.
pub(crate) fn sample_string<R: Rng>(
    rng: &mut R,
    min_length: i64,
    max_length: i64,
    alphabet: &[char],
) -> String {
    let length = sample_count(rng, min_length, max_length);
    match alphabet {
        [only] => std::iter::repeat(*only).take(length).collect(),
        _ => (0..length)
            .map(|_| alphabet[rng.random_range(0..alphabet.len())])
            .collect(),
    }
}
