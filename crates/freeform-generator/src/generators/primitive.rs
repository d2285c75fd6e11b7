//! Boolean, null, and wildcard primitive generators.

use crate::generators::numeric::{sample_float, sample_int};
use crate::generators::string::sample_string;
use freeform_core::PrimitiveValue;
use rand::Rng;

/// Largest magnitude of a wildcard integer.
pub const PRIMITIVE_INT_MAX: i64 = 0xFFFF_FFFF;
pub const PRIMITIVE_INT_MIN: i64 = -PRIMITIVE_INT_MAX;
pub const PRIMITIVE_FLOAT_MAX: f64 = PRIMITIVE_INT_MAX as f64;
pub const PRIMITIVE_FLOAT_MIN: f64 = -PRIMITIVE_FLOAT_MAX;
pub const PRIMITIVE_STRING_MIN_LENGTH: i64 = 0;
pub const PRIMITIVE_STRING_MAX_LENGTH: i64 = 32;

/// Alphabet for wildcard strings: `[a-zA-Z0-9_]`.
pub const PRIMITIVE_CHARSET: [char; 63] =
    ascii_alphabet(b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_");

const fn ascii_alphabet<const N: usize>(bytes: &[u8; N]) -> [char; N] {
    let mut chars = ['\0'; N];
    let mut i = 0;
    while i < N {
        chars[i] = bytes[i] as char;
        i += 1;
    }
    chars
}

/// Generate `true` or `false` with equal probability.
pub fn generate_bool<R: Rng>(rng: &mut R) -> bool {
    rng.random()
}

/// The null value. Never consults the RNG.
pub fn generate_null() -> PrimitiveValue {
    PrimitiveValue::Null
}

/// Pick one of int, float, string, bool, or null uniformly and generate it
/// with the wildcard defaults above.
pub fn generate_primitive<R: Rng>(rng: &mut R) -> PrimitiveValue {
    match rng.random_range(0..5u8) {
        0 => PrimitiveValue::Int(sample_int(rng, PRIMITIVE_INT_MIN, PRIMITIVE_INT_MAX)),
        1 => PrimitiveValue::Float(sample_float(rng, PRIMITIVE_FLOAT_MIN, PRIMITIVE_FLOAT_MAX)),
        2 => PrimitiveValue::String(sample_string(
            rng,
            PRIMITIVE_STRING_MIN_LENGTH,
            PRIMITIVE_STRING_MAX_LENGTH,
            &PRIMITIVE_CHARSET,
        )),
        3 => PrimitiveValue::Bool(generate_bool(rng)),
        _ => generate_null(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_generate_bool_both_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<bool> = (0..100).map(|_| generate_bool(&mut rng)).collect();
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_generate_null() {
        assert!(generate_null().is_null());
    }

    #[test]
    fn test_primitive_charset() {
        assert_eq!(PRIMITIVE_CHARSET[0], 'a');
        assert_eq!(PRIMITIVE_CHARSET[62], '_');
    }

    #[test]
    fn test_generate_primitive_within_defaults() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            match generate_primitive(&mut rng) {
                PrimitiveValue::Int(i) => {
                    assert!((PRIMITIVE_INT_MIN..=PRIMITIVE_INT_MAX).contains(&i))
                }
                PrimitiveValue::Float(f) => {
                    assert!((PRIMITIVE_FLOAT_MIN..PRIMITIVE_FLOAT_MAX).contains(&f))
                }
                PrimitiveValue::String(s) => {
                    assert!(s.chars().count() <= PRIMITIVE_STRING_MAX_LENGTH as usize);
                    assert!(s.chars().all(|c| PRIMITIVE_CHARSET.contains(&c)));
                }
                PrimitiveValue::Bool(_) | PrimitiveValue::Null => {}
            }
        }
    }

    #[test]
    fn test_generate_primitive_covers_every_kind() {
        let mut rng = StdRng::seed_from_u64(42);
        let kinds: HashSet<&str> = (0..500)
            .map(|_| generate_primitive(&mut rng).kind())
            .collect();
        assert_eq!(kinds.len(), 5);
    }
}
