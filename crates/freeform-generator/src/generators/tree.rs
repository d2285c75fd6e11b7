//! Nested array/object generators.
//!
//! Trees are at most two containers deep. A top-level array or object
//! fills each slot with a nested array, a nested object, or a primitive,
//! chosen uniformly. Nested containers only ever hold primitives.
//!
//! Lengths passed as negative numbers are a request for a random length,
//! not an error, unlike the vector and matrix generators, which reject
//! negative bounds.

use crate::bounds::check_length;
use crate::generators::container::generate_vector;
use crate::generators::numeric::sample_count;
use crate::generators::primitive::generate_primitive;
use crate::generators::string::sample_string;
use freeform_core::{Bound, Charset, GenerationError, LengthBound, PrimitiveValue, TreeValue};
use rand::Rng;
use std::collections::BTreeMap;

/// Random array lengths are drawn from `[0, 12)`.
pub const DEFAULT_ARRAY_LENGTH: LengthBound = LengthBound::new(0, 11);

/// Random object lengths are drawn from `[0, 12)`.
pub const DEFAULT_OBJECT_LENGTH: LengthBound = LengthBound::new(0, 11);

/// Object keys are `[0, 64)` characters long.
pub const DEFAULT_KEY_LENGTH: LengthBound = LengthBound::new(0, 63);

/// Attempts per key before giving up on finding an unused one.
pub const DEFAULT_MAX_KEY_ATTEMPTS: usize = 1000;

/// Tuning for [`TreeGenerator`].
#[derive(Debug, Clone, PartialEq)]
pub struct TreeOptions {
    /// Bound for arrays whose length is picked at random
    pub array_length: LengthBound,

    /// Bound for objects whose length is picked at random
    pub object_length: LengthBound,

    /// Length of generated object keys
    pub key_length: LengthBound,

    /// Alphabet for object keys
    pub key_charset: Charset,

    /// Attempts per key before reporting a saturated keyspace
    pub max_key_attempts: usize,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            array_length: DEFAULT_ARRAY_LENGTH,
            object_length: DEFAULT_OBJECT_LENGTH,
            key_length: DEFAULT_KEY_LENGTH,
            key_charset: Charset::printable_ascii(),
            max_key_attempts: DEFAULT_MAX_KEY_ATTEMPTS,
        }
    }
}

/// Generator for [`TreeValue`]s with validated options.
#[derive(Debug, Clone, Default)]
pub struct TreeGenerator {
    options: TreeOptions,
}

impl TreeGenerator {
    /// Validate `options` and build a generator.
    pub fn new(options: TreeOptions) -> Result<Self, GenerationError> {
        check_length(
            Bound::ArrayLength,
            options.array_length.min,
            options.array_length.max,
        )?;
        check_length(
            Bound::ObjectLength,
            options.object_length.min,
            options.object_length.max,
        )?;
        check_length(
            Bound::KeyLength,
            options.key_length.min,
            options.key_length.max,
        )?;
        if options.key_charset.is_empty() {
            return Err(GenerationError::EmptyCharset);
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    /// Pick an array, an object, or a primitive, each with random size.
    pub fn value<R: Rng>(&self, rng: &mut R) -> Result<TreeValue, GenerationError> {
        match rng.random_range(0..3u8) {
            0 => self.array(rng, -1),
            1 => self.object(rng, -1),
            _ => Ok(TreeValue::Primitive(generate_primitive(rng))),
        }
    }

    /// Top-level array. Negative `length` picks one at random.
    pub fn array<R: Rng>(&self, rng: &mut R, length: i64) -> Result<TreeValue, GenerationError> {
        let length = resolve_length(rng, length, self.options.array_length);
        let items = (0..length)
            .map(|_| self.slot(rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TreeValue::Array(items))
    }

    /// Top-level object with unique keys. Negative `length` picks one at
    /// random.
    pub fn object<R: Rng>(&self, rng: &mut R, length: i64) -> Result<TreeValue, GenerationError> {
        let length = resolve_length(rng, length, self.options.object_length);
        let mut entries = BTreeMap::new();
        for _ in 0..length {
            let key = self.unique_key(rng, &entries)?;
            let value = self.slot(rng)?;
            entries.insert(key, value);
        }
        Ok(TreeValue::Object(entries))
    }

    /// A slot of a top-level container.
    fn slot<R: Rng>(&self, rng: &mut R) -> Result<TreeValue, GenerationError> {
        match rng.random_range(0..3u8) {
            0 => self.nested_array(rng),
            1 => self.nested_object(rng),
            _ => Ok(TreeValue::Primitive(generate_primitive(rng))),
        }
    }

    fn nested_array<R: Rng>(&self, rng: &mut R) -> Result<TreeValue, GenerationError> {
        let LengthBound { min, max } = self.options.array_length;
        let items = generate_vector(rng, min, max, |rng| {
            Ok(TreeValue::Primitive(generate_primitive(rng)))
        })?;
        Ok(TreeValue::Array(items))
    }

    fn nested_object<R: Rng>(&self, rng: &mut R) -> Result<TreeValue, GenerationError> {
        let LengthBound { min, max } = self.options.object_length;
        let length = sample_count(rng, min, max);
        let mut entries = BTreeMap::new();
        for _ in 0..length {
            let key = self.unique_key(rng, &entries)?;
            entries.insert(key, TreeValue::Primitive(generate_primitive(rng)));
        }
        Ok(TreeValue::Object(entries))
    }

    fn unique_key<R: Rng>(
        &self,
        rng: &mut R,
        taken: &BTreeMap<String, TreeValue>,
    ) -> Result<String, GenerationError> {
        let LengthBound { min, max } = self.options.key_length;
        let attempts = self.options.max_key_attempts.max(1);
        for _ in 0..attempts {
            let key = sample_string(rng, min, max, self.options.key_charset.chars());
            if !taken.contains_key(&key) {
                return Ok(key);
            }
        }
        tracing::warn!(
            attempts,
            keys = taken.len(),
            "object keyspace saturated"
        );
        Err(GenerationError::KeyspaceSaturated { attempts })
    }
}

fn resolve_length<R: Rng>(rng: &mut R, length: i64, random: LengthBound) -> usize {
    if length < 0 {
        sample_count(rng, random.min, random.max)
    } else {
        length as usize
    }
}

/// Generate a top-level array with default options.
///
/// Negative `length` picks one in `[0, 12)`.
pub fn array<R: Rng>(rng: &mut R, length: i64) -> TreeValue {
    TreeGenerator::default()
        .array(rng, length)
        .unwrap_or_else(|err| {
            tracing::warn!(%err, "array generation failed");
            TreeValue::Array(Vec::new())
        })
}

/// Generate a top-level object with default options.
///
/// Negative `length` picks one in `[0, 12)`.
pub fn object<R: Rng>(rng: &mut R, length: i64) -> TreeValue {
    TreeGenerator::default()
        .object(rng, length)
        .unwrap_or_else(|err| {
            tracing::warn!(%err, "object generation failed");
            TreeValue::Object(BTreeMap::new())
        })
}

/// Generate an array, object, or primitive with default options.
pub fn value<R: Rng>(rng: &mut R) -> TreeValue {
    TreeGenerator::default().value(rng).unwrap_or_else(|err| {
        tracing::warn!(%err, "tree generation failed");
        TreeValue::Primitive(PrimitiveValue::Null)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_depth_cap(value: &TreeValue) {
        assert!(value.depth() <= 2, "tree too deep: {value:?}");
    }

    #[test]
    fn test_array_exact_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = array(&mut rng, 25);
        assert_eq!(value.as_array().unwrap().len(), 25);
        assert_depth_cap(&value);
    }

    #[test]
    fn test_array_random_length() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let value = array(&mut rng, -1);
            assert!(value.as_array().unwrap().len() < 12);
        }
    }

    #[test]
    fn test_object_exact_length_unique_keys() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = object(&mut rng, 200);
        // Keys live in a map, so the count is also the distinct count.
        assert_eq!(value.as_object().unwrap().len(), 200);
        assert_depth_cap(&value);
    }

    #[test]
    fn test_object_random_length() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let value = object(&mut rng, -7);
            assert!(value.as_object().unwrap().len() < 12);
        }
    }

    #[test]
    fn test_zero_length() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(array(&mut rng, 0), TreeValue::Array(vec![]));
        assert_eq!(object(&mut rng, 0), TreeValue::Object(BTreeMap::new()));
    }

    #[test]
    fn test_depth_cap_and_nesting() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut saw_nested = false;

        for _ in 0..100 {
            let value = array(&mut rng, 10);
            assert_depth_cap(&value);
            saw_nested |= value.depth() == 2;

            let value = object(&mut rng, 10);
            assert_depth_cap(&value);
            saw_nested |= value.depth() == 2;
        }
        assert!(saw_nested);
    }

    #[test]
    fn test_nested_containers_hold_primitives() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let tree = array(&mut rng, 10);
            for slot in tree.as_array().unwrap() {
                let children: Vec<&TreeValue> = match slot {
                    TreeValue::Array(items) => items.iter().collect(),
                    TreeValue::Object(entries) => entries.values().collect(),
                    TreeValue::Primitive(_) => continue,
                };
                assert!(slot.is_container());
                assert!(children
                    .iter()
                    .all(|child| child.as_primitive().is_some()));
            }
        }
    }

    #[test]
    fn test_value_kinds() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut arrays = 0;
        let mut objects = 0;
        let mut primitives = 0;

        for _ in 0..300 {
            let tree = value(&mut rng);
            assert_depth_cap(&tree);
            match tree {
                TreeValue::Array(_) => arrays += 1,
                TreeValue::Object(_) => objects += 1,
                TreeValue::Primitive(_) => primitives += 1,
            }
        }
        assert!(arrays > 0 && objects > 0 && primitives > 0);
    }

    #[test]
    fn test_new_rejects_invalid_options() {
        let options = TreeOptions {
            key_charset: Charset::new(""),
            ..TreeOptions::default()
        };
        assert_eq!(
            TreeGenerator::new(options).unwrap_err(),
            GenerationError::EmptyCharset
        );

        let options = TreeOptions {
            key_length: LengthBound::new(4, 2),
            ..TreeOptions::default()
        };
        assert_eq!(
            TreeGenerator::new(options).unwrap_err(),
            GenerationError::inverted(Bound::KeyLength)
        );

        let options = TreeOptions {
            array_length: LengthBound::new(-1, 2),
            ..TreeOptions::default()
        };
        assert_eq!(
            TreeGenerator::new(options).unwrap_err(),
            GenerationError::negative(Bound::ArrayLength)
        );

        let options = TreeOptions {
            object_length: LengthBound::new(3, 2),
            ..TreeOptions::default()
        };
        assert_eq!(
            TreeGenerator::new(options).unwrap_err(),
            GenerationError::inverted(Bound::ObjectLength)
        );
        assert_ne!(
            GenerationError::inverted(Bound::ObjectLength),
            GenerationError::inverted(Bound::ArrayLength)
        );
    }

    #[test]
    fn test_keyspace_saturated() {
        // A single one-character key: the second entry can never be unique.
        // Nested objects hold at most one entry so they cannot saturate.
        let options = TreeOptions {
            object_length: LengthBound::new(0, 1),
            key_length: LengthBound::exactly(1),
            key_charset: Charset::new("k"),
            max_key_attempts: 5,
            ..TreeOptions::default()
        };
        let generator = TreeGenerator::new(options).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        assert!(generator.object(&mut rng, 1).is_ok());
        assert_eq!(
            generator.object(&mut rng, 2).unwrap_err(),
            GenerationError::KeyspaceSaturated { attempts: 5 }
        );
    }

    #[test]
    fn test_custom_key_charset() {
        let options = TreeOptions {
            key_length: LengthBound::new(2, 4),
            key_charset: Charset::new("日本語"),
            ..TreeOptions::default()
        };
        let generator = TreeGenerator::new(options).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let tree = generator.object(&mut rng, 30).unwrap();
        for key in tree.as_object().unwrap().keys() {
            assert!((2..=4).contains(&key.chars().count()));
            assert!(key.chars().all(|c| "日本語".contains(c)));
        }
    }
}
