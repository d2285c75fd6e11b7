//! Schema-driven fixture generator.

use crate::bounds::check_config;
use crate::dispatch::{matrix_of, scalar_of, vector_of};
use crate::generators::tree::TreeGenerator;
use freeform_core::{
    FixtureRecord, FixtureSchema, GeneratedValue, GenerationError, GeneratorConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Error type for fixture generation.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// A field's generator configuration or generation failed
    #[error("Field '{field}': {source}")]
    Field {
        field: String,
        #[source]
        source: GenerationError,
    },
}

/// Produces fixture records from a [`FixtureSchema`].
///
/// Every field configuration is validated when the generator is built, so
/// a bad schema fails before the first record.
pub struct FixtureGenerator {
    /// Schema defining the fields and their generators
    schema: FixtureSchema,
    /// Random number generator, seeded when reproducibility is wanted
    rng: StdRng,
    /// Tree generator shared by array/object/tree fields
    tree: TreeGenerator,
    /// Index of the next record
    index: u64,
}

impl FixtureGenerator {
    /// Create a generator.
    ///
    /// `seed` overrides the schema's seed. With neither, the RNG is seeded
    /// from OS entropy.
    pub fn new(schema: FixtureSchema, seed: Option<u64>) -> Result<Self, GeneratorError> {
        for field in &schema.fields {
            check_config(&field.generator).map_err(|source| GeneratorError::Field {
                field: field.name.clone(),
                source,
            })?;
        }

        let rng = match seed.or(schema.seed) {
            Some(seed) => {
                tracing::debug!(seed, "seeding fixture generator");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            schema,
            rng,
            tree: TreeGenerator::default(),
            index: 0,
        })
    }

    /// Get the index of the next record.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Get a reference to the schema.
    pub fn schema(&self) -> &FixtureSchema {
        &self.schema
    }

    /// Generate the next record.
    pub fn next_record(&mut self) -> Result<FixtureRecord, GeneratorError> {
        let mut record = FixtureRecord::new(self.index);

        for field in &self.schema.fields {
            tracing::trace!(
                field = %field.name,
                generator = field.generator.type_name(),
                "generating field"
            );
            let value = generate_field(&mut self.rng, &self.tree, &field.generator).map_err(
                |source| GeneratorError::Field {
                    field: field.name.clone(),
                    source,
                },
            )?;
            record.fields.insert(field.name.clone(), value);
        }

        tracing::trace!(index = self.index, "generated record");
        self.index += 1;
        Ok(record)
    }

    /// Lazily generate `count` records.
    pub fn records(&mut self, count: u64) -> RecordIterator<'_> {
        RecordIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Generate one field value.
pub fn generate_field<R: rand::Rng>(
    rng: &mut R,
    tree: &TreeGenerator,
    config: &GeneratorConfig,
) -> Result<GeneratedValue, GenerationError> {
    match config {
        GeneratorConfig::Scalar { element } => scalar_of(rng, element).map(GeneratedValue::Scalar),
        GeneratorConfig::VectorOf {
            element,
            min_length,
            max_length,
        } => vector_of(rng, element, *min_length, *max_length).map(GeneratedValue::Vector),
        GeneratorConfig::MatrixOf {
            element,
            min_rows,
            max_rows,
            min_cols,
            max_cols,
        } => matrix_of(rng, element, *min_rows, *max_rows, *min_cols, *max_cols)
            .map(GeneratedValue::Matrix),
        GeneratorConfig::Array { length } => tree.array(rng, *length).map(GeneratedValue::Tree),
        GeneratorConfig::Object { length } => tree.object(rng, *length).map(GeneratedValue::Tree),
        GeneratorConfig::Tree => tree.value(rng).map(GeneratedValue::Tree),
    }
}

/// Iterator that lazily generates records.
///
/// Yields `Result`s so a failing field stops the caller instead of being
/// skipped.
pub struct RecordIterator<'a> {
    generator: &'a mut FixtureGenerator,
    remaining: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = Result<FixtureRecord, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}
