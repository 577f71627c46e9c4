//! Whole-record generator for a schema.

use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::generators::collection::RecordGenerator;
use crate::generators::FieldGenerator;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rowgen_core::{Record, Schema};

/// Compute the RNG seed for a stream index (a partition number).
///
/// Combines the base seed with the index so every stream is independent and
/// reproducible on its own.
pub fn stream_seed(base_seed: u64, index: u64) -> u64 {
    base_seed.wrapping_add(index.wrapping_mul(0x9E3779B97F4A7C15))
}

/// Generates records for one schema.
///
/// The generator tree is resolved once in [`RowGenerator::new`]; afterwards
/// the generator is immutable and can be shared across threads, each caller
/// supplying its own random stream.
#[derive(Debug, Clone)]
pub struct RowGenerator {
    /// Schema every generated record conforms to
    schema: Schema,
    /// One slot per schema field, in field order
    record: RecordGenerator,
}

impl RowGenerator {
    /// Build the generator for `schema`.
    ///
    /// Fails if the configuration is invalid or any field (at any depth) has
    /// a type with no generator.
    pub fn new(schema: Schema, config: &GeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate()?;
        let sizing = config.sizing();

        let slots = schema
            .fields
            .iter()
            .map(|field| {
                Ok((
                    FieldGenerator::for_type(&field.data_type, sizing)?,
                    field.nullable,
                ))
            })
            .collect::<Result<Vec<_>, GeneratorError>>()?;

        Ok(Self {
            record: RecordGenerator::new(slots, sizing.null_probability),
            schema,
        })
    }

    /// Get a reference to the schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Generate one record from the given RNG.
    pub fn next_record(&self, rng: &mut StdRng) -> Record {
        self.record.generate_record(rng)
    }

    /// Lazily generate `count` records from a stream seeded with `seed`.
    pub fn records(&self, seed: u64, count: u64) -> RecordIterator<'_> {
        RecordIterator {
            generator: self,
            rng: StdRng::seed_from_u64(seed),
            remaining: count,
        }
    }
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'a> {
    generator: &'a RowGenerator,
    rng: StdRng,
    remaining: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_record(&mut self.rng))
    }

    /// Exact while the remaining count fits in `usize`; beyond that the lower
    /// bound saturates and the upper bound is unknown.
    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rowgen_core::{DataType, Field, Value};

    fn test_schema() -> Schema {
        Schema::from_yaml(
            r#"
fields:
  - name: id
    type: long
  - name: name
    type: string
    nullable: true
  - name: price
    type:
      type: decimal
      precision: 10
      scale: 2
  - name: tags
    type:
      type: array
      element_type: string
      element_nullable: true
    nullable: true
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_generate_single_record() {
        let generator = RowGenerator::new(test_schema(), &GeneratorConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let record = generator.next_record(&mut rng);

        assert_eq!(record.len(), 4);
        assert!(matches!(record.get(0), Some(Value::Int64(_))));
        assert!(matches!(
            record.get(2),
            Some(Value::Decimal {
                precision: 10,
                scale: 2,
                ..
            })
        ));
        assert!(record.conforms_to(generator.schema()));
    }

    #[test]
    fn test_deterministic_generation() {
        let generator = RowGenerator::new(test_schema(), &GeneratorConfig::default()).unwrap();

        let first: Vec<_> = generator.records(7, 20).collect();
        let second: Vec<_> = generator.records(7, 20).collect();
        let other: Vec<_> = generator.records(8, 20).collect();

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_generate_multiple_records() {
        let generator = RowGenerator::new(test_schema(), &GeneratorConfig::default()).unwrap();

        let iter = generator.records(42, 10);
        assert_eq!(iter.len(), 10);

        let records: Vec<_> = iter.collect();
        assert_eq!(records.len(), 10);
        assert!(records.iter().all(|r| r.conforms_to(generator.schema())));
    }

    #[test]
    fn test_size_hint_never_truncates() {
        let generator = RowGenerator::new(test_schema(), &GeneratorConfig::default()).unwrap();

        assert_eq!(generator.records(1, 3).size_hint(), (3, Some(3)));

        let huge = generator.records(1, u64::MAX);
        let (lower, upper) = huge.size_hint();
        assert_eq!(lower, usize::MAX);
        assert_eq!(upper, usize::try_from(u64::MAX).ok());
    }

    #[test]
    fn test_non_nullable_fields_never_null() {
        let config = GeneratorConfig::default().with_null_probability(1.0);
        let generator = RowGenerator::new(test_schema(), &config).unwrap();

        for record in generator.records(42, 50) {
            assert!(!record.values()[0].is_null());
            assert!(!record.values()[2].is_null());
            assert!(record.values()[1].is_null());
            assert!(record.values()[3].is_null());
        }
    }

    #[test]
    fn test_empty_schema() {
        let generator = RowGenerator::new(Schema::default(), &GeneratorConfig::default()).unwrap();
        let records: Vec<_> = generator.records(1, 3).collect();
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(Record::is_empty));
    }

    #[test]
    fn test_unsupported_field_fails_construction() {
        let schema = Schema::new(vec![
            Field::new("ok", DataType::Int32),
            Field::new("when", DataType::Time),
        ]);
        let result = RowGenerator::new(schema, &GeneratorConfig::default());
        assert!(matches!(result, Err(GeneratorError::UnsupportedType(ref t)) if t == "time"));
    }

    #[test]
    fn test_invalid_config_fails_construction() {
        let config = GeneratorConfig::default().with_null_probability(2.0);
        assert!(matches!(
            RowGenerator::new(test_schema(), &config),
            Err(GeneratorError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_stream_seed_mixing() {
        assert_eq!(stream_seed(42, 0), 42);
        assert_ne!(stream_seed(42, 1), stream_seed(42, 2));
        assert_ne!(stream_seed(42, 1), stream_seed(43, 1));
    }
}
