//! Array, map and record generators.
//!
//! Composite generators own their child generators and the sizing captured
//! from the configuration when the tree was built.

use super::{FieldGenerator, ValueGenerator};
use crate::config::Sizing;
use rand::Rng;
use rowgen_core::{Record, Value};

/// Generate `Null` with the configured probability when `nullable`, otherwise
/// delegate to `generator`.
pub fn generate_slot<R: Rng>(
    generator: &FieldGenerator,
    nullable: bool,
    null_probability: f64,
    rng: &mut R,
) -> Value {
    if nullable && rng.gen_bool(null_probability) {
        Value::Null
    } else {
        generator.generate(rng)
    }
}

/// Generates arrays of 0..=`max_len` elements.
#[derive(Debug, Clone)]
pub struct ArrayGenerator {
    element: Box<FieldGenerator>,
    element_nullable: bool,
    sizing: Sizing,
}

impl ArrayGenerator {
    /// Arrays of `element` values; elements may be null only when
    /// `element_nullable`. `sizing` must already be validated.
    pub fn new(element: FieldGenerator, element_nullable: bool, sizing: Sizing) -> Self {
        Self {
            element: Box::new(element),
            element_nullable,
            sizing,
        }
    }
}

impl ValueGenerator for ArrayGenerator {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        let len = rng.gen_range(0..=self.sizing.max_len);
        let elements = (0..len)
            .map(|_| {
                generate_slot(
                    &self.element,
                    self.element_nullable,
                    self.sizing.null_probability,
                    rng,
                )
            })
            .collect();
        Value::Array(elements)
    }
}

/// Generates maps of 0..=`max_len` entries with unique, non-null keys.
///
/// A key drawn twice keeps the value drawn last, so small key domains yield
/// fewer entries than drawn.
#[derive(Debug, Clone)]
pub struct MapGenerator {
    key: Box<FieldGenerator>,
    value: Box<FieldGenerator>,
    value_nullable: bool,
    sizing: Sizing,
}

impl MapGenerator {
    /// Maps from `key` to `value`; values may be null only when
    /// `value_nullable`, keys never. `sizing` must already be validated.
    pub fn new(
        key: FieldGenerator,
        value: FieldGenerator,
        value_nullable: bool,
        sizing: Sizing,
    ) -> Self {
        Self {
            key: Box::new(key),
            value: Box::new(value),
            value_nullable,
            sizing,
        }
    }
}

impl ValueGenerator for MapGenerator {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        let len = rng.gen_range(0..=self.sizing.max_len);
        let mut entries: Vec<(Value, Value)> = Vec::with_capacity(len);
        for _ in 0..len {
            let key = self.key.generate(rng);
            let value = generate_slot(
                &self.value,
                self.value_nullable,
                self.sizing.null_probability,
                rng,
            );
            match entries.iter_mut().find(|(existing, _)| *existing == key) {
                Some(entry) => entry.1 = value,
                None => entries.push((key, value)),
            }
        }
        Value::Map(entries)
    }
}

/// Generates records positionally, one slot per field.
#[derive(Debug, Clone)]
pub struct RecordGenerator {
    slots: Vec<(FieldGenerator, bool)>,
    null_probability: f64,
}

impl RecordGenerator {
    /// `slots` pairs each field's generator with the field's nullability.
    pub fn new(slots: Vec<(FieldGenerator, bool)>, null_probability: f64) -> Self {
        Self {
            slots,
            null_probability,
        }
    }

    /// Number of fields per record.
    pub fn width(&self) -> usize {
        self.slots.len()
    }

    /// Generate a record rather than a record value.
    pub fn generate_record<R: Rng>(&self, rng: &mut R) -> Record {
        let values = self
            .slots
            .iter()
            .map(|(generator, nullable)| {
                generate_slot(generator, *nullable, self.null_probability, rng)
            })
            .collect();
        Record::new(values)
    }
}

impl ValueGenerator for RecordGenerator {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        Value::Record(self.generate_record(rng))
    }
}
