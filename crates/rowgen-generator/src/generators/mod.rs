//! Individual value generators for different data types.
//!
//! [`FieldGenerator::for_type`] resolves a [`DataType`] into a generator tree
//! once, up front. Types with no generator fail there, never mid-run.

pub mod collection;
pub mod numeric;
pub mod temporal;
pub mod text;

use crate::config::Sizing;
use crate::error::GeneratorError;
use collection::{ArrayGenerator, MapGenerator, RecordGenerator};
use rand::Rng;
use rowgen_core::{DataType, Value, MAX_DECIMAL_PRECISION};

/// Trait for generating values.
pub trait ValueGenerator {
    /// Generate one value from the given RNG.
    fn generate<R: Rng>(&self, rng: &mut R) -> Value;
}

/// A generator for one data type, including nested element generators.
#[derive(Debug, Clone)]
pub enum FieldGenerator {
    /// Uniform `true`/`false`
    Bool,
    /// Full `i8` range
    Int8,
    /// Full `i16` range
    Int16,
    /// Full `i32` range
    Int32,
    /// Full `i64` range
    Int64,
    /// Finite `f32` values, boundary values included
    Float32,
    /// Finite `f64` values, boundary values included
    Float64,
    /// Unscaled values with at most `precision` digits, `scale` of them fractional
    Decimal { precision: u8, scale: u8 },
    /// Strings of 0..=`max_len` chars
    String { max_len: usize },
    /// Byte strings of 0..=`max_len` bytes
    Binary { max_len: usize },
    /// UTC instants within the supported range
    Timestamp,
    /// Calendar dates within the supported range
    Date,
    /// Arrays of one element generator
    Array(ArrayGenerator),
    /// Maps with unique non-null keys
    Map(MapGenerator),
    /// Nested records, one slot per field
    Record(RecordGenerator),
}

impl FieldGenerator {
    /// Build the generator for `data_type`.
    ///
    /// Fails with [`GeneratorError::InvalidConfig`] when `sizing` is out of
    /// bounds, and with [`GeneratorError::UnsupportedType`] when the type, or
    /// any type nested inside it, has no generator.
    pub fn for_type(data_type: &DataType, sizing: Sizing) -> Result<Self, GeneratorError> {
        sizing.validate()?;
        Self::build(data_type, sizing)
    }

    fn build(data_type: &DataType, sizing: Sizing) -> Result<Self, GeneratorError> {
        let generator = match data_type {
            DataType::Bool => Self::Bool,
            DataType::Int8 => Self::Int8,
            DataType::Int16 => Self::Int16,
            DataType::Int32 => Self::Int32,
            DataType::Int64 => Self::Int64,
            DataType::Float32 => Self::Float32,
            DataType::Float64 => Self::Float64,
            DataType::Decimal { precision, scale } => {
                if *precision == 0 || *precision > MAX_DECIMAL_PRECISION || scale > precision {
                    return Err(GeneratorError::UnsupportedType(
                        data_type.canonical_string(),
                    ));
                }
                Self::Decimal {
                    precision: *precision,
                    scale: *scale,
                }
            }
            DataType::String => Self::String {
                max_len: sizing.max_len,
            },
            DataType::Binary => Self::Binary {
                max_len: sizing.max_len,
            },
            DataType::Timestamp => Self::Timestamp,
            DataType::Date => Self::Date,
            DataType::Array {
                element_type,
                element_nullable,
            } => Self::Array(ArrayGenerator::new(
                Self::build(element_type, sizing)?,
                *element_nullable,
                sizing,
            )),
            DataType::Map {
                key_type,
                value_type,
                value_nullable,
            } => Self::Map(MapGenerator::new(
                Self::build(key_type, sizing)?,
                Self::build(value_type, sizing)?,
                *value_nullable,
                sizing,
            )),
            DataType::Record { fields } => {
                let slots = fields
                    .iter()
                    .map(|field| Ok((Self::build(&field.data_type, sizing)?, field.nullable)))
                    .collect::<Result<Vec<_>, GeneratorError>>()?;
                Self::Record(RecordGenerator::new(slots, sizing.null_probability))
            }
            DataType::Null
            | DataType::Time
            | DataType::Interval
            | DataType::Json
            | DataType::Geography
            | DataType::UserDefined { .. } => {
                return Err(GeneratorError::UnsupportedType(
                    data_type.canonical_string(),
                ))
            }
        };
        Ok(generator)
    }
}

impl ValueGenerator for FieldGenerator {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        match self {
            Self::Bool => Value::Bool(rng.gen()),
            Self::Int8 => numeric::generate_int8(rng),
            Self::Int16 => numeric::generate_int16(rng),
            Self::Int32 => numeric::generate_int32(rng),
            Self::Int64 => numeric::generate_int64(rng),
            Self::Float32 => numeric::generate_float32(rng),
            Self::Float64 => numeric::generate_float64(rng),
            Self::Decimal { precision, scale } => {
                numeric::generate_decimal(rng, *precision, *scale)
            }
            Self::String { max_len } => text::generate_string(rng, *max_len),
            Self::Binary { max_len } => text::generate_binary(rng, *max_len),
            Self::Timestamp => temporal::generate_timestamp(rng),
            Self::Date => temporal::generate_date(rng),
            Self::Array(generator) => generator.generate(rng),
            Self::Map(generator) => generator.generate(rng),
            Self::Record(generator) => generator.generate(rng),
        }
    }
}
