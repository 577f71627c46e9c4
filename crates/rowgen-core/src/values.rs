//! Value representations for generated records.
//!
//! `Value` is the runtime representation of one field of one record. A
//! [`Record`] is positional: its `i`-th value belongs to the `i`-th field of
//! the schema it was generated from.

use crate::schema::{Field, Schema};
use crate::temporal;
use crate::types::DataType;
use chrono::{DateTime, NaiveDate, Utc};

/// Runtime value of a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value of a nullable field, element or map value
    Null,

    /// Boolean value
    Bool(bool),

    /// 8-bit signed integer
    Int8(i8),

    /// 16-bit signed integer
    Int16(i16),

    /// 32-bit signed integer
    Int32(i32),

    /// 64-bit signed integer
    Int64(i64),

    /// 32-bit floating point
    Float32(f32),

    /// 64-bit floating point
    Float64(f64),

    /// Unicode string
    String(String),

    /// Binary data
    Binary(Vec<u8>),

    /// Fixed-point decimal stored as an unscaled integer
    Decimal {
        /// Unscaled value; the represented number is `unscaled * 10^-scale`
        unscaled: i128,
        /// Total number of digits
        precision: u8,
        /// Number of digits after the decimal point
        scale: u8,
    },

    /// Instant in UTC
    Timestamp(DateTime<Utc>),

    /// Calendar date
    Date(NaiveDate),

    /// Array of values
    Array(Vec<Value>),

    /// Map entries in generation order, keys unique
    Map(Vec<(Value, Value)>),

    /// Nested record
    Record(Record),
}

impl Value {
    /// Create a new decimal value.
    pub fn decimal(unscaled: i128, precision: u8, scale: u8) -> Self {
        Self::Decimal {
            unscaled,
            precision,
            scale,
        }
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64, widening narrower integers.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int8(i) => Some(i64::from(*i)),
            Self::Int16(i) => Some(i64::from(*i)),
            Self::Int32(i) => Some(i64::from(*i)),
            Self::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to get this value as map entries.
    pub fn as_map(&self) -> Option<&[(Value, Value)]> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Try to get this value as a nested record.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Check that this value is a valid instance of `data_type`.
    ///
    /// `Null` conforms only when `nullable` is set. Temporal values must lie
    /// in the bounded domain, decimals must fit their precision, map keys must
    /// be non-null and unique.
    pub fn conforms_to(&self, data_type: &DataType, nullable: bool) -> bool {
        match (data_type, self) {
            (_, Self::Null) => nullable,
            (DataType::Bool, Self::Bool(_)) => true,
            (DataType::Int8, Self::Int8(_)) => true,
            (DataType::Int16, Self::Int16(_)) => true,
            (DataType::Int32, Self::Int32(_)) => true,
            (DataType::Int64, Self::Int64(_)) => true,
            (DataType::Float32, Self::Float32(f)) => f.is_finite(),
            (DataType::Float64, Self::Float64(f)) => f.is_finite(),
            (DataType::String, Self::String(_)) => true,
            (DataType::Binary, Self::Binary(_)) => true,
            (
                DataType::Decimal { precision, scale },
                Self::Decimal {
                    unscaled,
                    precision: p,
                    scale: s,
                },
            ) => {
                p == precision
                    && s == scale
                    && 10u128
                        .checked_pow(u32::from(*precision))
                        .is_some_and(|limit| unscaled.unsigned_abs() < limit)
            }
            (DataType::Timestamp, Self::Timestamp(ts)) => temporal::contains_instant(ts),
            (DataType::Date, Self::Date(date)) => temporal::contains_date(date),
            (
                DataType::Array {
                    element_type,
                    element_nullable,
                },
                Self::Array(items),
            ) => items
                .iter()
                .all(|item| item.conforms_to(element_type, *element_nullable)),
            (
                DataType::Map {
                    key_type,
                    value_type,
                    value_nullable,
                },
                Self::Map(entries),
            ) => {
                let keys_unique = entries
                    .iter()
                    .enumerate()
                    .all(|(i, (key, _))| entries[..i].iter().all(|(other, _)| other != key));
                keys_unique
                    && entries.iter().all(|(key, value)| {
                        key.conforms_to(key_type, false)
                            && value.conforms_to(value_type, *value_nullable)
                    })
            }
            (DataType::Record { fields }, Self::Record(record)) => record.conforms_to_fields(fields),
            _ => false,
        }
    }
}

/// Format an unscaled decimal as a plain decimal string.
pub fn format_decimal(unscaled: i128, scale: u8) -> String {
    let sign = if unscaled < 0 { "-" } else { "" };
    let digits = unscaled.unsigned_abs().to_string();
    let scale = usize::from(scale);
    if scale == 0 {
        return format!("{sign}{digits}");
    }
    let padded = format!("{digits:0>width$}", width = scale + 1);
    let (int_part, frac_part) = padded.split_at(padded.len() - scale);
    format!("{sign}{int_part}.{frac_part}")
}

/// One generated record: values positionally aligned with a schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    values: Vec<Value>,
}

impl Record {
    /// Create a new record from positional values.
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Get the value at a position.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// All values in positional order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Consume the record, returning its values.
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the record has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check that this record conforms to a schema.
    pub fn conforms_to(&self, schema: &Schema) -> bool {
        self.conforms_to_fields(&schema.fields)
    }

    /// Check arity and per-position conformance against a field list.
    pub fn conforms_to_fields(&self, fields: &[Field]) -> bool {
        self.values.len() == fields.len()
            && self
                .values
                .iter()
                .zip(fields)
                .all(|(value, field)| value.conforms_to(&field.data_type, field.nullable))
    }
}

impl From<Vec<Value>> for Record {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}
