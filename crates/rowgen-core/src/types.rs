//! Data types for the rowgen dataset generator.
//!
//! This module defines `DataType`, the closed type universe a schema can
//! describe. Generators dispatch on it with exhaustive matches, so adding a
//! variant here forces every consumer to decide how to handle it.

use crate::schema::Field;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Maximum decimal precision supported by the downstream columnar store.
pub const MAX_DECIMAL_PRECISION: u8 = 38;

/// Precision and scale of the system default decimal type.
pub const SYSTEM_DEFAULT_DECIMAL: (u8, u8) = (38, 9);

/// Columnar data type of a schema field.
///
/// # YAML Format
///
/// Simple types can be specified as strings:
/// ```yaml
/// type: int
/// type: text
/// type: timestamp
/// ```
///
/// Complex types use object format:
/// ```yaml
/// type:
///   type: decimal
///   precision: 38
///   scale: 9
/// type:
///   type: array
///   element_type: text
///   element_nullable: true
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DataType {
    // Boolean
    /// Boolean value
    Bool,

    // Integer types
    /// 8-bit signed integer
    Int8,

    /// 16-bit signed integer
    Int16,

    /// 32-bit signed integer
    Int32,

    /// 64-bit signed integer
    Int64,

    // Floating point
    /// 32-bit IEEE 754 floating point
    Float32,

    /// 64-bit IEEE 754 floating point
    Float64,

    // Exact numeric
    /// Fixed-point decimal with explicit precision and scale
    Decimal {
        /// Total number of digits
        precision: u8,
        /// Number of digits after the decimal point
        scale: u8,
    },

    /// Unicode string
    String,

    /// Binary data
    Binary,

    // Temporal types
    /// Instant with millisecond resolution, bounded to years 1-9999
    Timestamp,

    /// Calendar date, bounded to years 1-9999
    Date,

    // Composite types
    /// Array of a single element type
    Array {
        /// Element type
        element_type: Box<DataType>,
        /// Whether individual elements may be null
        element_nullable: bool,
    },

    /// Key/value mapping
    Map {
        /// Key type (keys are never null)
        key_type: Box<DataType>,
        /// Value type
        value_type: Box<DataType>,
        /// Whether individual values may be null
        value_nullable: bool,
    },

    /// Nested record
    Record {
        /// Nested field definitions
        fields: Vec<Field>,
    },

    // Types a schema source can describe but no generator produces
    /// Column that only ever holds null
    Null,

    /// Time of day without a date
    Time,

    /// Calendar interval
    Interval,

    /// JSON document
    Json,

    /// Geography (WKT)
    Geography,

    /// Type registered by an external system under its own name
    UserDefined {
        /// External type name
        name: String,
    },
}

impl Serialize for DataType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        match self {
            // Simple types - serialize as string
            Self::Bool => serializer.serialize_str("bool"),
            Self::Int8 => serializer.serialize_str("tiny_int"),
            Self::Int16 => serializer.serialize_str("small_int"),
            Self::Int32 => serializer.serialize_str("int"),
            Self::Int64 => serializer.serialize_str("big_int"),
            Self::Float32 => serializer.serialize_str("float"),
            Self::Float64 => serializer.serialize_str("double"),
            Self::String => serializer.serialize_str("text"),
            Self::Binary => serializer.serialize_str("bytes"),
            Self::Timestamp => serializer.serialize_str("timestamp"),
            Self::Date => serializer.serialize_str("date"),
            Self::Null => serializer.serialize_str("null"),
            Self::Time => serializer.serialize_str("time"),
            Self::Interval => serializer.serialize_str("interval"),
            Self::Json => serializer.serialize_str("json"),
            Self::Geography => serializer.serialize_str("geography"),

            // Complex types - serialize as map
            Self::Decimal { precision, scale } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "decimal")?;
                map.serialize_entry("precision", precision)?;
                map.serialize_entry("scale", scale)?;
                map.end()
            }
            Self::Array {
                element_type,
                element_nullable,
            } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "array")?;
                map.serialize_entry("element_type", element_type)?;
                map.serialize_entry("element_nullable", element_nullable)?;
                map.end()
            }
            Self::Map {
                key_type,
                value_type,
                value_nullable,
            } => {
                let mut map = serializer.serialize_map(Some(4))?;
                map.serialize_entry("type", "map")?;
                map.serialize_entry("key_type", key_type)?;
                map.serialize_entry("value_type", value_type)?;
                map.serialize_entry("value_nullable", value_nullable)?;
                map.end()
            }
            Self::Record { fields } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "record")?;
                map.serialize_entry("fields", fields)?;
                map.end()
            }
            Self::UserDefined { name } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "user_defined")?;
                map.serialize_entry("name", name)?;
                map.end()
            }
        }
    }
}

/// Resolve a simple (parameterless) type name, accepting common aliases.
fn simple_type(name: &str) -> Option<DataType> {
    let ty = match name {
        "bool" | "boolean" => DataType::Bool,
        "tiny_int" | "tinyint" | "byte" => DataType::Int8,
        "small_int" | "smallint" | "short" => DataType::Int16,
        "int" | "integer" => DataType::Int32,
        "big_int" | "bigint" | "long" => DataType::Int64,
        "float" => DataType::Float32,
        "double" => DataType::Float64,
        "text" | "string" => DataType::String,
        "bytes" | "binary" => DataType::Binary,
        "timestamp" => DataType::Timestamp,
        "date" => DataType::Date,
        "null" => DataType::Null,
        "time" => DataType::Time,
        "interval" => DataType::Interval,
        "json" => DataType::Json,
        "geography" => DataType::Geography,
        _ => return None,
    };
    Some(ty)
}

impl<'de> Deserialize<'de> for DataType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{Error, MapAccess, Visitor};

        struct DataTypeVisitor;

        impl<'de> Visitor<'de> for DataTypeVisitor {
            type Value = DataType;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or map representing a DataType")
            }

            // Handle string format: "int", "text", etc.
            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                simple_type(value).ok_or_else(|| E::custom(format!("unknown simple type: {value}")))
            }

            // An unquoted `null` in YAML arrives as a unit, not a string
            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: Error,
            {
                Ok(DataType::Null)
            }

            // Handle map format: {"type": "decimal", "precision": 38, "scale": 9}
            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut type_name: Option<String> = None;
                let mut fields: HashMap<String, serde_yaml::Value> = HashMap::new();

                while let Some(key) = map.next_key::<String>()? {
                    if key == "type" {
                        type_name = Some(map.next_value()?);
                    } else {
                        fields.insert(key, map.next_value()?);
                    }
                }

                let type_name = type_name.ok_or_else(|| M::Error::missing_field("type"))?;

                if let Some(ty) = simple_type(&type_name) {
                    return Ok(ty);
                }

                match type_name.as_str() {
                    "decimal" => {
                        let precision = get_field_required(&fields, "precision")?;
                        let scale = get_field_required(&fields, "scale")?;
                        Ok(DataType::Decimal { precision, scale })
                    }
                    "array" => {
                        let element_type: DataType = get_field_required(&fields, "element_type")?;
                        let element_nullable = get_field(&fields, "element_nullable").unwrap_or(false);
                        Ok(DataType::Array {
                            element_type: Box::new(element_type),
                            element_nullable,
                        })
                    }
                    "map" => {
                        let key_type: DataType = get_field_required(&fields, "key_type")?;
                        let value_type: DataType = get_field_required(&fields, "value_type")?;
                        let value_nullable = get_field(&fields, "value_nullable").unwrap_or(false);
                        Ok(DataType::Map {
                            key_type: Box::new(key_type),
                            value_type: Box::new(value_type),
                            value_nullable,
                        })
                    }
                    "record" | "struct" => {
                        let fields = get_field_required(&fields, "fields")?;
                        Ok(DataType::Record { fields })
                    }
                    "user_defined" => {
                        let name = get_field_required(&fields, "name")?;
                        Ok(DataType::UserDefined { name })
                    }
                    _ => Err(M::Error::custom(format!("unknown type: {type_name}"))),
                }
            }
        }

        deserializer.deserialize_any(DataTypeVisitor)
    }
}

// Helper functions for deserialization
fn get_field<T: for<'de> Deserialize<'de>>(
    fields: &HashMap<String, serde_yaml::Value>,
    key: &str,
) -> Option<T> {
    fields
        .get(key)
        .and_then(|v| serde_yaml::from_value(v.clone()).ok())
}

fn get_field_required<T: for<'de> Deserialize<'de>, E: serde::de::Error>(
    fields: &HashMap<String, serde_yaml::Value>,
    key: &'static str,
) -> Result<T, E> {
    let value = fields.get(key).ok_or_else(|| E::missing_field(key))?;
    serde_yaml::from_value(value.clone())
        .map_err(|e| E::custom(format!("invalid field '{key}': {e}")))
}

impl DataType {
    /// Create a new Decimal type with the given precision and scale.
    pub fn decimal(precision: u8, scale: u8) -> Self {
        Self::Decimal { precision, scale }
    }

    /// Create the system default decimal type, `decimal(38,9)`.
    pub fn default_decimal() -> Self {
        let (precision, scale) = SYSTEM_DEFAULT_DECIMAL;
        Self::Decimal { precision, scale }
    }

    /// Create a new Array type with the given element type.
    pub fn array(element_type: DataType, element_nullable: bool) -> Self {
        Self::Array {
            element_type: Box::new(element_type),
            element_nullable,
        }
    }

    /// Create a new Map type with the given key and value types.
    pub fn map(key_type: DataType, value_type: DataType, value_nullable: bool) -> Self {
        Self::Map {
            key_type: Box::new(key_type),
            value_type: Box::new(value_type),
            value_nullable,
        }
    }

    /// Create a new nested Record type.
    pub fn record(fields: Vec<Field>) -> Self {
        Self::Record { fields }
    }

    /// Check if this type is a non-composite scalar type.
    pub fn is_atomic(&self) -> bool {
        matches!(
            self,
            Self::Bool
                | Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::Float32
                | Self::Float64
                | Self::Decimal { .. }
                | Self::String
                | Self::Binary
                | Self::Timestamp
                | Self::Date
        )
    }

    /// Check if this type is an Array, Map or Record.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Array { .. } | Self::Map { .. } | Self::Record { .. })
    }

    /// Check if this type represents a temporal type.
    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::Timestamp | Self::Date)
    }

    /// Canonical string representation of the type signature.
    ///
    /// Catalog field names are derived from this string, so it must stay stable.
    pub fn canonical_string(&self) -> String {
        match self {
            Self::Bool => "boolean".to_string(),
            Self::Int8 => "byte".to_string(),
            Self::Int16 => "short".to_string(),
            Self::Int32 => "int".to_string(),
            Self::Int64 => "long".to_string(),
            Self::Float32 => "float".to_string(),
            Self::Float64 => "double".to_string(),
            Self::Decimal { precision, scale } => format!("decimal({precision},{scale})"),
            Self::String => "string".to_string(),
            Self::Binary => "binary".to_string(),
            Self::Timestamp => "timestamp".to_string(),
            Self::Date => "date".to_string(),
            Self::Array { element_type, .. } => {
                format!("array<{}>", element_type.canonical_string())
            }
            Self::Map {
                key_type,
                value_type,
                ..
            } => format!(
                "map<{},{}>",
                key_type.canonical_string(),
                value_type.canonical_string()
            ),
            Self::Record { fields } => {
                let inner: Vec<String> = fields
                    .iter()
                    .map(|f| format!("{}:{}", f.name, f.data_type.canonical_string()))
                    .collect();
                format!("struct<{}>", inner.join(","))
            }
            Self::Null => "null".to_string(),
            Self::Time => "time".to_string(),
            Self::Interval => "interval".to_string(),
            Self::Json => "json".to_string(),
            Self::Geography => "geography".to_string(),
            Self::UserDefined { name } => name.clone(),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_string())
    }
}
