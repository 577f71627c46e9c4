//! Field naming rules.
//!
//! Names are derived from a type's canonical string by keeping only its
//! alphabetic characters. Non-decimal atomic names are capitalized, so
//! `boolean` becomes `Boolean`; the system default `decimal(38,9)` strips to
//! plain `decimal`. The nullable variant of a field gets [`NULLABLE_MARKER`]
//! appended, giving `Boolean0` and `decimal0`. Decimals other than the system
//! default would all strip to `decimal`, so their precision and scale are
//! spelled out in words.

use crate::error::CatalogError;
use rowgen_core::{DataType, SYSTEM_DEFAULT_DECIMAL};

/// Suffix appended to the name of a nullable field.
pub const NULLABLE_MARKER: &str = "0";

const DIGIT_WORDS: [&str; 10] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

/// Keep only the alphabetic characters of `s`.
pub fn letters_only(s: &str) -> String {
    s.chars().filter(|c| c.is_alphabetic()).collect()
}

/// Spell a number digit by digit, e.g. `38` -> `ThreeEight`.
fn spell_number(n: u8) -> String {
    n.to_string()
        .bytes()
        .map(|digit| DIGIT_WORDS[usize::from(digit - b'0')])
        .collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn with_marker(mut name: String, nullable: bool) -> String {
    if nullable {
        name.push_str(NULLABLE_MARKER);
    }
    name
}

/// Derive the base name of an atomic type.
///
/// Composite types and types the generator cannot produce have no naming
/// rule and fail with [`CatalogError::MissingNamingRule`].
pub fn base_name(data_type: &DataType) -> Result<String, CatalogError> {
    match data_type {
        DataType::Bool
        | DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::Float32
        | DataType::Float64
        | DataType::String
        | DataType::Binary
        | DataType::Timestamp
        | DataType::Date => Ok(capitalize(&letters_only(&data_type.canonical_string()))),
        DataType::Decimal { precision, scale } if (*precision, *scale) == SYSTEM_DEFAULT_DECIMAL => {
            Ok(letters_only(&data_type.canonical_string()))
        }
        DataType::Decimal { precision, scale } => Ok(format!(
            "{}{}By{}",
            letters_only(&data_type.canonical_string()),
            spell_number(*precision),
            spell_number(*scale)
        )),
        DataType::Array { .. }
        | DataType::Map { .. }
        | DataType::Record { .. }
        | DataType::Null
        | DataType::Time
        | DataType::Interval
        | DataType::Json
        | DataType::Geography
        | DataType::UserDefined { .. } => Err(CatalogError::MissingNamingRule(
            data_type.canonical_string(),
        )),
    }
}

/// Name of an atomic field of the given type and nullability.
pub fn create_name(data_type: &DataType, nullable: bool) -> Result<String, CatalogError> {
    Ok(with_marker(base_name(data_type)?, nullable))
}

/// Name of an array-of-atomic field.
///
/// `arrayOf<Base>` for non-nullable elements, `arrayOfNullable<Base>`
/// otherwise, plus the nullable marker when the field itself is nullable.
pub fn array_name(
    element_type: &DataType,
    element_nullable: bool,
    nullable: bool,
) -> Result<String, CatalogError> {
    wrapped_name("array", element_type, element_nullable, nullable)
}

/// Name of a string-keyed map field, following the array scheme with `mapOf`.
pub fn map_name(
    value_type: &DataType,
    value_nullable: bool,
    nullable: bool,
) -> Result<String, CatalogError> {
    wrapped_name("map", value_type, value_nullable, nullable)
}

fn wrapped_name(
    prefix: &str,
    inner: &DataType,
    inner_nullable: bool,
    nullable: bool,
) -> Result<String, CatalogError> {
    let inner_part = if inner_nullable { "OfNullable" } else { "Of" };
    let name = format!("{prefix}{inner_part}{}", capitalize(&base_name(inner)?));
    Ok(with_marker(name, nullable))
}
