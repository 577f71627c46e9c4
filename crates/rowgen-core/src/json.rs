//! Conversion of generated values to JSON.
//!
//! Decimals are rendered as strings to preserve precision, binary data is
//! base64 encoded, timestamps use RFC 3339 and dates `YYYY-MM-DD`. Maps become
//! a list of `{"key": .., "value": ..}` objects since keys are not limited to
//! strings.

use crate::schema::{Field, Schema};
use crate::types::DataType;
use crate::values::{format_decimal, Record, Value};
use base64::Engine;
use chrono::SecondsFormat;
use serde_json::{json, Map};

impl Value {
    /// Convert this value to JSON.
    ///
    /// Nested records need their field list for key names; use
    /// [`Value::to_json_with_fields`] for those.
    pub fn to_json(&self) -> serde_json::Value {
        self.to_json_with_fields(None)
    }

    /// Convert this value to JSON, naming nested record fields from `fields`.
    ///
    /// Without field names a nested record is rendered as a positional array.
    pub fn to_json_with_fields(&self, fields: Option<&[Field]>) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => json!(*b),
            Self::Int8(i) => json!(*i),
            Self::Int16(i) => json!(*i),
            Self::Int32(i) => json!(*i),
            Self::Int64(i) => json!(*i),
            Self::Float32(f) => json!(*f),
            Self::Float64(f) => json!(*f),
            Self::String(s) => json!(s),
            Self::Binary(b) => json!(base64::engine::general_purpose::STANDARD.encode(b)),
            Self::Decimal {
                unscaled, scale, ..
            } => json!(format_decimal(*unscaled, *scale)),
            Self::Timestamp(ts) => json!(ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Self::Date(date) => json!(date.format("%Y-%m-%d").to_string()),
            Self::Array(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(|item| item.to_json_with_fields(fields))
                    .collect(),
            ),
            Self::Map(entries) => serde_json::Value::Array(
                entries
                    .iter()
                    .map(|(key, value)| {
                        json!({
                            "key": key.to_json(),
                            "value": value.to_json_with_fields(fields),
                        })
                    })
                    .collect(),
            ),
            Self::Record(record) => match fields {
                Some(fields) => record.to_json_with_fields(fields),
                None => serde_json::Value::Array(
                    record.values().iter().map(Value::to_json).collect(),
                ),
            },
        }
    }
}

impl Record {
    /// Convert this record to a JSON object keyed by the schema's field names.
    pub fn to_json(&self, schema: &Schema) -> serde_json::Value {
        self.to_json_with_fields(&schema.fields)
    }

    /// Convert this record to a JSON object keyed by `fields`' names.
    pub fn to_json_with_fields(&self, fields: &[Field]) -> serde_json::Value {
        let mut object = Map::with_capacity(fields.len());
        for (value, field) in self.values().iter().zip(fields) {
            let nested = nested_fields(&field.data_type);
            object.insert(field.name.clone(), value.to_json_with_fields(nested));
        }
        serde_json::Value::Object(object)
    }
}

/// Field list of the record type reachable through arrays and map values.
fn nested_fields(data_type: &DataType) -> Option<&[Field]> {
    match data_type {
        DataType::Record { fields } => Some(fields),
        DataType::Array { element_type, .. } => nested_fields(element_type),
        DataType::Map { value_type, .. } => nested_fields(value_type),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate};

    #[test]
    fn test_scalar_rendering() {
        assert_eq!(Value::Int16(-7).to_json(), json!(-7));
        assert_eq!(Value::Bool(true).to_json(), json!(true));
        assert_eq!(Value::Null.to_json(), serde_json::Value::Null);
        assert_eq!(Value::decimal(-12345, 38, 9).to_json(), json!("-0.000012345"));
        assert_eq!(Value::Binary(vec![0, 1, 2]).to_json(), json!("AAEC"));
        assert_eq!(
            Value::Date(NaiveDate::from_ymd_opt(1, 1, 1).unwrap()).to_json(),
            json!("0001-01-01")
        );
        assert_eq!(
            Value::Timestamp(DateTime::from_timestamp_millis(1_500).unwrap()).to_json(),
            json!("1970-01-01T00:00:01.500Z")
        );
    }

    #[test]
    fn test_map_rendering() {
        let value = Value::Map(vec![(Value::Int32(1), Value::Null)]);
        assert_eq!(value.to_json(), json!([{"key": 1, "value": null}]));
    }

    #[test]
    fn test_record_rendering_uses_field_names() {
        let inner = vec![Field::new("x", DataType::Int32)];
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::nullable("tags", DataType::array(DataType::String, true)),
            Field::new(
                "points",
                DataType::array(DataType::record(inner.clone()), false),
            ),
        ]);
        let record = Record::new(vec![
            Value::Int64(9),
            Value::Array(vec![Value::String("a".into()), Value::Null]),
            Value::Array(vec![Value::Record(Record::new(vec![Value::Int32(3)]))]),
        ]);

        assert_eq!(
            record.to_json(&schema),
            json!({"id": 9, "tags": ["a", null], "points": [{"x": 3}]})
        );
    }

    #[test]
    fn test_record_without_fields_is_positional() {
        let value = Value::Record(Record::new(vec![Value::Int8(1), Value::Null]));
        assert_eq!(value.to_json(), json!([1, null]));
    }
}
