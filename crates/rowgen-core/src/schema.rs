//! Schema definitions for the rowgen dataset generator.
//!
//! A [`Schema`] is an ordered list of [`Field`]s. Order is significant: records
//! are positional, so the `i`-th value of a record belongs to the `i`-th field.

use crate::types::DataType;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Two sibling fields share a name
    #[error("Duplicate field name '{name}' in {path}")]
    DuplicateField { name: String, path: String },

    /// Field not found in schema
    #[error("Field not found: {0}")]
    FieldNotFound(String),
}

// ============================================================================
// Field
// ============================================================================

/// A (name, type, nullable) triple describing one record position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Field {
    /// Field name
    pub name: String,

    /// Field type
    #[serde(rename = "type")]
    pub data_type: DataType,

    /// Whether this field may hold null
    #[serde(default)]
    pub nullable: bool,
}

impl Field {
    /// Create a new non-nullable field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: false,
        }
    }

    /// Create a new nullable field.
    pub fn nullable(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: true,
        }
    }

    /// Create a field with explicit nullability.
    pub fn with_nullability(name: impl Into<String>, data_type: DataType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable,
        }
    }
}

// ============================================================================
// Schema
// ============================================================================

/// Ordered sequence of field definitions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Schema {
    /// Field definitions in positional order
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from a list of fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Load a schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a schema from a YAML string.
    ///
    /// Duplicate field names at any nesting level are rejected.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let schema: Self = serde_yaml::from_str(yaml)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Serialize the schema to YAML.
    pub fn to_yaml(&self) -> Result<String, SchemaError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check that sibling field names are unique, recursing into nested types.
    pub fn validate(&self) -> Result<(), SchemaError> {
        validate_fields(&self.fields, "schema")
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get the position of a field by name.
    pub fn index_of(&self, name: &str) -> Result<usize, SchemaError> {
        self.fields
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| SchemaError::FieldNotFound(name.to_string()))
    }

    /// Get all field names in positional order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

impl From<Vec<Field>> for Schema {
    fn from(fields: Vec<Field>) -> Self {
        Self::new(fields)
    }
}

fn validate_fields(fields: &[Field], path: &str) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for field in fields {
        if !seen.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateField {
                name: field.name.clone(),
                path: path.to_string(),
            });
        }
        validate_type(&field.data_type, &format!("{path}.{}", field.name))?;
    }
    Ok(())
}

fn validate_type(data_type: &DataType, path: &str) -> Result<(), SchemaError> {
    match data_type {
        DataType::Record { fields } => validate_fields(fields, path),
        DataType::Array { element_type, .. } => validate_type(element_type, path),
        DataType::Map {
            key_type,
            value_type,
            ..
        } => {
            validate_type(key_type, path)?;
            validate_type(value_type, path)
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_schema_yaml() -> &'static str {
        r#"
fields:
  - name: a
    type: int
  - name: b
    type:
      type: array
      element_type: text
      element_nullable: true
    nullable: true
  - name: c
    type:
      type: record
      fields:
        - name: amount
          type:
            type: decimal
            precision: 38
            scale: 9
        - name: seen_at
          type: timestamp
          nullable: true
"#
    }

    #[test]
    fn test_parse_schema() {
        let schema = Schema::from_yaml(test_schema_yaml()).unwrap();

        assert_eq!(schema.len(), 3);
        assert_eq!(schema.field_names(), vec!["a", "b", "c"]);

        let a = schema.get_field("a").unwrap();
        assert_eq!(a.data_type, DataType::Int32);
        assert!(!a.nullable);

        let b = schema.get_field("b").unwrap();
        assert_eq!(b.data_type, DataType::array(DataType::String, true));
        assert!(b.nullable);

        let c = schema.get_field("c").unwrap();
        assert_eq!(
            c.data_type,
            DataType::record(vec![
                Field::new("amount", DataType::decimal(38, 9)),
                Field::nullable("seen_at", DataType::Timestamp),
            ])
        );
    }

    #[test]
    fn test_index_of() {
        let schema = Schema::from_yaml(test_schema_yaml()).unwrap();
        assert_eq!(schema.index_of("b").unwrap(), 1);
        assert!(matches!(
            schema.index_of("missing"),
            Err(SchemaError::FieldNotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_top_level_field() {
        let yaml = r#"
fields:
  - name: a
    type: int
  - name: a
    type: text
"#;
        let result = Schema::from_yaml(yaml);
        assert!(matches!(
            result,
            Err(SchemaError::DuplicateField { ref name, .. }) if name == "a"
        ));
    }

    #[test]
    fn test_duplicate_nested_field() {
        let schema = Schema::new(vec![Field::new(
            "outer",
            DataType::array(
                DataType::record(vec![
                    Field::new("x", DataType::Int32),
                    Field::new("x", DataType::Int64),
                ]),
                false,
            ),
        )]);
        let err = schema.validate().unwrap_err();
        assert!(err.to_string().contains("schema.outer"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let schema = Schema::from_yaml(test_schema_yaml()).unwrap();
        let yaml = schema.to_yaml().unwrap();
        let parsed = Schema::from_yaml(&yaml).unwrap();
        assert_eq!(schema, parsed);
    }

    #[test]
    fn test_nullable_defaults_to_false() {
        let schema = Schema::from_yaml("fields:\n  - name: d\n    type: date\n").unwrap();
        assert!(!schema.fields[0].nullable);
    }
}
