//! Catalog of representative fields.
//!
//! The catalog enumerates every atomic type of the registry as a nullable and
//! a non-nullable field, one level of array-of-atomic (and string-keyed
//! map-of-atomic) fields over the eligible types, and a nested record holding
//! all atomic fields. Construction checks that no two entries share a name.

use crate::error::CatalogError;
use crate::naming::{array_name, create_name, map_name, NULLABLE_MARKER};
use rowgen_core::{DataType, Field, Schema, MAX_DECIMAL_PRECISION};
use std::collections::HashMap;
use tracing::debug;

/// Name of the non-nullable nested record field; the nullable one gets the
/// nullable marker appended.
pub const NESTED_RECORD_NAME: &str = "recordOfAtomics";

/// The fixed registry of atomic types the catalog enumerates.
pub fn atomic_types() -> Vec<DataType> {
    vec![
        DataType::Bool,
        DataType::Int8,
        DataType::Int16,
        DataType::Int32,
        DataType::Int64,
        DataType::Float32,
        DataType::Float64,
        DataType::String,
        DataType::Binary,
        DataType::Timestamp,
        DataType::Date,
        DataType::decimal(38, 9),
        DataType::decimal(38, 0),
        DataType::decimal(38, 38),
        DataType::decimal(10, 2),
        DataType::decimal(5, 0),
    ]
}

/// Whether arrays (and map values) of this atomic type belong in the catalog.
///
/// Binary is excluded, as are decimals below the maximum precision: the
/// downstream store cannot cast arrays of those safely.
pub fn is_array_eligible(data_type: &DataType) -> bool {
    match data_type {
        DataType::Binary => false,
        DataType::Decimal { precision, .. } => *precision == MAX_DECIMAL_PRECISION,
        other => other.is_atomic(),
    }
}

/// Nullable and non-nullable field for each registry type.
pub fn atomic_fields(types: &[DataType]) -> Result<Vec<Field>, CatalogError> {
    let mut fields = Vec::with_capacity(types.len() * 2);
    for data_type in types {
        for nullable in [false, true] {
            let name = create_name(data_type, nullable)?;
            fields.push(Field::with_nullability(name, data_type.clone(), nullable));
        }
    }
    Ok(fields)
}

/// Array fields for every eligible type × {element-nullable, field-nullable}.
pub fn array_fields(types: &[DataType]) -> Result<Vec<Field>, CatalogError> {
    let mut fields = Vec::new();
    for element_type in types.iter().filter(|t| is_array_eligible(t)) {
        for element_nullable in [false, true] {
            for nullable in [false, true] {
                let name = array_name(element_type, element_nullable, nullable)?;
                let data_type = DataType::array(element_type.clone(), element_nullable);
                fields.push(Field::with_nullability(name, data_type, nullable));
            }
        }
    }
    Ok(fields)
}

/// String-keyed map fields for every eligible value type × {value-nullable,
/// field-nullable}.
pub fn map_fields(types: &[DataType]) -> Result<Vec<Field>, CatalogError> {
    let mut fields = Vec::new();
    for value_type in types.iter().filter(|t| is_array_eligible(t)) {
        for value_nullable in [false, true] {
            for nullable in [false, true] {
                let name = map_name(value_type, value_nullable, nullable)?;
                let data_type = DataType::map(DataType::String, value_type.clone(), value_nullable);
                fields.push(Field::with_nullability(name, data_type, nullable));
            }
        }
    }
    Ok(fields)
}

/// Nullable and non-nullable record fields whose nested schema is `atomic`.
pub fn nested_fields(atomic: &[Field]) -> Vec<Field> {
    [false, true]
        .into_iter()
        .map(|nullable| {
            let name = if nullable {
                format!("{NESTED_RECORD_NAME}{NULLABLE_MARKER}")
            } else {
                NESTED_RECORD_NAME.to_string()
            };
            Field::with_nullability(name, DataType::record(atomic.to_vec()), nullable)
        })
        .collect()
}

/// Immutable, deterministically built set of catalog fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    atomic: Vec<Field>,
    arrays: Vec<Field>,
    maps: Vec<Field>,
    nested: Vec<Field>,
}

impl Catalog {
    /// Build the catalog from the default registry.
    pub fn build() -> Result<Self, CatalogError> {
        Self::from_registry(&atomic_types())
    }

    /// Build the catalog from a custom registry of atomic types.
    ///
    /// Fails if any type lacks a naming rule or two entries derive the same
    /// name, including a type listed twice.
    pub fn from_registry(types: &[DataType]) -> Result<Self, CatalogError> {
        let atomic = atomic_fields(types)?;
        let arrays = array_fields(types)?;
        let maps = map_fields(types)?;
        let nested = nested_fields(&atomic);

        let catalog = Self {
            atomic,
            arrays,
            maps,
            nested,
        };
        catalog.check_unique_names()?;

        debug!(
            "Built catalog: {} atomic, {} array, {} map, {} nested fields",
            catalog.atomic.len(),
            catalog.arrays.len(),
            catalog.maps.len(),
            catalog.nested.len()
        );

        Ok(catalog)
    }

    fn check_unique_names(&self) -> Result<(), CatalogError> {
        let mut seen: HashMap<&str, &Field> = HashMap::new();
        for field in self.all_fields() {
            if let Some(first) = seen.insert(field.name.as_str(), field) {
                return Err(CatalogError::NamingCollision {
                    name: field.name.clone(),
                    first: describe(first),
                    second: describe(field),
                });
            }
        }
        Ok(())
    }

    /// Atomic fields, nullable and non-nullable.
    pub fn atomic_fields(&self) -> &[Field] {
        &self.atomic
    }

    /// Array-of-atomic fields.
    pub fn array_fields(&self) -> &[Field] {
        &self.arrays
    }

    /// String-keyed map-of-atomic fields.
    pub fn map_fields(&self) -> &[Field] {
        &self.maps
    }

    /// Nested record fields.
    pub fn nested_fields(&self) -> &[Field] {
        &self.nested
    }

    /// Every catalog field: atomic, array, map, then nested.
    pub fn all_fields(&self) -> impl Iterator<Item = &Field> {
        self.atomic
            .iter()
            .chain(&self.arrays)
            .chain(&self.maps)
            .chain(&self.nested)
    }

    /// Every catalog field as a single schema.
    pub fn schema(&self) -> Schema {
        Schema::new(self.all_fields().cloned().collect())
    }
}

fn describe(field: &Field) -> String {
    let nullability = if field.nullable { "nullable" } else { "non-nullable" };
    format!("{nullability} {}", field.data_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_covers_required_types() {
        let types = atomic_types();
        let decimals: Vec<_> = types
            .iter()
            .filter(|t| matches!(t, DataType::Decimal { .. }))
            .collect();
        assert!(decimals.len() >= 4);
        assert!(decimals
            .iter()
            .any(|t| matches!(t, DataType::Decimal { precision: 38, .. })));
        assert!(types.iter().all(DataType::is_atomic));
    }

    #[test]
    fn test_atomic_fields_have_both_nullabilities() {
        let catalog = Catalog::build().unwrap();
        let atomic = catalog.atomic_fields();
        assert_eq!(atomic.len(), atomic_types().len() * 2);

        let boolean = atomic.iter().find(|f| f.name == "Boolean").unwrap();
        assert!(!boolean.nullable);
        assert_eq!(boolean.data_type, DataType::Bool);

        let boolean0 = atomic.iter().find(|f| f.name == "Boolean0").unwrap();
        assert!(boolean0.nullable);

        let decimal = atomic.iter().find(|f| f.name == "decimal").unwrap();
        assert_eq!(decimal.data_type, DataType::decimal(38, 9));
    }

    #[test]
    fn test_array_eligibility() {
        assert!(is_array_eligible(&DataType::String));
        assert!(is_array_eligible(&DataType::decimal(38, 0)));
        assert!(!is_array_eligible(&DataType::Binary));
        assert!(!is_array_eligible(&DataType::decimal(10, 2)));
        assert!(!is_array_eligible(&DataType::array(DataType::Int32, false)));
    }

    #[test]
    fn test_array_fields() {
        let catalog = Catalog::build().unwrap();
        let arrays = catalog.array_fields();

        let eligible = atomic_types().iter().filter(|t| is_array_eligible(t)).count();
        assert_eq!(arrays.len(), eligible * 4);

        assert!(arrays.iter().all(|f| match &f.data_type {
            DataType::Array { element_type, .. } => is_array_eligible(element_type),
            _ => false,
        }));

        let field = arrays
            .iter()
            .find(|f| f.name == "arrayOfNullableString0")
            .unwrap();
        assert!(field.nullable);
        assert_eq!(field.data_type, DataType::array(DataType::String, true));

        assert!(!arrays.iter().any(|f| f.name.contains("Binary")));
        assert!(!arrays.iter().any(|f| f.name.contains("OneZeroByTwo")));
    }

    #[test]
    fn test_map_and_nested_fields() {
        let catalog = Catalog::build().unwrap();
        assert_eq!(catalog.map_fields().len(), catalog.array_fields().len());

        let nested = catalog.nested_fields();
        assert_eq!(nested.len(), 2);
        assert_eq!(nested[0].name, "recordOfAtomics");
        assert_eq!(nested[1].name, "recordOfAtomics0");
        assert_eq!(
            nested[0].data_type,
            DataType::record(catalog.atomic_fields().to_vec())
        );
    }

    #[test]
    fn test_names_are_unique() {
        let catalog = Catalog::build().unwrap();
        let mut names = HashSet::new();
        for field in catalog.all_fields() {
            assert!(names.insert(field.name.clone()), "duplicate {}", field.name);
        }
        assert!(catalog.schema().validate().is_ok());
    }

    #[test]
    fn test_build_is_deterministic() {
        let first = Catalog::build().unwrap();
        let second = Catalog::build().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_registry_without_naming_rule_fails() {
        let result = Catalog::from_registry(&[DataType::Int32, DataType::Time]);
        assert_eq!(
            result,
            Err(CatalogError::MissingNamingRule("time".to_string()))
        );
    }

    #[test]
    fn test_duplicate_registry_entry_collides() {
        let result = Catalog::from_registry(&[DataType::Int32, DataType::Int32]);
        assert!(matches!(
            result,
            Err(CatalogError::NamingCollision { ref name, .. }) if name == "Int"
        ));
    }
}
