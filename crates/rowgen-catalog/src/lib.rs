//! Schema catalog for the rowgen dataset generator.
//!
//! Derives a stable, type-system-complete set of fields to use as generation
//! targets, without hand-written schema literals for each type combination.
//! Field names are derived from each type's canonical string, and building the
//! catalog fails fast if a type has no naming rule or two names collide.
//!
//! # Example
//!
//! ```rust
//! use rowgen_catalog::Catalog;
//!
//! let catalog = Catalog::build().unwrap();
//! assert!(catalog.atomic_fields().iter().any(|f| f.name == "decimal"));
//! assert!(catalog.array_fields().iter().any(|f| f.name == "arrayOfNullableString0"));
//! ```

pub mod catalog;
mod error;
pub mod naming;

pub use catalog::{
    array_fields, atomic_fields, atomic_types, is_array_eligible, map_fields, nested_fields,
    Catalog,
};
pub use error::CatalogError;
pub use naming::{array_name, create_name, map_name, NULLABLE_MARKER};
