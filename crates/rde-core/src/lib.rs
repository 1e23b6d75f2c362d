//! The template generation engine.
//!
//! One shared value-resolution and validation pipeline feeds every artifact:
//! a value accepted while generating an example document can never violate
//! the schema generated from the same rows, because both go through the same
//! resolution, coercion, and constraint checks.

pub mod assemble;
pub mod datetime;
pub mod dedupe;
pub mod resolve;
pub mod schema;
pub mod terms;
pub mod validate;

pub use assemble::{
    build_catalog_example, build_catalog_schema, build_definition, build_invoice_example,
    build_invoice_schema,
};
pub use dedupe::{duplicate_keys, duplicate_names, ensure_unique_parameters};
pub use resolve::{NULL_SENTINEL, resolve_value};
pub use schema::{ExampleStyle, property_schema};
pub use terms::TermResolver;
