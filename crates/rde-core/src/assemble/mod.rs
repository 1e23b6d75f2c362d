//! Document assemblers, one per artifact.
//!
//! Each assembler filters its rows to the output-enabled set, runs the
//! duplicate guard per category scope, then builds the document through the
//! shared resolution/validation pipeline. Assembly is all-or-nothing: the
//! first fatal error aborts the artifact and no partial document escapes.

mod catalog_example;
mod catalog_schema;
mod definition;
mod invoice_example;
mod invoice_schema;

pub use catalog_example::build_catalog_example;
pub use catalog_schema::build_catalog_schema;
pub use definition::build_definition;
pub use invoice_example::build_invoice_example;
pub use invoice_schema::build_invoice_schema;

use rde_model::{Category, ParameterRow, Result};

use crate::dedupe::ensure_unique_parameters;

/// Rows that participate in generated artifacts.
fn output_rows(rows: &[ParameterRow]) -> Vec<&ParameterRow> {
    rows.iter().filter(|row| row.emits_output()).collect()
}

fn rows_in_category<'a>(rows: &[&'a ParameterRow], category: Category) -> Vec<&'a ParameterRow> {
    rows.iter()
        .copied()
        .filter(|row| row.category == Some(category))
        .collect()
}

/// Duplicate-guard every listed category scope.
fn guard_categories(
    rows: &[&ParameterRow],
    categories: &[Category],
    document: &str,
) -> Result<()> {
    for category in categories {
        let scoped = rows_in_category(rows, *category);
        ensure_unique_parameters(&scoped, category.as_str(), document)?;
    }
    Ok(())
}

/// Category scopes used by the invoice sheet.
const INVOICE_CATEGORIES: [Category; 4] = [
    Category::Custom,
    Category::SampleCommon,
    Category::SampleGeneral,
    Category::SampleSpecific,
];
