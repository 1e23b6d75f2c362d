//! `catalog.json` assembly.

use indexmap::IndexMap;
use tracing::debug;

use rde_model::documents::CatalogExampleDocument;
use rde_model::{Artifact, ParameterRow, Result, SheetMeta};

use crate::dedupe::ensure_unique_parameters;
use crate::resolve::resolve_value;

use super::output_rows;

/// Build the catalog example document: a flat object of resolved values,
/// one per output-enabled row.
pub fn build_catalog_example(
    meta: &SheetMeta,
    rows: &[ParameterRow],
) -> Result<CatalogExampleDocument> {
    let document = Artifact::CatalogExample.file_name();
    let rows = output_rows(rows);
    ensure_unique_parameters(&rows, "catalog", document)?;

    let mut catalog = IndexMap::new();
    for row in &rows {
        catalog.insert(row.name.clone(), resolve_value(row, document)?);
    }

    debug!(entries = catalog.len(), "assembled catalog example");
    Ok(CatalogExampleDocument {
        schema: meta.value_or_default("$schema"),
        catalog,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rde_model::{OutputFlag, ParamType, ParameterRow, TemplateError};
    use serde_json::json;

    fn meta() -> SheetMeta {
        let mut meta = SheetMeta::default();
        meta.insert("$schema", "https://example.com/catalog.schema.json");
        meta
    }

    #[test]
    fn resolves_one_value_per_enabled_row() {
        let mut title = ParameterRow::new("dataset_title", ParamType::String);
        title.examples = Some("My dataset".to_string());
        let mut count = ParameterRow::new("sample_count", ParamType::Integer);
        count.default = Some("3".to_string());
        let empty = ParameterRow::new("note", ParamType::String);
        let mut hidden = ParameterRow::new("hidden", ParamType::String);
        hidden.output = OutputFlag::Off;

        let example =
            build_catalog_example(&meta(), &[title, count, empty, hidden]).expect("example");
        let value = serde_json::to_value(&example).expect("serialize");

        assert_eq!(value["$schema"], json!("https://example.com/catalog.schema.json"));
        assert_eq!(
            value["catalog"],
            json!({
                "dataset_title": "My dataset",
                "sample_count": 3,
                "note": "null"
            })
        );
    }

    #[test]
    fn first_validation_error_aborts_the_artifact() {
        let mut ok = ParameterRow::new("a", ParamType::String);
        ok.examples = Some("fine".to_string());
        let mut bad = ParameterRow::new("b", ParamType::Integer);
        bad.required = true;
        let err = build_catalog_example(&meta(), &[ok, bad]).unwrap_err();
        assert!(matches!(err, TemplateError::RequiredMissing { .. }));
    }

    #[test]
    fn duplicates_are_fatal() {
        let rows = vec![
            ParameterRow::new("a", ParamType::String),
            ParameterRow::new("a", ParamType::String),
        ];
        let err = build_catalog_example(&meta(), &rows).unwrap_err();
        assert!(matches!(err, TemplateError::DuplicateParameters { .. }));
    }
}
