//! `catalog.schema.json` assembly.

use indexmap::IndexMap;
use tracing::debug;

use rde_model::documents::{
    BilingualText, CatalogBlock, CatalogProperties, CatalogSchemaDocument,
};
use rde_model::{Artifact, ParameterRow, Result, SheetMeta};

use crate::dedupe::ensure_unique_parameters;
use crate::schema::{ExampleStyle, property_schema};

use super::output_rows;

/// Build the catalog schema document. Every output-enabled row of the
/// catalog sheet lands under `properties.catalog`, regardless of its
/// category cell; the block labels come from the sheet's `title/ja` and
/// `title/en` metadata.
pub fn build_catalog_schema(
    meta: &SheetMeta,
    rows: &[ParameterRow],
) -> Result<CatalogSchemaDocument> {
    let document = Artifact::CatalogSchema.file_name();
    let rows = output_rows(rows);
    ensure_unique_parameters(&rows, "catalog", document)?;

    let mut block = CatalogBlock {
        ty: "object",
        label: BilingualText {
            ja: meta.value_or_default("title/ja"),
            en: meta.value_or_default("title/en"),
        },
        required: Vec::new(),
        properties: IndexMap::new(),
    };
    for row in &rows {
        if row.required {
            block.required.push(row.name.clone());
        }
        block.properties.insert(
            row.name.clone(),
            property_schema(row, ExampleStyle::Scalar, document)?,
        );
    }

    debug!(entries = block.properties.len(), "assembled catalog schema");
    Ok(CatalogSchemaDocument {
        schema: meta.value_or_default("$schema"),
        id: meta.value_or_default("$id"),
        ty: "object",
        required: vec!["catalog".to_string()],
        description: meta.get("description").map(str::to_string),
        properties: CatalogProperties { catalog: block },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rde_model::{Category, ParamType, TemplateError};
    use serde_json::json;

    fn meta() -> SheetMeta {
        let mut meta = SheetMeta::default();
        meta.insert("$schema", "https://json-schema.org/draft/2020-12/schema");
        meta.insert("$id", "https://example.com/catalog.schema.json");
        meta.insert("title/ja", "カタログ");
        meta.insert("title/en", "Catalog");
        meta
    }

    fn row(name: &str) -> ParameterRow {
        let mut row = ParameterRow::new(name, ParamType::String);
        row.category = Some(Category::Catalog);
        row
    }

    #[test]
    fn root_shape_and_labels() {
        let mut dataset = row("dataset_title");
        dataset.required = true;
        dataset.examples = Some("My dataset".to_string());

        let schema = build_catalog_schema(&meta(), &[dataset]).expect("schema");
        let value = serde_json::to_value(&schema).expect("serialize");

        assert_eq!(value["type"], json!("object"));
        assert_eq!(value["required"], json!(["catalog"]));
        assert_eq!(
            value["properties"]["catalog"]["label"],
            json!({"ja": "カタログ", "en": "Catalog"})
        );
        assert_eq!(
            value["properties"]["catalog"]["required"],
            json!(["dataset_title"])
        );
        // Catalog examples stay scalar, unlike the invoice schema.
        assert_eq!(
            value["properties"]["catalog"]["properties"]["dataset_title"]["examples"],
            json!("My dataset")
        );
    }

    #[test]
    fn missing_titles_emit_empty_labels() {
        let schema = build_catalog_schema(&SheetMeta::default(), &[row("a")]).expect("schema");
        let value = serde_json::to_value(&schema).expect("serialize");
        assert_eq!(
            value["properties"]["catalog"]["label"],
            json!({"ja": "", "en": ""})
        );
        assert_eq!(value["$schema"], json!(""));
        assert!(value.get("description").is_none());
    }

    #[test]
    fn duplicates_across_the_sheet_are_fatal() {
        let err = build_catalog_schema(&meta(), &[row("a"), row("a")]).unwrap_err();
        assert!(matches!(err, TemplateError::DuplicateParameters { .. }));
    }
}
