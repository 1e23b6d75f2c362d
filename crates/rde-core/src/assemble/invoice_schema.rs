//! `invoice.schema.json` assembly.

use tracing::debug;

use rde_model::documents::{
    AttributeArraySchema, BilingualText, CustomBlock, GeneralTermConstraint, InvoiceProperties,
    InvoiceSchemaDocument, SampleAttributeSchemas, SampleSchemaBlock, SpecificTermConstraint,
};
use rde_model::{Artifact, Category, ParameterRow, Result, SheetMeta};

use crate::schema::{ExampleStyle, property_schema};
use crate::terms::TermResolver;

use super::{INVOICE_CATEGORIES, guard_categories, output_rows, rows_in_category};

/// Build the invoice schema document: root metadata, the `custom` block with
/// per-parameter keyword population, and the `sample` block whose attribute
/// arrays pin term ids resolved from the dictionaries.
pub fn build_invoice_schema(
    meta: &SheetMeta,
    rows: &[ParameterRow],
    terms: &TermResolver<'_>,
) -> Result<InvoiceSchemaDocument> {
    let document = Artifact::InvoiceSchema.file_name();
    let rows = output_rows(rows);
    guard_categories(&rows, &INVOICE_CATEGORIES, document)?;

    let mut required = Vec::new();
    let mut properties = InvoiceProperties::default();

    let custom_rows = rows_in_category(&rows, Category::Custom);
    if !custom_rows.is_empty() {
        required.push("custom".to_string());
        let mut block = CustomBlock {
            ty: "object",
            label: BilingualText {
                ja: "固有情報".to_string(),
                en: "Custom Information".to_string(),
            },
            required: Vec::new(),
            properties: indexmap::IndexMap::new(),
        };
        for row in &custom_rows {
            if row.required {
                block.required.push(row.name.clone());
            }
            block.properties.insert(
                row.name.clone(),
                property_schema(row, ExampleStyle::Listed, document)?,
            );
        }
        properties.custom = Some(block);
    }

    let has_sample_rows = rows
        .iter()
        .any(|row| row.category.is_some_and(Category::is_sample));
    if has_sample_rows {
        required.push("sample".to_string());
        let mut attributes = SampleAttributeSchemas::default();

        let general_rows = rows_in_category(&rows, Category::SampleGeneral);
        if !general_rows.is_empty() {
            let mut items = Vec::with_capacity(general_rows.len());
            for row in &general_rows {
                let entry = terms.general(row, document)?;
                items.push(GeneralTermConstraint::new(entry.term_id.clone()));
            }
            attributes.general_attributes = Some(AttributeArraySchema::new(items));
        }

        let specific_rows = rows_in_category(&rows, Category::SampleSpecific);
        if !specific_rows.is_empty() {
            let mut items = Vec::with_capacity(specific_rows.len());
            for row in &specific_rows {
                let entry = terms.specific(row, document)?;
                items.push(SpecificTermConstraint::new(
                    entry.class_id.clone(),
                    entry.term_id.clone(),
                ));
            }
            attributes.specific_attributes = Some(AttributeArraySchema::new(items));
        }

        properties.sample = Some(SampleSchemaBlock {
            ty: "object",
            label: BilingualText {
                ja: "試料情報".to_string(),
                en: "Sample Information".to_string(),
            },
            properties: attributes,
        });
    }

    debug!(
        custom = custom_rows.len(),
        sample = has_sample_rows,
        "assembled invoice schema"
    );
    Ok(InvoiceSchemaDocument {
        schema: meta.value_or_default("$schema"),
        id: meta.value_or_default("$id"),
        description: meta.get("description").map(str::to_string),
        ty: "object",
        required,
        properties,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rde_model::{ClassTerm, ClassTermTable, GeneralTerm, GeneralTermTable, ParamType, TemplateError};
    use serde_json::json;

    fn dictionaries() -> (GeneralTermTable, ClassTermTable) {
        let general = GeneralTermTable {
            entries: vec![GeneralTerm {
                key_name: "sample.general.temperature".to_string(),
                term_id: "GT1".to_string(),
                name_ja: "温度".to_string(),
            }],
        };
        let specific = ClassTermTable {
            entries: vec![ClassTerm {
                key_name: "sample.specific.alloy".to_string(),
                class_id: "C1".to_string(),
                term_id: "ST1".to_string(),
                bind_name: "合金/組成".to_string(),
            }],
        };
        (general, specific)
    }

    fn meta() -> SheetMeta {
        let mut meta = SheetMeta::default();
        meta.insert("$schema", "https://json-schema.org/draft/2020-12/schema");
        meta.insert("$id", "https://example.com/invoice.schema.json");
        meta
    }

    fn custom_row(name: &str) -> ParameterRow {
        let mut row = ParameterRow::new(name, ParamType::String);
        row.category = Some(Category::Custom);
        row
    }

    fn general_row(name: &str, term: &str) -> ParameterRow {
        let mut row = ParameterRow::new(name, ParamType::String);
        row.category = Some(Category::SampleGeneral);
        row.term = Some(term.to_string());
        row
    }

    fn specific_row(name: &str, term: &str) -> ParameterRow {
        let mut row = ParameterRow::new(name, ParamType::String);
        row.category = Some(Category::SampleSpecific);
        row.term = Some(term.to_string());
        row
    }

    #[test]
    fn builds_custom_and_sample_blocks() {
        let (general, specific) = dictionaries();
        let terms = TermResolver::new(&general, &specific).expect("resolver");

        let mut required_row = custom_row("voltage");
        required_row.required = true;
        let rows = vec![
            required_row,
            custom_row("comment"),
            general_row("temperature", "温度"),
            specific_row("alloy", "合金/組成"),
        ];

        let schema = build_invoice_schema(&meta(), &rows, &terms).expect("schema");
        let value = serde_json::to_value(&schema).expect("serialize");

        assert_eq!(value["required"], json!(["custom", "sample"]));
        assert_eq!(value["properties"]["custom"]["required"], json!(["voltage"]));
        assert_eq!(
            value["properties"]["custom"]["label"],
            json!({"ja": "固有情報", "en": "Custom Information"})
        );
        assert_eq!(
            value["properties"]["sample"]["properties"]["generalAttributes"],
            json!({
                "type": "array",
                "items": [{
                    "type": "object",
                    "required": ["termId"],
                    "properties": {"termId": {"const": "GT1"}}
                }]
            })
        );
        assert_eq!(
            value["properties"]["sample"]["properties"]["specificAttributes"]["items"][0]
                ["properties"],
            json!({"classId": {"const": "C1"}, "termId": {"const": "ST1"}})
        );
    }

    #[test]
    fn no_rows_yields_empty_required_and_properties() {
        let (general, specific) = dictionaries();
        let terms = TermResolver::new(&general, &specific).expect("resolver");
        let schema = build_invoice_schema(&meta(), &[], &terms).expect("schema");
        let value = serde_json::to_value(&schema).expect("serialize");
        assert_eq!(value["required"], json!([]));
        assert_eq!(value["properties"], json!({}));
    }

    #[test]
    fn sample_common_alone_still_emits_the_sample_block() {
        let (general, specific) = dictionaries();
        let terms = TermResolver::new(&general, &specific).expect("resolver");
        let mut row = ParameterRow::new("tags", ParamType::String);
        row.category = Some(Category::SampleCommon);

        let schema = build_invoice_schema(&meta(), &[row], &terms).expect("schema");
        let value = serde_json::to_value(&schema).expect("serialize");
        assert_eq!(value["required"], json!(["sample"]));
        assert_eq!(value["properties"]["sample"]["properties"], json!({}));
        assert!(value["properties"].get("custom").is_none());
    }

    #[test]
    fn unresolved_term_is_fatal() {
        let (general, specific) = dictionaries();
        let terms = TermResolver::new(&general, &specific).expect("resolver");
        let rows = vec![general_row("temperature", "湿度")];
        let err = build_invoice_schema(&meta(), &rows, &terms).unwrap_err();
        assert!(matches!(err, TemplateError::UnresolvedTerm { .. }));
    }

    #[test]
    fn duplicate_names_within_a_category_are_fatal() {
        let (general, specific) = dictionaries();
        let terms = TermResolver::new(&general, &specific).expect("resolver");
        let rows = vec![custom_row("a"), custom_row("a")];
        let err = build_invoice_schema(&meta(), &rows, &terms).unwrap_err();
        assert!(matches!(
            err,
            TemplateError::DuplicateParameters { ref scope, .. } if scope == "custom"
        ));
    }

    #[test]
    fn same_name_in_different_categories_is_allowed() {
        let (general, specific) = dictionaries();
        let terms = TermResolver::new(&general, &specific).expect("resolver");
        let rows = vec![custom_row("temperature"), general_row("temperature", "温度")];
        assert!(build_invoice_schema(&meta(), &rows, &terms).is_ok());
    }
}
