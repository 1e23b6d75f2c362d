//! `invoice.json` assembly.

use chrono::NaiveDate;
use indexmap::IndexMap;
use tracing::debug;

use rde_model::documents::{
    BasicBlock, GeneralAttribute, InvoiceExampleDocument, SampleExample, SpecificAttribute,
};
use rde_model::{Artifact, Category, ParameterRow, Result, TemplateError};

use crate::resolve::{NULL_SENTINEL, resolve_value};
use crate::terms::TermResolver;

use super::{INVOICE_CATEGORIES, guard_categories, output_rows, rows_in_category};

/// Canonical UUID-shaped placeholder for ids filled in at registration time.
const UUID_PLACEHOLDER: &str = "xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx";
/// Fixed length of the owner-id placeholder string.
const OWNER_ID_LEN: usize = 56;

/// Template tokens substituted by the downstream packaging step.
const DATA_NAME_TOKEN: &str = "%%data_name%%";
const EXPERIMENT_ID_TOKEN: &str = "%%experiment_id%%";
const DESCRIPTION_TOKEN: &str = "%%description%%";

fn owner_placeholder() -> String {
    "x".repeat(OWNER_ID_LEN)
}

/// Build the invoice example document: the fixed `basic` block, the resolved
/// `custom` values, and the `sample` block with its attribute arrays.
///
/// `date_submitted` is injected by the caller (normally the run date) so the
/// engine stays deterministic for identical input rows.
pub fn build_invoice_example(
    rows: &[ParameterRow],
    terms: &TermResolver<'_>,
    date_submitted: NaiveDate,
) -> Result<InvoiceExampleDocument> {
    let document = Artifact::InvoiceExample.file_name();
    let rows = output_rows(rows);
    guard_categories(&rows, &INVOICE_CATEGORIES, document)?;

    let basic = BasicBlock {
        date_submitted: date_submitted.format("%Y-%m-%d").to_string(),
        data_owner_id: owner_placeholder(),
        data_name: DATA_NAME_TOKEN.to_string(),
        instrument_id: UUID_PLACEHOLDER.to_string(),
        experiment_id: EXPERIMENT_ID_TOKEN.to_string(),
        description: DESCRIPTION_TOKEN.to_string(),
    };

    let custom_rows = rows_in_category(&rows, Category::Custom);
    let custom = if custom_rows.is_empty() {
        None
    } else {
        let mut values = IndexMap::new();
        for row in &custom_rows {
            values.insert(row.name.clone(), resolve_value(row, document)?);
        }
        Some(values)
    };

    let has_sample_rows = rows
        .iter()
        .any(|row| row.category.is_some_and(Category::is_sample));
    let sample = if has_sample_rows {
        Some(build_sample(&rows, terms, document)?)
    } else {
        None
    };

    debug!(
        custom = custom_rows.len(),
        sample = has_sample_rows,
        "assembled invoice example"
    );
    Ok(InvoiceExampleDocument {
        dataset_id: UUID_PLACEHOLDER.to_string(),
        basic,
        custom,
        sample,
    })
}

fn example_or_sentinel(row: &ParameterRow) -> String {
    row.examples
        .clone()
        .unwrap_or_else(|| NULL_SENTINEL.to_string())
}

fn build_sample(
    rows: &[&ParameterRow],
    terms: &TermResolver<'_>,
    document: &str,
) -> Result<SampleExample> {
    let mut sample = SampleExample {
        sample_id: String::new(),
        names: Vec::new(),
        owner_id: owner_placeholder(),
        composition: None,
        reference_url: None,
        related_samples: None,
        tags: None,
        description: None,
        general_attributes: None,
        specific_attributes: None,
    };

    for row in rows_in_category(rows, Category::SampleCommon) {
        let value = example_or_sentinel(row);
        match row.name.as_str() {
            "sample_name_(local_id)" => {
                sample.names = value.split(',').map(str::to_string).collect();
            }
            // ownerId keeps its seeded placeholder.
            "administrator_(affiliation)" => {}
            "chemical_formula_etc." => sample.composition = Some(value),
            "reference_url" => sample.reference_url = Some(value),
            "related_samples" => sample.related_samples = Some(value),
            "tags" => sample.tags = Some(value),
            "description" => sample.description = Some(value),
            _ => {
                return Err(TemplateError::UnknownSampleParameter {
                    parameter: row.name.clone(),
                    document: document.to_string(),
                });
            }
        }
    }

    let general_rows = rows_in_category(rows, Category::SampleGeneral);
    if !general_rows.is_empty() {
        let mut attributes = Vec::with_capacity(general_rows.len());
        for row in &general_rows {
            let entry = terms.general(row, document)?;
            attributes.push(GeneralAttribute {
                term_id: entry.term_id.clone(),
                value: example_or_sentinel(row),
            });
        }
        sample.general_attributes = Some(attributes);
    }

    let specific_rows = rows_in_category(rows, Category::SampleSpecific);
    if !specific_rows.is_empty() {
        let mut attributes = Vec::with_capacity(specific_rows.len());
        for row in &specific_rows {
            let entry = terms.specific(row, document)?;
            attributes.push(SpecificAttribute {
                class_id: entry.class_id.clone(),
                term_id: entry.term_id.clone(),
                value: example_or_sentinel(row),
            });
        }
        sample.specific_attributes = Some(attributes);
    }

    Ok(sample)
}
