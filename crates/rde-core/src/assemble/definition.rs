//! `metadata-def.json` assembly.

use tracing::debug;

use rde_model::documents::{BilingualText, DefinitionDocument, DefinitionEntry, DefinitionSchema};
use rde_model::{Artifact, ParameterRow, Result};

use crate::dedupe::ensure_unique_parameters;
use crate::resolve::coerce;

use super::output_rows;

/// Build the parameter definition document: one entry per output-enabled
/// row, keyed by parameter name, with a sequential display order.
pub fn build_definition(rows: &[ParameterRow]) -> Result<DefinitionDocument> {
    let document = Artifact::Definition.file_name();
    let rows = output_rows(rows);
    ensure_unique_parameters(&rows, "metadata-def", document)?;

    let mut definition = DefinitionDocument::new();
    for (index, row) in rows.iter().enumerate() {
        let default = match row.default.as_deref() {
            Some(raw) => Some(coerce(row, raw, document)?),
            None => None,
        };
        definition.insert(
            row.name.clone(),
            DefinitionEntry {
                name: BilingualText::from_cells(row.name_ja.as_deref(), row.name_en.as_deref()),
                schema: DefinitionSchema {
                    ty: row.ty.as_str().to_string(),
                    format: row.format.clone(),
                },
                order: index as u32 + 1,
                unit: row.unit.clone(),
                description: row.description.clone(),
                uri: row.uri.clone(),
                mode: row.mode.clone(),
                variable: row.variable.then_some(1),
                default,
                original_name: row.original_name.clone(),
            },
        );
    }
    debug!(entries = definition.len(), "assembled definition document");
    Ok(definition)
}
