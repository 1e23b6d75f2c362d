//! Per-workbook pipeline: the five generation steps in fixed order.
//!
//! Three steps are fail-fast — an error aborts the rest of that workbook's
//! run. The two example generators are fail-soft: their errors become
//! recorded diagnostics and processing continues. The two policies are kept
//! as distinct channels here rather than scattered catches at call sites.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, info_span, warn};

use rde_core::{
    TermResolver, build_catalog_example, build_catalog_schema, build_definition,
    build_invoice_example, build_invoice_schema,
};
use rde_ingest::Workbook;
use rde_model::Artifact;
use rde_output::{output_dir_for, write_artifact};

/// Status of one artifact after a workbook run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactStatus {
    Written,
    /// Source sheet missing; not an error.
    Skipped,
    /// Fail-soft step error, recorded and skipped over.
    Failed,
}

/// Result of processing one workbook.
#[derive(Debug, Clone, Default)]
pub struct WorkbookOutcome {
    pub name: String,
    pub output_dir: Option<PathBuf>,
    pub statuses: BTreeMap<Artifact, ArtifactStatus>,
    /// Captured diagnostics from the fail-soft steps.
    pub soft_failures: Vec<(Artifact, String)>,
}

impl WorkbookOutcome {
    pub fn status(&self, artifact: Artifact) -> Option<ArtifactStatus> {
        self.statuses.get(&artifact).copied()
    }

    fn mark(&mut self, artifact: Artifact, status: ArtifactStatus) {
        self.statuses.insert(artifact, status);
    }

    fn soft_fail(&mut self, artifact: Artifact, error: &anyhow::Error) {
        warn!(artifact = %artifact, error = %error, "artifact generation failed, continuing");
        self.mark(artifact, ArtifactStatus::Failed);
        self.soft_failures.push((artifact, error.to_string()));
    }
}

/// Run the five generation steps for one workbook.
pub fn run_workbook(path: &Path, date_submitted: NaiveDate) -> Result<WorkbookOutcome> {
    let workbook = Workbook::open(path)?;
    let span = info_span!("workbook", name = %workbook.stem);
    let _guard = span.enter();
    info!(path = %path.display(), "processing workbook");

    let output_dir = output_dir_for(path, &workbook.stem)?;
    let mut outcome = WorkbookOutcome {
        name: workbook.stem.clone(),
        output_dir: Some(output_dir.clone()),
        ..WorkbookOutcome::default()
    };

    // Step 1: definition document (fail-fast).
    match workbook.definition_rows()? {
        Some(rows) => {
            let document = build_definition(&rows)?;
            write_artifact(&output_dir, Artifact::Definition, &document)?;
            outcome.mark(Artifact::Definition, ArtifactStatus::Written);
        }
        None => outcome.mark(Artifact::Definition, ArtifactStatus::Skipped),
    }

    // Steps 2 and 3: invoice schema (fail-fast) and example (fail-soft).
    // Both need the invoice sheet plus the two term dictionaries.
    let invoice = workbook.invoice_sheet()?;
    let general = workbook.general_terms();
    let specific = workbook.specific_terms();
    match (invoice, general, specific) {
        (Some(sheet), Some(general), Some(specific)) => {
            let terms = TermResolver::new(&general, &specific)?;

            let document = build_invoice_schema(&sheet.meta, &sheet.rows, &terms)?;
            write_artifact(&output_dir, Artifact::InvoiceSchema, &document)?;
            outcome.mark(Artifact::InvoiceSchema, ArtifactStatus::Written);

            let result = build_invoice_example(&sheet.rows, &terms, date_submitted)
                .map_err(anyhow::Error::from)
                .and_then(|document| {
                    write_artifact(&output_dir, Artifact::InvoiceExample, &document).map(|_| ())
                });
            match result {
                Ok(()) => outcome.mark(Artifact::InvoiceExample, ArtifactStatus::Written),
                Err(error) => outcome.soft_fail(Artifact::InvoiceExample, &error),
            }
        }
        _ => {
            outcome.mark(Artifact::InvoiceSchema, ArtifactStatus::Skipped);
            outcome.mark(Artifact::InvoiceExample, ArtifactStatus::Skipped);
        }
    }

    // Steps 4 and 5: catalog schema (fail-fast) and example (fail-soft).
    match workbook.catalog_sheet()? {
        Some(sheet) => {
            let document = build_catalog_schema(&sheet.meta, &sheet.rows)?;
            write_artifact(&output_dir, Artifact::CatalogSchema, &document)?;
            outcome.mark(Artifact::CatalogSchema, ArtifactStatus::Written);

            let result = build_catalog_example(&sheet.meta, &sheet.rows)
                .map_err(anyhow::Error::from)
                .and_then(|document| {
                    write_artifact(&output_dir, Artifact::CatalogExample, &document).map(|_| ())
                });
            match result {
                Ok(()) => outcome.mark(Artifact::CatalogExample, ArtifactStatus::Written),
                Err(error) => outcome.soft_fail(Artifact::CatalogExample, &error),
            }
        }
        None => {
            outcome.mark(Artifact::CatalogSchema, ArtifactStatus::Skipped);
            outcome.mark(Artifact::CatalogExample, ArtifactStatus::Skipped);
        }
    }

    info!("finished workbook");
    Ok(outcome)
}

/// Every workbook file in `dir`, sorted by name. Excel lock files (`~$…`)
/// are ignored.
pub fn discover_workbooks(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    let entries =
        fs::read_dir(dir).with_context(|| format!("read directory {}", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("read directory {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_xlsx = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"));
        let is_lock_file = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with("~$"));
        if is_xlsx && !is_lock_file {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}
