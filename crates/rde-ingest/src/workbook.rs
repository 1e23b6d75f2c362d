//! Workbook access: sheet lookup and typed sheet readers.

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use umya_spreadsheet::{Spreadsheet, Worksheet, reader::xlsx};

use rde_model::{
    Artifact, ClassTermTable, GeneralTermTable, ParameterRow, Result, TemplateError,
};

use crate::layout::{SheetGrid, read_key_value_table, read_simple_table};
use crate::sheets::{
    ParameterSheet, class_terms_from_records, general_terms_from_records,
    parameter_row_from_record,
};

/// Requirement-definition sheet for `metadata-def.json` (simple table; the
/// localized label row below the header is dropped).
pub const DEFINITION_SHEET: &str = "要件定義(metadata-def.json)";
/// Requirement-definition sheet for the invoice artifacts.
pub const INVOICE_SHEET: &str = "要件定義(invoice.schema.json)";
/// Requirement-definition sheet for the catalog artifacts.
pub const CATALOG_SHEET: &str = "要件定義(catalog.schema.json)";
/// General sample term dictionary.
pub const GENERAL_TERM_SHEET: &str = "sample.general_sample_term";
/// Class-specific sample term dictionary.
pub const SPECIFIC_TERM_SHEET: &str = "sample.specific_sample_term";

/// Row index (1-based) of the localized label row on the definition sheet.
const DEFINITION_LABEL_ROW: usize = 2;

/// An opened workbook. Sheets are read lazily; a missing sheet is reported
/// as `None` so the caller can skip the dependent artifact.
pub struct Workbook {
    book: Spreadsheet,
    pub path: PathBuf,
    /// File stem, used to name the output folder.
    pub stem: String,
}

impl Workbook {
    pub fn open(path: &Path) -> Result<Self> {
        let book = xlsx::read(path).map_err(|error| TemplateError::Workbook {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| "workbook".to_string());
        Ok(Self {
            book,
            path: path.to_path_buf(),
            stem,
        })
    }

    fn grid(&self, sheet: &str) -> Option<SheetGrid> {
        let Some(worksheet) = self.book.get_sheet_by_name(sheet) else {
            info!(sheet, "sheet not found, skipping dependent artifacts");
            return None;
        };
        Some(grid_from_sheet(worksheet))
    }

    /// Rows of the definition sheet, or `None` when the sheet is absent.
    pub fn definition_rows(&self) -> Result<Option<Vec<ParameterRow>>> {
        let Some(grid) = self.grid(DEFINITION_SHEET) else {
            return Ok(None);
        };
        let records = read_simple_table(&grid, Some(DEFINITION_LABEL_ROW));
        let mut rows = Vec::new();
        for record in &records {
            if let Some(row) =
                parameter_row_from_record(record, Artifact::Definition.file_name())?
            {
                rows.push(row);
            }
        }
        debug!(sheet = DEFINITION_SHEET, rows = rows.len(), "parsed sheet");
        Ok(Some(rows))
    }

    /// Metadata and rows of the invoice requirement sheet.
    pub fn invoice_sheet(&self) -> Result<Option<ParameterSheet>> {
        self.parameter_sheet(INVOICE_SHEET, Artifact::InvoiceSchema.file_name())
    }

    /// Metadata and rows of the catalog requirement sheet.
    pub fn catalog_sheet(&self) -> Result<Option<ParameterSheet>> {
        self.parameter_sheet(CATALOG_SHEET, Artifact::CatalogSchema.file_name())
    }

    fn parameter_sheet(&self, sheet: &str, document: &str) -> Result<Option<ParameterSheet>> {
        let Some(grid) = self.grid(sheet) else {
            return Ok(None);
        };
        let table = read_key_value_table(&grid);
        let mut rows = Vec::new();
        for record in &table.records {
            if let Some(row) = parameter_row_from_record(record, document)? {
                rows.push(row);
            }
        }
        debug!(sheet, rows = rows.len(), "parsed sheet");
        Ok(Some(ParameterSheet {
            meta: table.meta,
            rows,
        }))
    }

    /// The general sample term dictionary, or `None` when absent.
    pub fn general_terms(&self) -> Option<GeneralTermTable> {
        let grid = self.grid(GENERAL_TERM_SHEET)?;
        let records = read_simple_table(&grid, None);
        Some(general_terms_from_records(&records))
    }

    /// The class-specific sample term dictionary, or `None` when absent.
    pub fn specific_terms(&self) -> Option<ClassTermTable> {
        let grid = self.grid(SPECIFIC_TERM_SHEET)?;
        let records = read_simple_table(&grid, None);
        Some(class_terms_from_records(&records))
    }
}

fn grid_from_sheet(worksheet: &Worksheet) -> SheetGrid {
    let (max_col, max_row) = worksheet.get_highest_column_and_row();
    let mut rows = Vec::with_capacity(max_row as usize);
    for row in 1..=max_row {
        let mut cells = Vec::with_capacity(max_col as usize);
        for col in 1..=max_col {
            let text = worksheet
                .get_cell((col, row))
                .map(|cell| cell.get_value().to_string())
                .unwrap_or_default();
            cells.push(text);
        }
        rows.push(cells);
    }
    SheetGrid::new(rows)
}
