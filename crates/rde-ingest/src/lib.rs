//! Workbook ingestion for the RDE template generator.
//!
//! A workbook is an `.xlsx` file whose sheets use one of two layouts:
//!
//! - **key-value + table**: leading key→value rows up to a sentinel `header`
//!   row, then data rows whose category is carried forward from the first
//!   column (invoice and catalog requirement sheets);
//! - **simple table**: row 1 is the header, an optional designated row is
//!   dropped (definition sheet and the two term dictionary sheets).
//!
//! Reading stops at the row-record level; all cell semantics (presence,
//! flags, coercion) live in `rde-model`.

pub mod layout;
pub mod sheets;
pub mod workbook;

pub use layout::{KeyValueTable, RowRecord, SheetGrid, read_key_value_table, read_simple_table};
pub use sheets::{ParameterSheet, parameter_row_from_record};
pub use workbook::{
    CATALOG_SHEET, DEFINITION_SHEET, GENERAL_TERM_SHEET, INVOICE_SHEET, SPECIFIC_TERM_SHEET,
    Workbook,
};
