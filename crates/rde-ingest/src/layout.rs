//! The two sheet layouts, independent of any spreadsheet backend.

use indexmap::IndexMap;

use rde_model::{SheetMeta, flag_is_true, present};

/// Sentinel first-cell text marking the column header row of a
/// key-value + table sheet.
pub const HEADER_SENTINEL: &str = "header";

/// Decorative bilingual label row found below the sentinel in the legacy
/// workbooks; skipped.
pub const HEADER_DISPLAY_MARKER: &str = "ヘッダー";

/// Raw cell grid of one sheet. `rows[0]` is sheet row 1; missing cells are
/// empty strings.
#[derive(Debug, Clone, Default)]
pub struct SheetGrid {
    pub rows: Vec<Vec<String>>,
}

impl SheetGrid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }
}

/// One data row as an ordered column-name → cell mapping. Missing and empty
/// cells are `None`; placeholder markers are kept as text and filtered by
/// the presence predicate.
#[derive(Debug, Clone, Default)]
pub struct RowRecord {
    cells: IndexMap<String, Option<String>>,
}

impl RowRecord {
    pub fn insert(&mut self, column: impl Into<String>, cell: Option<String>) {
        self.cells.insert(column.into(), cell);
    }

    /// The stored cell text, if any, without presence filtering.
    pub fn raw(&self, column: &str) -> Option<&str> {
        self.cells.get(column).and_then(Option::as_deref)
    }

    /// The cell text when it holds real data.
    pub fn value(&self, column: &str) -> Option<&str> {
        present(self.raw(column))
    }

    /// Boolean flag cell: true only for the exact text `True`.
    pub fn flag(&self, column: &str) -> bool {
        flag_is_true(self.raw(column))
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }
}

/// Parsed key-value + table sheet.
#[derive(Debug, Clone, Default)]
pub struct KeyValueTable {
    pub meta: SheetMeta,
    pub records: Vec<RowRecord>,
}

fn cell_to_option(cell: &str) -> Option<String> {
    if cell.is_empty() {
        None
    } else {
        Some(cell.to_string())
    }
}

fn row_is_empty(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

/// Read a key-value + table sheet.
///
/// Rows before the sentinel are key→value metadata pairs (first cell →
/// second cell). The sentinel row's remaining cells name the data columns;
/// each data row's category is its first cell when non-empty, otherwise the
/// most recent non-empty category above it. Data cells are keyed by header
/// name starting from the second column; the carried category is exposed
/// under the `category` column.
pub fn read_key_value_table(grid: &SheetGrid) -> KeyValueTable {
    let mut meta = SheetMeta::default();
    let mut header: Option<Vec<String>> = None;
    let mut records = Vec::new();
    let mut category = String::new();

    for row in &grid.rows {
        let first = row.first().map(String::as_str).unwrap_or("").trim();
        match &header {
            None => {
                if first.is_empty() {
                    continue;
                }
                if first == HEADER_SENTINEL {
                    header = Some(
                        row.iter()
                            .skip(1)
                            .map(|cell| cell.trim().to_string())
                            .collect(),
                    );
                } else {
                    meta.insert(first, row.get(1).map(String::as_str).unwrap_or(""));
                }
            }
            Some(columns) => {
                if first == HEADER_DISPLAY_MARKER || row_is_empty(row) {
                    continue;
                }
                if !first.is_empty() {
                    category = first.to_string();
                }
                let mut record = RowRecord::default();
                record.insert("category", cell_to_option(&category));
                for (idx, column) in columns.iter().enumerate() {
                    if column.is_empty() {
                        continue;
                    }
                    let cell = row.get(idx + 1).map(String::as_str).unwrap_or("");
                    record.insert(column.clone(), cell_to_option(cell));
                }
                records.push(record);
            }
        }
    }

    KeyValueTable { meta, records }
}

/// Read a simple table sheet: row 1 is the header, `skip_row` (1-based) is
/// dropped, fully empty rows are skipped.
pub fn read_simple_table(grid: &SheetGrid, skip_row: Option<usize>) -> Vec<RowRecord> {
    let mut header: Vec<String> = Vec::new();
    let mut records = Vec::new();

    for (idx0, row) in grid.rows.iter().enumerate() {
        let index = idx0 + 1;
        if index == 1 {
            header = row.iter().map(|cell| cell.trim().to_string()).collect();
            continue;
        }
        if Some(index) == skip_row || row_is_empty(row) {
            continue;
        }
        let mut record = RowRecord::default();
        for (idx, column) in header.iter().enumerate() {
            if column.is_empty() {
                continue;
            }
            let cell = row.get(idx).map(String::as_str).unwrap_or("");
            record.insert(column.clone(), cell_to_option(cell));
        }
        records.push(record);
    }

    records
}
