//! Cell-level semantics shared by ingestion and the engine.
//!
//! A cell read from a workbook is `Option<String>`: `None` for a missing
//! cell, `Some` for stored text. Presence is stricter than `Some`: the
//! upstream exporter writes the literal marker `None` into blank cells, and
//! whitespace-only text does not count as data either.

use serde_json::{Number, Value};

use crate::row::ParamType;

/// Textual marker the upstream exporter emits for a blank cell.
pub const ABSENT_MARKER: &str = "None";

/// Whether a cell holds real data.
///
/// Boolean flag cells are handled by [`flag_is_true`] instead; this predicate
/// is for value-bearing cells.
pub fn is_present(cell: Option<&str>) -> bool {
    match cell {
        Some(value) => value != ABSENT_MARKER && !value.trim().is_empty(),
        None => false,
    }
}

/// The cell's raw text when [`is_present`], otherwise `None`.
pub fn present(cell: Option<&str>) -> Option<&str> {
    cell.filter(|value| is_present(Some(value)))
}

/// Whether a boolean flag cell is set.
///
/// Only the exact text `True` counts (case-sensitive); `False`, empty, the
/// absence marker, and anything else are all false.
pub fn flag_is_true(cell: Option<&str>) -> bool {
    cell == Some("True")
}

/// Coerce raw cell text to the row's declared type.
///
/// Returns `None` when the text cannot represent a value of that type;
/// callers turn that into a [`crate::TemplateError::Coercion`] with row
/// context. Boolean coercion never fails: only the exact text `True` maps to
/// `true`, everything else to `false`.
pub fn convert_value(ty: ParamType, raw: &str) -> Option<Value> {
    match ty {
        ParamType::String => Some(Value::String(raw.to_string())),
        ParamType::Integer => raw.trim().parse::<i64>().ok().map(Value::from),
        ParamType::Number => raw
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number),
        ParamType::Boolean => Some(Value::Bool(raw == "True")),
    }
}
