//! Value resolution: pick the value a row contributes to an example
//! document, validate it, and coerce it to the declared type.

use serde_json::Value;

use rde_model::{ParamType, ParameterRow, Result, TemplateError, convert_value};

use crate::datetime::canonical_date;
use crate::validate::check_constraints;

/// Literal text standing in for "no value" in example documents.
///
/// This is a wire contract, not a JSON null: consumers rely on the key being
/// present with this exact string, so it must never be replaced with a real
/// null or an absent key.
pub const NULL_SENTINEL: &str = "null";

/// Coerce raw text to the row's declared type, with row context on failure.
pub fn coerce(row: &ParameterRow, raw: &str, document: &str) -> Result<Value> {
    convert_value(row.ty, raw).ok_or_else(|| TemplateError::Coercion {
        parameter: row.name.clone(),
        value: raw.to_string(),
        expected: row.ty,
        document: document.to_string(),
    })
}

/// Resolve the value a row contributes to an example document.
///
/// Resolution order: the `examples` cell when present, else the `default`
/// cell, else nothing. A required row with nothing resolved is fatal, as is
/// a const or enum mismatch (both compared on raw text, before coercion).
/// A resolved value is coerced to the declared type, date-canonicalized when
/// the row is a string with `format = "date"`, and checked against the
/// row's numeric/string constraints. With nothing resolved and the row not
/// required, the [`NULL_SENTINEL`] string is emitted.
pub fn resolve_value(row: &ParameterRow, document: &str) -> Result<Value> {
    let raw = row.examples.as_deref().or(row.default.as_deref());

    if row.required && raw.is_none() {
        return Err(TemplateError::RequiredMissing {
            parameter: row.name.clone(),
            document: document.to_string(),
        });
    }

    if let Some(expected) = row.const_value.as_deref()
        && raw != Some(expected)
    {
        return Err(TemplateError::ConstMismatch {
            parameter: row.name.clone(),
            expected: expected.to_string(),
            actual: raw.unwrap_or(NULL_SENTINEL).to_string(),
            document: document.to_string(),
        });
    }

    if let Some(members) = row.enum_values.as_deref()
        && !raw.is_some_and(|value| members.iter().any(|member| member == value))
    {
        return Err(TemplateError::EnumMismatch {
            parameter: row.name.clone(),
            value: raw.unwrap_or(NULL_SENTINEL).to_string(),
            allowed: members.join(","),
            document: document.to_string(),
        });
    }

    let Some(raw) = raw else {
        return Ok(Value::String(NULL_SENTINEL.to_string()));
    };

    let mut value = coerce(row, raw, document)?;

    if row.ty == ParamType::String
        && row.format.as_deref() == Some("date")
        && let Some(text) = value.as_str()
    {
        let canonical = canonical_date(text).ok_or_else(|| TemplateError::InvalidDate {
            parameter: row.name.clone(),
            value: text.to_string(),
            document: document.to_string(),
        })?;
        value = Value::String(canonical);
    }

    check_constraints(row, &value, document)?;
    Ok(value)
}
