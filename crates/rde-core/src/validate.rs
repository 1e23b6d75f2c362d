//! Constraint validation for resolved values.
//!
//! Bound presence is option-typed: a bound of zero is a present bound. Range
//! semantics reject `v < minimum`, `v <= exclusiveMinimum`, `maximum < v`,
//! and `exclusiveMaximum <= v`. Pattern matching is prefix-anchored: the
//! regex must match starting at offset 0, but need not consume the whole
//! string.

use regex::Regex;
use serde_json::Value;

use rde_model::{ParamType, ParameterRow, Result, TemplateError};

/// Apply the row's numeric or string constraints to a resolved value.
/// Values of other types (booleans, the null sentinel for a numeric row)
/// have nothing to check.
pub fn check_constraints(row: &ParameterRow, value: &Value, document: &str) -> Result<()> {
    if row.ty.is_numeric()
        && let Some(numeric) = value.as_f64()
    {
        check_numeric(row, numeric, document)?;
    }
    if row.ty == ParamType::String
        && let Some(text) = value.as_str()
    {
        check_string(row, text, document)?;
    }
    Ok(())
}

fn check_numeric(row: &ParameterRow, value: f64, document: &str) -> Result<()> {
    let below_minimum = row.minimum.is_some_and(|bound| value < bound);
    let not_above_exclusive_minimum = row.exclusive_minimum.is_some_and(|bound| value <= bound);
    let above_maximum = row.maximum.is_some_and(|bound| bound < value);
    let not_below_exclusive_maximum = row.exclusive_maximum.is_some_and(|bound| bound <= value);

    if below_minimum
        || not_above_exclusive_minimum
        || above_maximum
        || not_below_exclusive_maximum
    {
        return Err(TemplateError::RangeViolation {
            parameter: row.name.clone(),
            value,
            bounds: describe_numeric_bounds(row),
            document: document.to_string(),
        });
    }
    Ok(())
}

fn check_string(row: &ParameterRow, text: &str, document: &str) -> Result<()> {
    let length = text.chars().count();
    let too_short = row.min_length.is_some_and(|bound| length < bound);
    let too_long = row.max_length.is_some_and(|bound| bound < length);
    if too_short || too_long {
        return Err(TemplateError::LengthViolation {
            parameter: row.name.clone(),
            length,
            bounds: describe_length_bounds(row),
            document: document.to_string(),
        });
    }

    if let Some(pattern) = row.pattern.as_deref() {
        let regex = Regex::new(pattern).map_err(|error| TemplateError::InvalidPattern {
            parameter: row.name.clone(),
            pattern: pattern.to_string(),
            message: error.to_string(),
        })?;
        // Prefix match, not full-string: a match anywhere later in the text
        // does not count, a match that stops early does.
        let matches_prefix = regex.find(text).is_some_and(|found| found.start() == 0);
        if !matches_prefix {
            return Err(TemplateError::PatternMismatch {
                parameter: row.name.clone(),
                value: text.to_string(),
                pattern: pattern.to_string(),
                document: document.to_string(),
            });
        }
    }
    Ok(())
}

fn describe_numeric_bounds(row: &ParameterRow) -> String {
    let mut parts = Vec::new();
    if let Some(bound) = row.minimum {
        parts.push(format!("minimum={bound}"));
    }
    if let Some(bound) = row.exclusive_minimum {
        parts.push(format!("exclusiveMinimum={bound}"));
    }
    if let Some(bound) = row.maximum {
        parts.push(format!("maximum={bound}"));
    }
    if let Some(bound) = row.exclusive_maximum {
        parts.push(format!("exclusiveMaximum={bound}"));
    }
    parts.join(", ")
}

fn describe_length_bounds(row: &ParameterRow) -> String {
    let mut parts = Vec::new();
    if let Some(bound) = row.min_length {
        parts.push(format!("minLength={bound}"));
    }
    if let Some(bound) = row.max_length {
        parts.push(format!("maxLength={bound}"));
    }
    parts.join(", ")
}
