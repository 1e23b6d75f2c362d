//! Per-parameter schema keyword population.

use serde_json::Value;

use rde_model::documents::{BilingualText, OptionsSchema, PlaceholderText, PropertySchema};
use rde_model::{ParameterRow, Result};

use crate::resolve::coerce;

/// How the `examples` keyword is emitted: the invoice schema wraps the
/// coerced value in a single-element array, the catalog schema emits it as a
/// scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExampleStyle {
    Listed,
    Scalar,
}

/// Build the schema entry for one row. Keywords whose source cell is absent
/// are omitted entirely — never emitted as null or an empty object.
pub fn property_schema(
    row: &ParameterRow,
    style: ExampleStyle,
    document: &str,
) -> Result<PropertySchema> {
    let examples = match row.examples.as_deref() {
        Some(raw) => {
            let value = coerce(row, raw, document)?;
            Some(match style {
                ExampleStyle::Listed => Value::Array(vec![value]),
                ExampleStyle::Scalar => value,
            })
        }
        None => None,
    };

    let default = match row.default.as_deref() {
        Some(raw) => Some(coerce(row, raw, document)?),
        None => None,
    };

    let const_value = match row.const_value.as_deref() {
        Some(raw) => Some(coerce(row, raw, document)?),
        None => None,
    };

    let enum_values = match row.enum_values.as_deref() {
        Some(members) => {
            let mut values = Vec::with_capacity(members.len());
            for member in members {
                values.push(coerce(row, member, document)?);
            }
            Some(values)
        }
        None => None,
    };

    Ok(PropertySchema {
        label: BilingualText::from_cells(row.label_ja.as_deref(), row.label_en.as_deref()),
        ty: row.ty.as_str().to_string(),
        format: row.format.clone(),
        description: row.description.clone(),
        examples,
        default,
        const_value,
        enum_values,
        options: options_schema(row),
        maximum: row.maximum,
        exclusive_maximum: row.exclusive_maximum,
        minimum: row.minimum,
        exclusive_minimum: row.exclusive_minimum,
        max_length: row.max_length,
        min_length: row.min_length,
        pattern: row.pattern.clone(),
    })
}

fn options_schema(row: &ParameterRow) -> Option<OptionsSchema> {
    let options = &row.options;
    if options.is_empty() {
        return None;
    }
    let placeholder = if options.placeholder_ja.is_some() || options.placeholder_en.is_some() {
        Some(PlaceholderText {
            ja: options.placeholder_ja.clone(),
            en: options.placeholder_en.clone(),
        })
    } else {
        None
    };
    Some(OptionsSchema {
        widget: options.widget.clone(),
        rows: options.rows,
        unit: options.unit.clone(),
        placeholder,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rde_model::{ParamType, ParameterRow, RowOptions, TemplateError};
    use serde_json::json;

    const DOC: &str = "invoice.schema.json";

    #[test]
    fn absent_cells_emit_no_keywords() {
        let row = ParameterRow::new("p", ParamType::String);
        let schema = property_schema(&row, ExampleStyle::Listed, DOC).expect("schema");
        let value = serde_json::to_value(&schema).expect("serialize");
        assert_eq!(
            value,
            json!({"label": {"ja": "", "en": ""}, "type": "string"})
        );
    }

    #[test]
    fn example_style_controls_the_examples_shape() {
        let mut row = ParameterRow::new("p", ParamType::Integer);
        row.examples = Some("7".to_string());

        let listed = property_schema(&row, ExampleStyle::Listed, DOC).expect("schema");
        assert_eq!(listed.examples, Some(json!([7])));

        let scalar = property_schema(&row, ExampleStyle::Scalar, DOC).expect("schema");
        assert_eq!(scalar.examples, Some(json!(7)));
    }

    #[test]
    fn enum_and_const_are_coerced_per_member() {
        let mut row = ParameterRow::new("p", ParamType::Integer);
        row.enum_values = Some(vec!["1".to_string(), "2".to_string()]);
        row.const_value = Some("2".to_string());
        let schema = property_schema(&row, ExampleStyle::Scalar, DOC).expect("schema");
        assert_eq!(schema.enum_values, Some(vec![json!(1), json!(2)]));
        assert_eq!(schema.const_value, Some(json!(2)));
    }

    #[test]
    fn uncoercible_enum_member_is_fatal() {
        let mut row = ParameterRow::new("p", ParamType::Integer);
        row.enum_values = Some(vec!["1".to_string(), "x".to_string()]);
        let err = property_schema(&row, ExampleStyle::Scalar, DOC).unwrap_err();
        assert!(matches!(err, TemplateError::Coercion { .. }));
    }

    #[test]
    fn zero_bounds_are_emitted() {
        let mut row = ParameterRow::new("p", ParamType::Number);
        row.minimum = Some(0.0);
        let schema = property_schema(&row, ExampleStyle::Scalar, DOC).expect("schema");
        let value = serde_json::to_value(&schema).expect("serialize");
        assert_eq!(value["minimum"], json!(0.0));
    }

    #[test]
    fn options_block_appears_only_when_any_option_is_set() {
        let mut row = ParameterRow::new("p", ParamType::String);
        let schema = property_schema(&row, ExampleStyle::Listed, DOC).expect("schema");
        assert!(schema.options.is_none());

        row.options = RowOptions {
            widget: Some("textarea".to_string()),
            rows: Some(4),
            unit: None,
            placeholder_ja: Some("例を入力".to_string()),
            placeholder_en: None,
        };
        let schema = property_schema(&row, ExampleStyle::Listed, DOC).expect("schema");
        let value = serde_json::to_value(&schema).expect("serialize");
        assert_eq!(
            value["options"],
            json!({"widget": "textarea", "rows": 4, "placeholder": {"ja": "例を入力"}})
        );
    }
}
