//! Typed parsing of row records into model rows and term tables.

use rde_model::{
    Category, ClassTerm, ClassTermTable, GeneralTerm, GeneralTermTable, OutputFlag, ParamType,
    ParameterRow, Result, RowOptions, SheetMeta, TemplateError,
};

use crate::layout::RowRecord;

/// A parsed key-value + table sheet: its metadata block plus the
/// output-enabled parameter rows in source order.
#[derive(Debug, Clone, Default)]
pub struct ParameterSheet {
    pub meta: SheetMeta,
    pub rows: Vec<ParameterRow>,
}

fn parse_f64(record: &RowRecord, name: &str, column: &str, document: &str) -> Result<Option<f64>> {
    match record.value(column) {
        Some(raw) => raw.trim().parse::<f64>().map(Some).map_err(|_| {
            TemplateError::InvalidCell {
                parameter: name.to_string(),
                column: column.to_string(),
                value: raw.to_string(),
                document: document.to_string(),
            }
        }),
        None => Ok(None),
    }
}

fn parse_usize(
    record: &RowRecord,
    name: &str,
    column: &str,
    document: &str,
) -> Result<Option<usize>> {
    match record.value(column) {
        Some(raw) => raw.trim().parse::<usize>().map(Some).map_err(|_| {
            TemplateError::InvalidCell {
                parameter: name.to_string(),
                column: column.to_string(),
                value: raw.to_string(),
                document: document.to_string(),
            }
        }),
        None => Ok(None),
    }
}

fn parse_i64(record: &RowRecord, name: &str, column: &str, document: &str) -> Result<Option<i64>> {
    match record.value(column) {
        Some(raw) => raw.trim().parse::<i64>().map(Some).map_err(|_| {
            TemplateError::InvalidCell {
                parameter: name.to_string(),
                column: column.to_string(),
                value: raw.to_string(),
                document: document.to_string(),
            }
        }),
        None => Ok(None),
    }
}

fn owned(record: &RowRecord, column: &str) -> Option<String> {
    record.value(column).map(str::to_string)
}

/// Parse one data row.
///
/// Returns `Ok(None)` for rows that never reach any artifact: missing
/// `parameter_name`, or output not switched `ON`. Everything else is
/// normalized at this boundary — flags become booleans, bounds become
/// options — so no text comparison leaks into the engine.
pub fn parameter_row_from_record(
    record: &RowRecord,
    document: &str,
) -> Result<Option<ParameterRow>> {
    let Some(name) = record.value("parameter_name") else {
        return Ok(None);
    };
    let name = name.to_string();

    let output = OutputFlag::parse(record.value("output"));
    if !output.is_on() {
        return Ok(None);
    }

    let keyword = record.value("type").unwrap_or_default();
    let ty = ParamType::parse(keyword).ok_or_else(|| TemplateError::UnexpectedType {
        parameter: name.clone(),
        keyword: keyword.to_string(),
        document: document.to_string(),
    })?;

    let row = ParameterRow {
        category: record.value("category").and_then(Category::parse),
        ty,
        format: owned(record, "format"),
        required: record.flag("required"),
        const_value: owned(record, "const"),
        default: owned(record, "default"),
        examples: owned(record, "examples"),
        enum_values: record
            .value("enum")
            .map(|raw| raw.split(',').map(str::to_string).collect()),
        minimum: parse_f64(record, &name, "minimum", document)?,
        maximum: parse_f64(record, &name, "maximum", document)?,
        exclusive_minimum: parse_f64(record, &name, "exclusiveMinimum", document)?,
        exclusive_maximum: parse_f64(record, &name, "exclusiveMaximum", document)?,
        min_length: parse_usize(record, &name, "minLength", document)?,
        max_length: parse_usize(record, &name, "maxLength", document)?,
        pattern: owned(record, "pattern"),
        label_ja: owned(record, "label/ja"),
        label_en: owned(record, "label/en"),
        name_ja: owned(record, "name/ja"),
        name_en: owned(record, "name/en"),
        description: owned(record, "description"),
        uri: owned(record, "uri"),
        unit: owned(record, "unit"),
        mode: owned(record, "mode"),
        variable: record.flag("variable"),
        original_name: owned(record, "original_name"),
        output,
        options: RowOptions {
            widget: owned(record, "options/widget"),
            rows: parse_i64(record, &name, "options/rows", document)?,
            unit: owned(record, "options/unit"),
            placeholder_ja: owned(record, "options/placeholder/ja"),
            placeholder_en: owned(record, "options/placeholder/en"),
        },
        term: owned(record, "term"),
        name,
    };
    Ok(Some(row))
}

/// Parse the general term dictionary records. Rows without a `key_name` are
/// junk and skipped.
pub fn general_terms_from_records(records: &[RowRecord]) -> GeneralTermTable {
    let entries = records
        .iter()
        .filter_map(|record| {
            let key_name = record.value("key_name")?.to_string();
            Some(GeneralTerm {
                key_name,
                term_id: record.value("term_id").unwrap_or_default().to_string(),
                name_ja: record
                    .value("dict.term.name_ja")
                    .unwrap_or_default()
                    .to_string(),
            })
        })
        .collect();
    GeneralTermTable { entries }
}

/// Parse the class-specific term dictionary records.
pub fn class_terms_from_records(records: &[RowRecord]) -> ClassTermTable {
    let entries = records
        .iter()
        .filter_map(|record| {
            let key_name = record.value("key_name")?.to_string();
            Some(ClassTerm {
                key_name,
                class_id: record
                    .value("sample_class_id")
                    .unwrap_or_default()
                    .to_string(),
                term_id: record.value("term_id").unwrap_or_default().to_string(),
                bind_name: record
                    .value("bind_class_and_term_ja")
                    .unwrap_or_default()
                    .to_string(),
            })
        })
        .collect();
    ClassTermTable { entries }
}
