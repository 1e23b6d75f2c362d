use std::path::PathBuf;

use thiserror::Error;

use crate::row::ParamType;

/// Domain error for template generation.
///
/// Every validation or resolution failure carries the parameter name, the
/// offending value, and the document being generated, so a workbook author
/// can find the broken cell from the message alone.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to open workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    #[error(
        "type must be one of boolean/integer/number/string, got {keyword:?} \
         (parameter_name={parameter}, document={document})"
    )]
    UnexpectedType {
        parameter: String,
        keyword: String,
        document: String,
    },

    #[error(
        "cell {column}={value:?} could not be parsed \
         (parameter_name={parameter}, document={document})"
    )]
    InvalidCell {
        parameter: String,
        column: String,
        value: String,
        document: String,
    },

    #[error(
        "value {value:?} cannot be coerced to {expected} \
         (parameter_name={parameter}, document={document})"
    )]
    Coercion {
        parameter: String,
        value: String,
        expected: ParamType,
        document: String,
    },

    #[error(
        "value {value:?} is not a recognized calendar date \
         (parameter_name={parameter}, document={document})"
    )]
    InvalidDate {
        parameter: String,
        value: String,
        document: String,
    },

    #[error(
        "required is True but neither examples nor default holds a value \
         (parameter_name={parameter}, document={document})"
    )]
    RequiredMissing { parameter: String, document: String },

    #[error(
        "resolved value {actual:?} does not equal const {expected:?} \
         (parameter_name={parameter}, document={document})"
    )]
    ConstMismatch {
        parameter: String,
        expected: String,
        actual: String,
        document: String,
    },

    #[error(
        "resolved value {value:?} is not a member of enum [{allowed}] \
         (parameter_name={parameter}, document={document})"
    )]
    EnumMismatch {
        parameter: String,
        value: String,
        allowed: String,
        document: String,
    },

    #[error(
        "value {value} is outside the allowed range ({bounds}) \
         (parameter_name={parameter}, document={document})"
    )]
    RangeViolation {
        parameter: String,
        value: f64,
        bounds: String,
        document: String,
    },

    #[error(
        "string length {length} is outside the allowed range ({bounds}) \
         (parameter_name={parameter}, document={document})"
    )]
    LengthViolation {
        parameter: String,
        length: usize,
        bounds: String,
        document: String,
    },

    #[error("invalid pattern {pattern:?} (parameter_name={parameter}): {message}")]
    InvalidPattern {
        parameter: String,
        pattern: String,
        message: String,
    },

    #[error(
        "value {value:?} does not match pattern {pattern:?} \
         (parameter_name={parameter}, document={document})"
    )]
    PatternMismatch {
        parameter: String,
        value: String,
        pattern: String,
        document: String,
    },

    #[error("duplicate parameter_name values in {scope}: {names} (document={document})")]
    DuplicateParameters {
        scope: String,
        names: String,
        document: String,
    },

    #[error("duplicate key_name values in {sheet}: {keys}")]
    DuplicateTermKeys { sheet: String, keys: String },

    #[error(
        "term {term:?} has no entry in {dictionary} \
         (parameter_name={parameter}, document={document})"
    )]
    UnresolvedTerm {
        parameter: String,
        term: String,
        dictionary: String,
        document: String,
    },

    #[error(
        "parameter_name {parameter:?} is not a known sample common property \
         (document={document})"
    )]
    UnknownSampleParameter { parameter: String, document: String },
}

pub type Result<T> = std::result::Result<T, TemplateError>;
