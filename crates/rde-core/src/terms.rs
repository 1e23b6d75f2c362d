//! Cross-reference resolution against the sample term dictionaries.

use rde_model::{
    ClassTerm, ClassTermTable, GeneralTerm, GeneralTermTable, ParameterRow, Result, TemplateError,
};

use crate::dedupe::duplicate_keys;

const GENERAL_DICTIONARY: &str = "the general sample term dictionary";
const SPECIFIC_DICTIONARY: &str = "the specific sample term dictionary";

/// Joins parameter rows against the two term dictionaries.
///
/// Matching is exact string equality on the display name; when several
/// dictionary entries share a display name, the first in dictionary order
/// wins. Zero matches is fatal.
#[derive(Debug)]
pub struct TermResolver<'a> {
    general: &'a GeneralTermTable,
    specific: &'a ClassTermTable,
}

impl<'a> TermResolver<'a> {
    /// Build a resolver, rejecting dictionaries with repeated `key_name`s.
    pub fn new(general: &'a GeneralTermTable, specific: &'a ClassTermTable) -> Result<Self> {
        let duplicates = duplicate_keys(&general.entries, |entry| entry.key_name.as_str());
        if !duplicates.is_empty() {
            return Err(TemplateError::DuplicateTermKeys {
                sheet: GENERAL_DICTIONARY.to_string(),
                keys: duplicates.into_iter().collect::<Vec<_>>().join(", "),
            });
        }
        let duplicates = duplicate_keys(&specific.entries, |entry| entry.key_name.as_str());
        if !duplicates.is_empty() {
            return Err(TemplateError::DuplicateTermKeys {
                sheet: SPECIFIC_DICTIONARY.to_string(),
                keys: duplicates.into_iter().collect::<Vec<_>>().join(", "),
            });
        }
        Ok(Self { general, specific })
    }

    /// The general dictionary entry whose display name equals the row's
    /// `term` cell.
    pub fn general(&self, row: &ParameterRow, document: &str) -> Result<&'a GeneralTerm> {
        let term = row.term.as_deref().unwrap_or_default();
        self.general
            .entries
            .iter()
            .find(|entry| entry.name_ja == term)
            .ok_or_else(|| TemplateError::UnresolvedTerm {
                parameter: row.name.clone(),
                term: term.to_string(),
                dictionary: GENERAL_DICTIONARY.to_string(),
                document: document.to_string(),
            })
    }

    /// The specific dictionary entry whose combined display name equals the
    /// row's `term` cell.
    pub fn specific(&self, row: &ParameterRow, document: &str) -> Result<&'a ClassTerm> {
        let term = row.term.as_deref().unwrap_or_default();
        self.specific
            .entries
            .iter()
            .find(|entry| entry.bind_name == term)
            .ok_or_else(|| TemplateError::UnresolvedTerm {
                parameter: row.name.clone(),
                term: term.to_string(),
                dictionary: SPECIFIC_DICTIONARY.to_string(),
                document: document.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rde_model::ParamType;

    fn general_table(entries: &[(&str, &str, &str)]) -> GeneralTermTable {
        GeneralTermTable {
            entries: entries
                .iter()
                .map(|(key, id, name)| GeneralTerm {
                    key_name: (*key).to_string(),
                    term_id: (*id).to_string(),
                    name_ja: (*name).to_string(),
                })
                .collect(),
        }
    }

    fn row_with_term(term: &str) -> ParameterRow {
        let mut row = ParameterRow::new("temperature", ParamType::String);
        row.term = Some(term.to_string());
        row
    }

    #[test]
    fn first_match_wins_on_shared_display_names() {
        let general = general_table(&[
            ("sample.general.a", "T1", "温度"),
            ("sample.general.b", "T2", "温度"),
        ]);
        let specific = ClassTermTable::default();
        let resolver = TermResolver::new(&general, &specific).expect("resolver");
        let entry = resolver
            .general(&row_with_term("温度"), "invoice.schema.json")
            .expect("resolved");
        assert_eq!(entry.term_id, "T1");
    }

    #[test]
    fn zero_matches_is_fatal_and_names_the_parameter() {
        let general = general_table(&[("sample.general.a", "T1", "温度")]);
        let specific = ClassTermTable::default();
        let resolver = TermResolver::new(&general, &specific).expect("resolver");
        let err = resolver
            .general(&row_with_term("湿度"), "invoice.schema.json")
            .unwrap_err();
        let text = err.to_string();
        assert!(matches!(err, TemplateError::UnresolvedTerm { .. }));
        assert!(text.contains("temperature"));
        assert!(text.contains("invoice.schema.json"));
    }

    #[test]
    fn missing_term_cell_resolves_like_an_unknown_term() {
        let general = general_table(&[("sample.general.a", "T1", "温度")]);
        let specific = ClassTermTable::default();
        let resolver = TermResolver::new(&general, &specific).expect("resolver");
        let row = ParameterRow::new("temperature", ParamType::String);
        assert!(resolver.general(&row, "doc").is_err());
    }

    #[test]
    fn duplicate_dictionary_keys_are_rejected() {
        let general = general_table(&[
            ("sample.general.a", "T1", "温度"),
            ("sample.general.a", "T2", "圧力"),
        ]);
        let specific = ClassTermTable::default();
        let err = TermResolver::new(&general, &specific).unwrap_err();
        assert!(matches!(err, TemplateError::DuplicateTermKeys { .. }));
    }
}
