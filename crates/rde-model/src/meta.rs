use std::collections::BTreeMap;

use crate::cell::is_present;

/// Key-value metadata captured above the sentinel header row of a
/// "key-value + table" sheet (`$schema`, `$id`, `description`, `title/ja`,
/// `title/en`).
#[derive(Debug, Clone, Default)]
pub struct SheetMeta {
    values: BTreeMap<String, String>,
}

impl SheetMeta {
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// The value for `key` when it holds real data.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|value| is_present(Some(value)))
    }

    /// The value for `key`, or the empty string. Root schema fields
    /// (`$schema`, `$id`, titles) are always emitted, empty when the sheet
    /// does not supply them.
    pub fn value_or_default(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }
}

impl FromIterator<(String, String)> for SheetMeta {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
