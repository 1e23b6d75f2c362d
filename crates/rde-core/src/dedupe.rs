//! Duplicate detection for parameter names and dictionary keys.

use std::collections::{BTreeMap, BTreeSet};

use rde_model::{ParameterRow, Result, TemplateError};

/// Parameter names occurring more than once in the given rows. The result
/// is ordered and names each duplicate exactly once.
pub fn duplicate_names<'a, I>(rows: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a ParameterRow>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for row in rows {
        *counts.entry(row.name.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Fail when the rows contain repeated parameter names, naming the scope
/// (category or document section) and each offending name once.
pub fn ensure_unique_parameters(
    rows: &[&ParameterRow],
    scope: &str,
    document: &str,
) -> Result<()> {
    let duplicates = duplicate_names(rows.iter().copied());
    if duplicates.is_empty() {
        return Ok(());
    }
    Err(TemplateError::DuplicateParameters {
        scope: scope.to_string(),
        names: duplicates.into_iter().collect::<Vec<_>>().join(", "),
        document: document.to_string(),
    })
}

/// Keys occurring more than once in a slice, by an arbitrary key accessor.
/// Used for the `key_name` column of the term dictionaries.
pub fn duplicate_keys<T, F>(items: &[T], key: F) -> BTreeSet<String>
where
    F: Fn(&T) -> &str,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for item in items {
        *counts.entry(key(item)).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name.to_string())
        .collect()
}
