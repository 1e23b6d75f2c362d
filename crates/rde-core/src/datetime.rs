//! Flexible calendar date parsing.
//!
//! Workbook authors write dates in whatever shape their locale suggests;
//! the output contract is always `YYYY-MM-DD`. Accepted input formats are a
//! fixed, documented list tried in order — not a general natural-language
//! parser.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Datetime shapes tried before the plain date formats.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
];

/// Plain date shapes, most common first.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y年%m月%d日",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%d %B %Y",
];

/// Parse a date written in any accepted format and re-emit it as
/// `YYYY-MM-DD`. Returns `None` when no format matches.
pub fn canonical_date(raw: &str) -> Option<String> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.date_naive().format("%Y-%m-%d").to_string());
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Some(parsed.date().format("%Y-%m-%d").to_string());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(text, format) {
            return Some(parsed.format("%Y-%m-%d").to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_common_shapes() {
        assert_eq!(canonical_date("2024-01-05"), Some("2024-01-05".to_string()));
        assert_eq!(canonical_date("2024/1/5"), Some("2024-01-05".to_string()));
        assert_eq!(canonical_date("2024.01.05"), Some("2024-01-05".to_string()));
        assert_eq!(
            canonical_date("2024年1月5日"),
            Some("2024-01-05".to_string())
        );
        assert_eq!(
            canonical_date("January 5, 2024"),
            Some("2024-01-05".to_string())
        );
        assert_eq!(
            canonical_date("5 January 2024"),
            Some("2024-01-05".to_string())
        );
        assert_eq!(
            canonical_date("2024-01-05T10:30:00"),
            Some("2024-01-05".to_string())
        );
        assert_eq!(
            canonical_date("2024-01-05T10:30:00+09:00"),
            Some("2024-01-05".to_string())
        );
    }

    #[test]
    fn rejects_non_dates() {
        assert_eq!(canonical_date("not a date"), None);
        assert_eq!(canonical_date(""), None);
        assert_eq!(canonical_date("2024-13-40"), None);
    }
}
