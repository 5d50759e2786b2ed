//! Filter settings for the dashboard view.

use serde::{Deserialize, Serialize};

/// Which key the visible-expenses selector sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Most recent first.
    #[default]
    Date,
    /// Highest amount first.
    Amount,
}

/// Current view settings: one record, field-patched by filter actions,
/// never partially corrupted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSettings {
    /// Case-insensitive substring match against the description.
    pub text: String,
    /// Active sort key.
    pub sort_by: SortBy,
    /// Inclusive lower bound on `created_at`, epoch millis.
    pub start_date: Option<i64>,
    /// Inclusive upper bound on `created_at`, epoch millis.
    pub end_date: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let filters = FilterSettings::default();
        assert_eq!(filters.text, "");
        assert_eq!(filters.sort_by, SortBy::Date);
        assert_eq!(filters.start_date, None);
        assert_eq!(filters.end_date, None);
    }
}
