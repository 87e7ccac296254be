//! Prefix matching of candidate items against typed text.
//!
//! The matcher is a pure function: it owns no state and never fails. Empty
//! text produces no suggestions, and an item identical to the typed text is
//! never suggested since there is nothing left to complete.
//!
//! # Example
//!
//! ```
//! use horizon_autocomplete::matcher::prefix_matches;
//!
//! let items = vec!["dog".to_string(), "Doge".to_string(), "cat".to_string()];
//! assert_eq!(prefix_matches(&items, "do", 10), vec!["dog", "Doge"]);
//! assert_eq!(prefix_matches(&items, "dog", 10), vec!["Doge"]);
//! assert!(prefix_matches(&items, "", 10).is_empty());
//! ```

use serde::Deserialize;

/// Controls how completion matching handles letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseSensitivity {
    /// Case-sensitive matching (e.g., "Do" won't match "dog").
    CaseSensitive,
    /// Case-insensitive matching (e.g., "Do" will match "dog").
    #[default]
    CaseInsensitive,
}

/// Case-insensitive prefix matching.
///
/// Returns, in input order, at most `limit` items that start with `query`
/// ignoring case and are not exactly equal to it.
pub fn prefix_matches(items: &[String], query: &str, limit: usize) -> Vec<String> {
    matches_with(items, query, limit, CaseSensitivity::CaseInsensitive)
}

/// Prefix matching with an explicit case policy.
pub fn matches_with(
    items: &[String],
    query: &str,
    limit: usize,
    case_sensitivity: CaseSensitivity,
) -> Vec<String> {
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }

    let matches: Vec<String> = match case_sensitivity {
        CaseSensitivity::CaseSensitive => items
            .iter()
            .filter(|item| item.as_str() != query && item.starts_with(query))
            .take(limit)
            .cloned()
            .collect(),
        CaseSensitivity::CaseInsensitive => {
            let query_lower = query.to_lowercase();
            items
                .iter()
                .filter(|item| {
                    item.as_str() != query && item.to_lowercase().starts_with(&query_lower)
                })
                .take(limit)
                .cloned()
                .collect()
        }
    };

    tracing::trace!(
        target: "horizon_autocomplete::matcher",
        query,
        candidates = items.len(),
        matched = matches.len(),
        "matched items"
    );
    matches
}
