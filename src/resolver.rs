//! Chooses which product endpoint a fetch should use.

/// The product query a fetch will issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryMode {
    /// `fetch_all_products(user_id)`
    ListAll { user_id: String },
    /// `search_products(term)`
    Search { term: String },
}

/// Empty query lists everything for the user; anything else searches.
///
/// The term is passed through untouched, so a whitespace-only query still
/// searches, matching what the search box holds.
pub fn resolve_query_mode(query: &str, user_id: &str) -> QueryMode {
    if query.is_empty() {
        QueryMode::ListAll {
            user_id: user_id.to_string(),
        }
    } else {
        QueryMode::Search {
            term: query.to_string(),
        }
    }
}
