//! Shared helper functions for the SQLite store.

use crate::db::{DEFAULT_PAGE_SIZE, PageQuery, SortOrder};

/// Validate and map a sort field to the actual column name.
/// Returns None for invalid fields (falls back to the default).
pub fn validate_sort_field(field: &str, allowed: &[&str]) -> Option<&'static str> {
    for &allowed_field in allowed {
        if field == allowed_field {
            // Return static str to avoid lifetime issues
            return match field {
                "id" => Some("id"),
                "title" => Some("title"),
                "completed" => Some("completed"),
                "created_at" => Some("created_at"),
                _ => None,
            };
        }
    }
    None
}

/// Build ORDER BY clause from PageQuery parameters.
///
/// `id` is appended as a secondary sort key so rows with equal values in
/// the primary column come back in a stable order across queries.
pub fn build_order_clause(
    query: &PageQuery,
    allowed_fields: &[&str],
    default_field: &str,
) -> String {
    let sort_field = query
        .sort_by
        .as_deref()
        .and_then(|f| validate_sort_field(f, allowed_fields))
        .unwrap_or(default_field);

    let order = match query.sort_order.unwrap_or_default() {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    };

    if sort_field == "id" {
        format!("ORDER BY id {}", order)
    } else {
        format!("ORDER BY {} {}, id {}", sort_field, order, order)
    }
}

/// Resolve page/size to the concrete values applied to the query.
/// Size is clamped to at least 1 so LIMIT/OFFSET math stays sane.
pub fn page_bounds(query: &PageQuery) -> (usize, usize) {
    let page = query.page.unwrap_or(0);
    let size = query.size.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
    (page, size)
}
