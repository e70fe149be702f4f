//! Free-text query matching over item fields.

use shelfsearch_core::Item;

/// Trim and lower-case a raw query.
///
/// `None` for empty or whitespace-only input, which callers treat as
/// "return nothing" — an empty query never means "match everything".
#[must_use]
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Case-insensitive substring test against name, description, or category.
/// Any one field matching suffices. Soft-deleted items never match.
#[must_use]
pub fn matches(normalized_query: &str, item: &Item) -> bool {
    if item.deleted {
        return false;
    }
    field_contains(&item.name, normalized_query)
        || item
            .description
            .as_deref()
            .is_some_and(|d| field_contains(d, normalized_query))
        || item
            .category
            .as_deref()
            .is_some_and(|c| field_contains(c, normalized_query))
}

fn field_contains(field: &str, normalized_query: &str) -> bool {
    field.to_lowercase().contains(normalized_query)
}
