//! Page category constants for tab page standardization.
//!
//! Every page rendered inside a tab declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a005_job--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records: table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Read-only card of a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Report built from an ad-hoc data source.
pub const PAGE_CAT_REPORT: &str = "report";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL, PAGE_CAT_REPORT];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, cat)) if !entity.is_empty() && !cat.is_empty())
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a005_job--list"));
        assert!(!is_valid_page_id("a005_job"));
        assert!(!is_valid_page_id("--list"));
        assert!(is_known_category(PAGE_CAT_REPORT));
        assert!(!is_known_category("legacy"));
    }
}
