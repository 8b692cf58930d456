//! Pure filter over the catalog: active category AND title substring search.
//!
//! Both predicates are conjunctive and the result preserves catalog order.
//! No error conditions — an empty result is a valid outcome.

use super::types::{CategoryFilter, GameEntry};

/// Return the entries passing both the category filter and the search query.
///
/// The search predicate is a case-insensitive substring match on the title;
/// an empty query always passes. Filtering is idempotent: applying the same
/// filter to its own output returns the same sequence.
pub fn filter<'a>(
    entries: &'a [GameEntry],
    category: CategoryFilter,
    query: &str,
) -> Vec<&'a GameEntry> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|e| category.matches(e.category))
        .filter(|e| needle.is_empty() || e.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::{seed_catalog, Category};

    #[test]
    fn test_all_with_empty_query_returns_everything() {
        let catalog = seed_catalog();
        let result = filter(&catalog, CategoryFilter::All, "");
        assert_eq!(result.len(), catalog.len());
    }

    #[test]
    fn test_category_filter_only_matching_entries() {
        let catalog = seed_catalog();
        let result = filter(&catalog, CategoryFilter::Only(Category::Puzzle), "");
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|e| e.category == Category::Puzzle));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = seed_catalog();
        let result = filter(&catalog, CategoryFilter::All, "hEx");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Hextris");
    }

    #[test]
    fn test_seed_search_2048_finds_single_entry() {
        let catalog = seed_catalog();
        let result = filter(&catalog, CategoryFilter::All, "2048");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "2048");
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let catalog = seed_catalog();
        // "Cyber Racer" is Action; searching for it under Puzzle finds nothing
        let result = filter(&catalog, CategoryFilter::Only(Category::Puzzle), "cyber");
        assert!(result.is_empty());
    }

    #[test]
    fn test_result_preserves_catalog_order() {
        let catalog = seed_catalog();
        let result = filter(&catalog, CategoryFilter::Only(Category::Puzzle), "");
        assert_eq!(result[0].title, "Hextris");
        assert_eq!(result[1].title, "2048");
    }

    #[test]
    fn test_no_match_yields_empty() {
        let catalog = seed_catalog();
        let result = filter(&catalog, CategoryFilter::All, "does not exist");
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = seed_catalog();
        let once: Vec<GameEntry> = filter(&catalog, CategoryFilter::Only(Category::Puzzle), "t")
            .into_iter()
            .cloned()
            .collect();
        let twice = filter(&once, CategoryFilter::Only(Category::Puzzle), "t");
        assert_eq!(twice.len(), once.len());
        assert!(twice.iter().zip(once.iter()).all(|(a, b)| *a == b));
    }
}
