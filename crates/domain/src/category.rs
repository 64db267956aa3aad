//! Category filtering for catalog-style pages (services, gallery).
//!
//! The category list is derived from whatever records were loaded, never
//! hard-coded. Filtering is a pure, order-preserving predicate over records
//! already in memory.

use std::collections::HashSet;
use std::fmt;

/// Sentinel shown first in every category list; selects everything.
pub const ALL: &str = "all";

/// Anything that belongs to exactly one category.
pub trait Categorized {
    fn category(&self) -> &str;
}

/// The category a visitor selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Identity filter.
    #[default]
    All,
    /// Only records whose category equals this value.
    Named(String),
}

impl CategoryFilter {
    /// Build a filter from a query-string value; missing, empty or `all`
    /// selects everything.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::All,
            Some(v) if v.eq_ignore_ascii_case(ALL) => Self::All,
            Some(v) => Self::Named(v.to_string()),
        }
    }

    /// Label used for the selected chip.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Named(name) => name,
        }
    }

    #[must_use]
    pub fn matches<T: Categorized>(&self, record: &T) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => record.category() == name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `"all"` followed by each distinct category in first-seen order.
#[must_use]
pub fn categories<T: Categorized>(records: &[T]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = vec![ALL.to_string()];
    for record in records {
        if seen.insert(record.category()) {
            out.push(record.category().to_string());
        }
    }
    out
}

/// Records matching `filter`, in their original order.
#[must_use]
pub fn filter<'a, T: Categorized>(records: &'a [T], selected: &CategoryFilter) -> Vec<&'a T> {
    records.iter().filter(|r| selected.matches(*r)).collect()
}

/// A page's in-memory state: what was loaded plus what is selected.
///
/// The visible subset is always computed from `records`, never stored.
#[derive(Debug, Clone)]
pub struct CatalogView<T> {
    pub records: Vec<T>,
    pub filter: CategoryFilter,
}

impl<T: Categorized> CatalogView<T> {
    #[must_use]
    pub fn new(records: Vec<T>, filter: CategoryFilter) -> Self {
        Self { records, filter }
    }

    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        categories(&self.records)
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&T> {
        filter(&self.records, &self.filter)
    }

    /// Switch the selected category without re-fetching.
    pub fn select(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item(&'static str, &'static str);

    impl Categorized for Item {
        fn category(&self) -> &str {
            self.1
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item("cut", "hair"),
            Item("facial", "skin"),
            Item("colour", "hair"),
            Item("bridal", "makeup"),
        ]
    }

    #[test]
    fn should_derive_categories_in_first_seen_order() {
        assert_eq!(categories(&items()), vec!["all", "hair", "skin", "makeup"]);
    }

    #[test]
    fn should_list_only_all_when_nothing_loaded() {
        assert_eq!(categories::<Item>(&[]), vec!["all"]);
    }

    #[test]
    fn should_keep_order_when_filtering() {
        let items = items();
        let hair = filter(&items, &CategoryFilter::Named("hair".to_string()));
        assert_eq!(hair, vec![&items[0], &items[2]]);
    }

    #[test]
    fn should_give_identical_results_when_filtering_twice() {
        let items = items();
        let f = CategoryFilter::Named("skin".to_string());
        assert_eq!(filter(&items, &f), filter(&items, &f));
    }

    #[test]
    fn should_return_everything_for_all_after_narrowing() {
        let mut view = CatalogView::new(items(), CategoryFilter::Named("makeup".into()));
        assert_eq!(view.visible().len(), 1);

        view.select(CategoryFilter::All);
        assert_eq!(view.visible().len(), 4);
        assert_eq!(view.visible()[1], &Item("facial", "skin"));
    }

    #[test]
    fn should_return_nothing_for_unknown_category() {
        let items = items();
        assert!(filter(&items, &CategoryFilter::Named("nails".into())).is_empty());
    }

    #[test]
    fn should_parse_filter_from_query() {
        assert_eq!(CategoryFilter::from_query(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_query(Some("")), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_query(Some("ALL")), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_query(Some("hair")),
            CategoryFilter::Named("hair".to_string())
        );
    }
}
