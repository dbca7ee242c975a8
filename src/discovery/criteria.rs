//! Listing criteria and their persisted query-string form
//!
//! The criteria object is a plain value: the engine is a pure function of
//! (catalog, criteria), and navigation state is kept by encoding the
//! criteria into query-string pairs and decoding them back. Default values
//! are omitted from the encoding, and `page` is never persisted: a reload
//! always lands on page 1.

use crate::constants::{sort_keys, CATEGORY_ALL, DEFAULT_PAGE_SIZE};

/// Persisted query-string keys
mod keys {
    pub const CATEGORY: &str = "type";
    pub const SEARCH: &str = "search";
    pub const SORT: &str = "sort";
    pub const PRICE: &str = "price";
}

/// User-selected listing criteria
///
/// `category`, `sort` and `price_range` are slugs rather than closed enums:
/// unrecognized values are passed through and fall back to no-op behavior in
/// the engine, mirroring how the rest of the catalog treats unknown slugs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against name and description
    pub search: String,
    /// Category slug, or "all"
    pub category: String,
    /// Prize bucket id (see `constants::price_ranges`), or "all"
    pub price_range: String,
    /// Sort key (see `constants::sort_keys`)
    pub sort: String,
    /// 1-based page index; out-of-range values are clamped by the engine
    pub page: u32,
    pub page_size: u32,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CATEGORY_ALL.to_string(),
            price_range: crate::constants::price_ranges::ALL.to_string(),
            sort: sort_keys::NEWEST.to_string(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilterCriteria {
    /// Set the free-text query; resets the page
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self.page = 1;
        self
    }

    /// Set the category filter; resets the page
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self.page = 1;
        self
    }

    /// Set the prize bucket; resets the page
    pub fn with_price_range(mut self, price_range: impl Into<String>) -> Self {
        self.price_range = price_range.into();
        self.page = 1;
        self
    }

    /// Set the sort key; resets the page
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = sort.into();
        self.page = 1;
        self
    }

    /// Navigate to a page without touching any filter
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Encode into persisted query-string pairs, omitting defaults
    ///
    /// `page` and `page_size` are intentionally absent from the encoding.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let defaults = Self::default();
        let mut pairs = Vec::new();

        if self.category != defaults.category {
            pairs.push((keys::CATEGORY, self.category.clone()));
        }
        if !self.search.is_empty() {
            pairs.push((keys::SEARCH, self.search.clone()));
        }
        if self.sort != defaults.sort {
            pairs.push((keys::SORT, self.sort.clone()));
        }
        if self.price_range != defaults.price_range {
            pairs.push((keys::PRICE, self.price_range.clone()));
        }

        pairs
    }

    /// Decode persisted query-string pairs; missing keys take defaults
    pub fn from_query_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut criteria = Self::default();

        for (key, value) in pairs {
            match key {
                keys::CATEGORY => criteria.category = value.to_string(),
                keys::SEARCH => criteria.search = value.to_string(),
                keys::SORT => criteria.sort = value.to_string(),
                keys::PRICE => criteria.price_range = value.to_string(),
                _ => {}
            }
        }

        criteria
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::price_ranges;

    #[test]
    fn test_defaults_encode_to_nothing() {
        assert!(FilterCriteria::default().to_query_pairs().is_empty());
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let criteria = FilterCriteria::default()
            .with_category("photography")
            .with_search("logo")
            .with_sort(sort_keys::PRIZE_LOW)
            .with_price_range(price_ranges::FROM_1K_TO_5K);

        let pairs = criteria.to_query_pairs();
        let decoded = FilterCriteria::from_query_pairs(
            pairs.iter().map(|(k, v)| (*k, v.as_str())),
        );

        assert_eq!(decoded, criteria);
    }

    #[test]
    fn test_page_never_persisted() {
        let criteria = FilterCriteria::default()
            .with_category("photography")
            .with_page(7);

        let pairs = criteria.to_query_pairs();
        assert!(pairs.iter().all(|(k, _)| *k != "page"));

        let decoded = FilterCriteria::from_query_pairs(
            pairs.iter().map(|(k, v)| (*k, v.as_str())),
        );
        assert_eq!(decoded.page, 1);
    }

    #[test]
    fn test_filter_setters_reset_page() {
        let base = FilterCriteria::default().with_page(5);

        assert_eq!(base.clone().with_search("art").page, 1);
        assert_eq!(base.clone().with_category("gaming-review").page, 1);
        assert_eq!(base.clone().with_price_range(price_ranges::OVER_10K).page, 1);
        assert_eq!(base.clone().with_sort(sort_keys::DEADLINE).page, 1);
        assert_eq!(base.with_page(3).page, 3);
    }

    #[test]
    fn test_unknown_keys_ignored_on_decode() {
        let decoded = FilterCriteria::from_query_pairs([
            ("utm_source", "newsletter"),
            ("search", "banner"),
        ]);
        assert_eq!(decoded.search, "banner");
        assert_eq!(decoded.category, CATEGORY_ALL);
    }
}
