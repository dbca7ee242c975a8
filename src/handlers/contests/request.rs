//! Contest request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_PAGE_SIZE, MAX_SEARCH_QUERY_LENGTH};
use crate::discovery::FilterCriteria;

/// List contests query parameters
///
/// The parameter names are the persisted criteria encoding: `type`, `search`,
/// `sort` and `price`, each optional and defaulting when absent. `page` is
/// accepted for in-session navigation but never round-tripped by clients.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListContestsQuery {
    /// Category slug, e.g. "photography"
    #[serde(rename = "type")]
    pub category: Option<String>,

    /// Free-text query matched against name and description
    #[validate(length(max = MAX_SEARCH_QUERY_LENGTH))]
    pub search: Option<String>,

    /// Sort key: newest, oldest, prize-high, prize-low, deadline, popular
    pub sort: Option<String>,

    /// Prize bucket id: 0-1000, 1000-5000, 5000-10000, 10000+
    pub price: Option<String>,

    #[validate(range(min = 1))]
    pub page: Option<u32>,

    #[validate(range(min = 1, max = MAX_PAGE_SIZE))]
    pub per_page: Option<u32>,
}

impl ListContestsQuery {
    /// Fold the query parameters into listing criteria
    pub fn into_criteria(self) -> FilterCriteria {
        let mut criteria = FilterCriteria::default();

        if let Some(category) = self.category {
            criteria = criteria.with_category(category);
        }
        if let Some(search) = self.search {
            criteria = criteria.with_search(search);
        }
        if let Some(sort) = self.sort {
            criteria = criteria.with_sort(sort);
        }
        if let Some(price) = self.price {
            criteria = criteria.with_price_range(price);
        }
        if let Some(per_page) = self.per_page {
            criteria.page_size = per_page;
        }
        // page last: filter setters reset it
        if let Some(page) = self.page {
            criteria = criteria.with_page(page);
        }

        criteria
    }
}
