//! Contest filter/sort/paginate engine
//!
//! `query` is the single entry point: it narrows the catalog by category,
//! free text and prize bucket (in that order), applies exactly one stable
//! sort, then slices out the requested page. It borrows the input list and
//! never mutates it, holds no state between calls, and treats every missing
//! optional field as its documented default instead of failing.

use crate::constants::{price_ranges, sort_keys, CATEGORY_ALL};
use crate::discovery::criteria::FilterCriteria;
use crate::models::Contest;

/// One page of listing results plus derived counts
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<'a> {
    /// The visible page, in final sort order
    pub items: Vec<&'a Contest>,
    /// Matches after filtering, before pagination
    pub total_matched: usize,
    /// Always at least 1, even for an empty match set
    pub total_pages: u32,
    /// The clamped page actually served
    pub page: u32,
    pub page_size: u32,
}

/// Run the full listing pipeline over the catalog
pub fn query<'a>(contests: &'a [Contest], criteria: &FilterCriteria) -> QueryResult<'a> {
    let mut matched: Vec<&Contest> = contests
        .iter()
        .filter(|c| matches_category(c, &criteria.category))
        .filter(|c| matches_search(c, &criteria.search))
        .filter(|c| matches_price_range(c, &criteria.price_range))
        .collect();

    sort_contests(&mut matched, &criteria.sort);

    let total_matched = matched.len();
    let page_size = criteria.page_size.max(1);
    let total_pages = page_count(total_matched, page_size);
    let page = criteria.page.clamp(1, total_pages);

    let start = ((page - 1) * page_size) as usize;
    let end = (start + page_size as usize).min(total_matched);
    let items = matched[start.min(total_matched)..end].to_vec();

    QueryResult {
        items,
        total_matched,
        total_pages,
        page,
        page_size,
    }
}

/// Ceil-divide in `usize` so oversized catalogs cannot truncate the page
/// count; a total beyond `u32` saturates instead of wrapping.
fn page_count(total_matched: usize, page_size: u32) -> u32 {
    let pages = total_matched.div_ceil(page_size as usize).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

fn matches_category(contest: &Contest, category: &str) -> bool {
    category == CATEGORY_ALL || contest.category == category
}

fn matches_search(contest: &Contest, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    contest.name.to_lowercase().contains(&needle)
        || contest.description_or_empty().to_lowercase().contains(&needle)
}

fn matches_price_range(contest: &Contest, price_range: &str) -> bool {
    let prize = contest.prize_money_or_zero();
    match price_range {
        price_ranges::UNDER_1K => prize < 1000.0,
        price_ranges::FROM_1K_TO_5K => (1000.0..5000.0).contains(&prize),
        price_ranges::FROM_5K_TO_10K => (5000.0..10000.0).contains(&prize),
        price_ranges::OVER_10K => prize >= 10000.0,
        // "all" and anything unrecognized filter nothing
        _ => true,
    }
}

/// Apply the sort key; `sort_by` is stable, so equal keys keep input order.
/// Unrecognized keys leave the input order untouched.
fn sort_contests(contests: &mut [&Contest], sort: &str) {
    match sort {
        sort_keys::NEWEST => contests.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        sort_keys::OLDEST => contests.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        sort_keys::PRIZE_HIGH => contests.sort_by(|a, b| {
            b.prize_money_or_zero().total_cmp(&a.prize_money_or_zero())
        }),
        sort_keys::PRIZE_LOW => contests.sort_by(|a, b| {
            a.prize_money_or_zero().total_cmp(&b.prize_money_or_zero())
        }),
        sort_keys::DEADLINE => contests.sort_by(|a, b| a.deadline.cmp(&b.deadline)),
        sort_keys::POPULAR => contests.sort_by(|a, b| {
            b.participants_or_zero().cmp(&a.participants_or_zero())
        }),
        _ => {}
    }
}
