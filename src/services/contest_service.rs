//! Contest discovery service

use uuid::Uuid;

use crate::{
    constants::categories,
    discovery::{self, FilterCriteria},
    error::{AppError, AppResult},
    handlers::contests::response::{
        CategoriesResponse, ContestResponse, ContestSummary, ContestsListResponse,
    },
    models::Contest,
    store::ContestCatalog,
};

/// Contest service for business logic
pub struct ContestService;

impl ContestService {
    /// List contests matching the criteria
    ///
    /// Runs the discovery engine over the catalog and packages the visible
    /// page together with the derived counts and the windowed page markers.
    pub fn list_contests(
        catalog: &ContestCatalog,
        criteria: &FilterCriteria,
    ) -> ContestsListResponse {
        let result = discovery::query(catalog.contests(), criteria);
        let pages = discovery::windowed_pages(result.page, result.total_pages);

        tracing::debug!(
            total_matched = result.total_matched,
            page = result.page,
            "Contest listing computed"
        );

        ContestsListResponse {
            contests: result.items.iter().map(|c| Self::to_contest_summary(c)).collect(),
            total_matched: result.total_matched as u64,
            total_pages: result.total_pages,
            page: result.page,
            page_size: result.page_size,
            pages,
        }
    }

    /// Get contest by ID
    pub fn get_contest(catalog: &ContestCatalog, id: &Uuid) -> AppResult<ContestResponse> {
        let contest = catalog
            .find_by_id(id)
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

        Ok(Self::to_contest_response(contest))
    }

    /// The known category slugs
    pub fn list_categories() -> CategoriesResponse {
        CategoriesResponse {
            categories: categories::ALL.iter().map(|s| s.to_string()).collect(),
        }
    }

    // Helper functions
    fn to_contest_summary(contest: &Contest) -> ContestSummary {
        ContestSummary {
            id: contest.id,
            name: contest.name.clone(),
            category: contest.category.clone(),
            prize_money: contest.prize_money_or_zero(),
            participants_count: contest.participants_or_zero(),
            status: contest.status().to_string(),
            deadline: contest.deadline,
        }
    }

    fn to_contest_response(contest: &Contest) -> ContestResponse {
        ContestResponse {
            id: contest.id,
            name: contest.name.clone(),
            description: contest.description.clone(),
            category: contest.category.clone(),
            prize_money: contest.prize_money_or_zero(),
            participants_count: contest.participants_or_zero(),
            status: contest.status().to_string(),
            created_at: contest.created_at,
            deadline: contest.deadline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::PageMarker;
    use chrono::{Duration, Utc};

    fn catalog(count: usize) -> ContestCatalog {
        let contests = (0..count)
            .map(|i| Contest {
                id: Uuid::new_v4(),
                name: format!("contest {i}"),
                description: None,
                category: categories::PHOTOGRAPHY.to_string(),
                prize_money: Some(100.0 * i as f64),
                participants_count: None,
                created_at: Utc::now() - Duration::days(i as i64),
                deadline: Utc::now() + Duration::days(7),
            })
            .collect();
        ContestCatalog::new(contests)
    }

    #[test]
    fn test_list_includes_page_window() {
        // 80 contests at 8 per page = 10 pages; page 5 windows with gaps
        let response = ContestService::list_contests(
            &catalog(80),
            &FilterCriteria::default().with_page(5),
        );

        assert_eq!(response.total_pages, 10);
        assert_eq!(
            response.pages,
            vec![
                PageMarker::Page(1),
                PageMarker::Ellipsis,
                PageMarker::Page(4),
                PageMarker::Page(5),
                PageMarker::Page(6),
                PageMarker::Ellipsis,
                PageMarker::Page(10),
            ]
        );
    }

    #[test]
    fn test_empty_catalog_is_a_valid_listing() {
        let response =
            ContestService::list_contests(&ContestCatalog::new(vec![]), &FilterCriteria::default());

        assert_eq!(response.total_matched, 0);
        assert_eq!(response.total_pages, 1);
        assert!(response.contests.is_empty());
        assert_eq!(response.pages, vec![PageMarker::Page(1)]);
    }

    #[test]
    fn test_get_contest_missing_is_not_found() {
        let err = ContestService::get_contest(&catalog(1), &Uuid::new_v4()).unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }
}
