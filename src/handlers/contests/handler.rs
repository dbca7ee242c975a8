//! Contest handler implementations

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{error::AppResult, services::ContestService, state::AppState};

use super::{
    request::ListContestsQuery,
    response::{CategoriesResponse, ContestResponse, ContestsListResponse},
};

/// List contests (with filtering, sorting and pagination)
pub async fn list_contests(
    State(state): State<AppState>,
    Query(query): Query<ListContestsQuery>,
) -> AppResult<Json<ContestsListResponse>> {
    query.validate()?;

    let criteria = query.into_criteria();
    let response = ContestService::list_contests(state.catalog(), &criteria);

    Ok(Json(response))
}

/// Get a specific contest
pub async fn get_contest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ContestResponse>> {
    let contest = ContestService::get_contest(state.catalog(), &id)?;
    Ok(Json(contest))
}

/// List the known contest categories
pub async fn list_categories() -> Json<CategoriesResponse> {
    Json(ContestService::list_categories())
}
