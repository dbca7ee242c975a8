//! Contest response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::discovery::PageMarker;

/// Contest response
#[derive(Debug, Serialize)]
pub struct ContestResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub prize_money: f64,
    pub participants_count: u32,
    pub status: String, // open, ended
    pub created_at: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
}

/// Contest summary for list views
#[derive(Debug, Serialize)]
pub struct ContestSummary {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub prize_money: f64,
    pub participants_count: u32,
    pub status: String,
    pub deadline: DateTime<Utc>,
}

/// Contest list response
#[derive(Debug, Serialize)]
pub struct ContestsListResponse {
    pub contests: Vec<ContestSummary>,
    pub total_matched: u64,
    pub total_pages: u32,
    /// The page actually served (out-of-range requests are clamped)
    pub page: u32,
    pub page_size: u32,
    /// Markers for the pagination control, gaps collapsed to "ellipsis"
    pub pages: Vec<PageMarker>,
}

/// Known contest categories response
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}
