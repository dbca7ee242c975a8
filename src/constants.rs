//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATASET DEFAULTS
// =============================================================================

/// Default path of the contest dataset file
pub const DEFAULT_DATASET_PATH: &str = "data/contests.json";

// =============================================================================
// PAGINATION
// =============================================================================

/// Number of contests shown per listing page
pub const DEFAULT_PAGE_SIZE: u32 = 8;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// CONTEST CATEGORIES
// =============================================================================

/// Contest category slugs
pub mod categories {
    pub const IMAGE_DESIGN: &str = "image-design";
    pub const ARTICLE_WRITING: &str = "article-writing";
    pub const GAMING_REVIEW: &str = "gaming-review";
    pub const MARKETING_STRATEGY: &str = "marketing-strategy";
    pub const WEB_DEVELOPMENT: &str = "web-development";
    pub const PHOTOGRAPHY: &str = "photography";

    /// All known category slugs
    pub const ALL: &[&str] = &[
        IMAGE_DESIGN,
        ARTICLE_WRITING,
        GAMING_REVIEW,
        MARKETING_STRATEGY,
        WEB_DEVELOPMENT,
        PHOTOGRAPHY,
    ];
}

/// Sentinel meaning "no category filter"
pub const CATEGORY_ALL: &str = "all";

// =============================================================================
// SORT KEYS
// =============================================================================

/// Listing sort keys
pub mod sort_keys {
    pub const NEWEST: &str = "newest";
    pub const OLDEST: &str = "oldest";
    pub const PRIZE_HIGH: &str = "prize-high";
    pub const PRIZE_LOW: &str = "prize-low";
    pub const DEADLINE: &str = "deadline";
    pub const POPULAR: &str = "popular";

    /// All supported sort keys
    pub const ALL: &[&str] = &[NEWEST, OLDEST, PRIZE_HIGH, PRIZE_LOW, DEADLINE, POPULAR];
}

// =============================================================================
// PRICE BUCKETS
// =============================================================================

/// Prize-money range bucket ids (half-open intervals except the last)
pub mod price_ranges {
    pub const ALL: &str = "all";
    pub const UNDER_1K: &str = "0-1000";
    pub const FROM_1K_TO_5K: &str = "1000-5000";
    pub const FROM_5K_TO_10K: &str = "5000-10000";
    pub const OVER_10K: &str = "10000+";

    /// All bucket ids, in display order
    pub const BUCKETS: &[&str] = &[ALL, UNDER_1K, FROM_1K_TO_5K, FROM_5K_TO_10K, OVER_10K];
}

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum accepted length of a free-text search query
pub const MAX_SEARCH_QUERY_LENGTH: u64 = 256;
