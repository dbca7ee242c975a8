//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::config::Config;
use crate::store::ContestCatalog;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// In-memory contest catalog, read-only after startup
    pub catalog: ContestCatalog,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(catalog: ContestCatalog, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner { catalog, config }),
        }
    }

    /// Get a reference to the contest catalog
    pub fn catalog(&self) -> &ContestCatalog {
        &self.inner.catalog
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
