//! In-memory contest catalog
//!
//! The catalog is materialized once at startup from a JSON dataset file and
//! never mutated afterwards, so handlers read it without locking.

use std::fs;
use std::path::Path;

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::Contest;

/// Read-only collection of every contest known to the service
#[derive(Debug, Clone)]
pub struct ContestCatalog {
    contests: Vec<Contest>,
}

impl ContestCatalog {
    /// Build a catalog from an already-materialized list
    pub fn new(contests: Vec<Contest>) -> Self {
        Self { contests }
    }

    /// Load the catalog from a JSON dataset file
    pub fn load_from_file(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::Dataset(format!("cannot read {}: {}", path.display(), e))
        })?;

        let contests: Vec<Contest> = serde_json::from_str(&raw).map_err(|e| {
            AppError::Dataset(format!("cannot parse {}: {}", path.display(), e))
        })?;

        tracing::info!(count = contests.len(), path = %path.display(), "Loaded contest catalog");

        Ok(Self::new(contests))
    }

    /// All contests, in dataset order
    pub fn contests(&self) -> &[Contest] {
        &self.contests
    }

    /// Number of contests in the catalog
    pub fn len(&self) -> usize {
        self.contests.len()
    }

    /// Whether the catalog holds no contests
    pub fn is_empty(&self) -> bool {
        self.contests.is_empty()
    }

    /// Look up a single contest by id
    pub fn find_by_id(&self, id: &Uuid) -> Option<&Contest> {
        self.contests.iter().find(|c| c.id == *id)
    }
}
