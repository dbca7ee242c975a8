//! Contest model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contest catalog record
///
/// `description`, `prize_money` and `participants_count` are optional in the
/// upstream data and degrade to empty string / 0 wherever they are consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contest {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Category slug, e.g. "photography" (see `constants::categories`)
    pub category: String,
    pub prize_money: Option<f64>,
    pub participants_count: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
}

impl Contest {
    /// Get current status of the contest
    pub fn status(&self) -> ContestStatus {
        if Utc::now() < self.deadline {
            ContestStatus::Open
        } else {
            ContestStatus::Ended
        }
    }

    /// Prize money with the missing-field default applied
    pub fn prize_money_or_zero(&self) -> f64 {
        self.prize_money.unwrap_or(0.0)
    }

    /// Participant count with the missing-field default applied
    pub fn participants_or_zero(&self) -> u32 {
        self.participants_count.unwrap_or(0)
    }

    /// Description with the missing-field default applied
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Contest status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContestStatus {
    Open,
    Ended,
}

impl std::fmt::Display for ContestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Ended => write!(f, "ended"),
        }
    }
}
