use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Processing state of a reclamation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ReclamationStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Rejected,
}

impl ReclamationStatus {
    /// Parse the stored status, treating unknown values as `Open`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "in_progress" => ReclamationStatus::InProgress,
            "resolved" => ReclamationStatus::Resolved,
            "rejected" => ReclamationStatus::Rejected,
            _ => ReclamationStatus::Open,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReclamationStatus::Open => "open",
            ReclamationStatus::InProgress => "in_progress",
            ReclamationStatus::Resolved => "resolved",
            ReclamationStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReclamationStatus::Open => "Open",
            ReclamationStatus::InProgress => "In progress",
            ReclamationStatus::Resolved => "Resolved",
            ReclamationStatus::Rejected => "Rejected",
        }
    }
}

/// A complaint filed by the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Reclamation {
    pub id: Uuid,
    pub user_id: i64,
    pub subject: String,
    pub description: String,
    /// Stored as the lowercase key of [`ReclamationStatus`].
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Reclamation {
    pub fn status(&self) -> ReclamationStatus {
        ReclamationStatus::from_str_or_default(&self.status)
    }
}
