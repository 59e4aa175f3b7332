use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Something the user did, shown in the activities panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Activity {
    pub id: Uuid,
    pub user_id: i64,
    /// snake_case action key, e.g. `profile_updated`.
    pub action: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
