use serde::{Deserialize, Serialize};

const DEFAULT_LIST_LIMIT: i64 = 50;

fn default_list_limit() -> i64 {
    DEFAULT_LIST_LIMIT
}

/// Maximum rows returned for each dashboard panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardLimits {
    #[serde(default = "default_list_limit")]
    pub notifications: i64,
    #[serde(default = "default_list_limit")]
    pub activities: i64,
    #[serde(default = "default_list_limit")]
    pub reclamations: i64,
}

impl Default for DashboardLimits {
    fn default() -> Self {
        Self {
            notifications: DEFAULT_LIST_LIMIT,
            activities: DEFAULT_LIST_LIMIT,
            reclamations: DEFAULT_LIST_LIMIT,
        }
    }
}

impl DashboardLimits {
    /// Replace non-positive limits with the default.
    pub fn sanitized(self) -> Self {
        let fix = |v: i64| if v > 0 { v } else { DEFAULT_LIST_LIMIT };
        Self {
            notifications: fix(self.notifications),
            activities: fix(self.activities),
            reclamations: fix(self.reclamations),
        }
    }
}

/// Top-level structure of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub dashboard: DashboardLimits,
}
