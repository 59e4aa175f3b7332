use serde::{Deserialize, Serialize};

/// The signed-in account shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "user".to_string()
}

impl User {
    /// First two characters of the display name, uppercased, for avatar fallbacks.
    pub fn initials(&self) -> String {
        let source = if self.display_name.trim().is_empty() {
            &self.username
        } else {
            &self.display_name
        };
        source.trim().chars().take(2).collect::<String>().to_uppercase()
    }
}

/// Response of the `get_user` server function: the account plus its unread
/// notification count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserOverview {
    pub user: User,
    pub notices_count: i64,
}

impl UserOverview {
    /// Unread count as a badge value. Negative counts become 0.
    pub fn notices_count(&self) -> u32 {
        u32::try_from(self.notices_count.max(0)).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn user(display_name: &str) -> User {
        User {
            id: 7,
            username: "mrossi".into(),
            display_name: display_name.into(),
            email: "m.rossi@example.com".into(),
            avatar_url: None,
            role: "user".into(),
        }
    }

    #[test]
    fn initials_use_display_name() {
        assert_eq!(user("maria rossi").initials(), "MA");
    }

    #[test]
    fn initials_fall_back_to_username() {
        assert_eq!(user("   ").initials(), "MR");
    }

    #[test]
    fn role_defaults_when_missing() {
        let json = r#"{"id":1,"username":"a","display_name":"A","email":"a@x.io"}"#;
        let parsed: User = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.role, "user");
        assert_eq!(parsed.avatar_url, None);
    }

    #[test]
    fn notices_count_is_clamped() {
        let mut overview = UserOverview {
            user: user("Maria"),
            notices_count: 3,
        };
        assert_eq!(overview.notices_count(), 3);

        overview.notices_count = -4;
        assert_eq!(overview.notices_count(), 0);

        overview.notices_count = i64::MAX;
        assert_eq!(overview.notices_count(), u32::MAX);
    }
}
