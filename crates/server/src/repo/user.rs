use shared_types::{AppError, User};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

/// Find a user by ID.
pub async fn find_by_id(pool: &Pool<Postgres>, id: i64) -> Result<Option<User>, AppError> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, display_name, email, avatar_url, role
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}
