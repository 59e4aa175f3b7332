use shared_types::{Activity, AppError};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

/// List a user's recent activity, newest first.
pub async fn list_for_user(
    pool: &Pool<Postgres>,
    user_id: i64,
    limit: i64,
) -> Result<Vec<Activity>, AppError> {
    sqlx::query_as::<_, Activity>(
        r#"
        SELECT id, user_id, action, description, created_at
        FROM activities
        WHERE user_id = $1
        ORDER BY created_at DESC
        LIMIT $2
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}
