use shared_types::{AppError, Reclamation};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

/// List reclamations filed by a user, newest first.
pub async fn list_for_user(
    pool: &Pool<Postgres>,
    user_id: i64,
    limit: i64,
) -> Result<Vec<Reclamation>, AppError> {
    sqlx::query_as::<_, Reclamation>(
        r#"
        SELECT id, user_id, subject, description, status, created_at
        FROM reclamations
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
