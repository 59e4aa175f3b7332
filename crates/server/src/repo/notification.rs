use shared_types::{AppError, Notification};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

/// List a user's notifications, newest first.
pub async fn list_for_user(
    pool: &Pool<Postgres>,
    user_id: i64,
    limit: i64,
) -> Result<Vec<Notification>, AppError> {
    sqlx::query_as::<_, Notification>(
        r#"
        SELECT id, user_id, title, body, read, created_at
        FROM notifications
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

/// Number of unread notifications for a user.
pub async fn count_unread(pool: &Pool<Postgres>, user_id: i64) -> Result<i64, AppError> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND read = FALSE",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Mark one of the user's notifications read.
///
/// Returns `true` only when an unread row flipped to read, so callers can
/// decrement their unread counter exactly once.
pub async fn mark_read(pool: &Pool<Postgres>, user_id: i64, id: Uuid) -> Result<bool, AppError> {
    let result = sqlx::query(
        "UPDATE notifications SET read = TRUE WHERE id = $1 AND user_id = $2 AND read = FALSE",
    )
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(result.rows_affected() == 1)
}
