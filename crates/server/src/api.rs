use dioxus::prelude::*;
use shared_types::{Activity, Notification, Reclamation, UserOverview};
use uuid::Uuid;

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

/// Extract and validate the caller's identity from the current request.
/// Reads the Claims inserted by the auth middleware, falling back to parsing
/// the access token directly when the middleware did not run.
#[cfg(feature = "server")]
fn require_auth() -> Result<crate::auth::jwt::Claims, ServerFnError> {
    use crate::auth::{cookies, jwt};
    use shared_types::AppError;

    let ctx = dioxus::fullstack::FullstackContext::current()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    let parts = ctx.parts_mut();

    if let Some(claims) = parts.extensions.get::<jwt::Claims>() {
        return Ok(claims.clone());
    }

    let token = cookies::extract_access_token(&parts.headers)
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    jwt::validate_access_token(&token)
        .map_err(|_| AppError::unauthorized("Invalid or expired token").into_server_fn_error())
}

/// The signed-in user together with their unread notification count.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_user() -> Result<UserOverview, ServerFnError> {
    use crate::repo;
    use shared_types::AppError;

    let claims = require_auth()?;
    let db = get_db().await;

    let user = repo::user::find_by_id(db, claims.sub)
        .await
        .map_err(|e| e.into_server_fn_error())?
        .ok_or_else(|| {
            AppError::not_found(format!("User with id {} not found", claims.sub))
                .into_server_fn_error()
        })?;

    let notices_count = repo::notification::count_unread(db, user.id)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    Ok(UserOverview {
        user,
        notices_count,
    })
}

/// Notifications addressed to `user_id`. Only the owner or an admin may read them.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_notifications(user_id: i64) -> Result<Vec<Notification>, ServerFnError> {
    use shared_types::AppError;

    let claims = require_auth()?;
    if !crate::auth::can_access_user(&claims, user_id) {
        return Err(AppError::forbidden("Not allowed to read these notifications")
            .into_server_fn_error());
    }

    let limit = crate::config::dashboard_limits().notifications;
    crate::repo::notification::list_for_user(get_db().await, user_id, limit)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Mark one of the caller's notifications read.
/// Returns `true` when the notification was unread before the call.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn mark_notification_read(id: Uuid) -> Result<bool, ServerFnError> {
    let claims = require_auth()?;
    let changed = crate::repo::notification::mark_read(get_db().await, claims.sub, id)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    if changed {
        tracing::info!(user_id = claims.sub, %id, "Notification marked read");
    }
    Ok(changed)
}

/// The caller's recent activity.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_activities() -> Result<Vec<Activity>, ServerFnError> {
    let claims = require_auth()?;
    let limit = crate::config::dashboard_limits().activities;
    crate::repo::activity::list_for_user(get_db().await, claims.sub, limit)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Reclamations filed by the caller.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_reclamations() -> Result<Vec<Reclamation>, ServerFnError> {
    let claims = require_auth()?;
    let limit = crate::config::dashboard_limits().reclamations;
    crate::repo::reclamation::list_for_user(get_db().await, claims.sub, limit)
        .await
        .map_err(|e| e.into_server_fn_error())
}
