use crate::format_helpers::format_datetime_human;
use dioxus::prelude::*;
use server::api::{list_notifications, mark_notification_read};
use shared_types::{unread_count, AppError};

/// Notifications for `user_id`, with a "mark read" action on unread items.
///
/// `on_notice_read` fires once for every item that actually flipped from
/// unread to read.
#[component]
pub fn NotificationsPanel(user_id: Option<i64>, on_notice_read: EventHandler<()>) -> Element {
    let mut notifications = use_resource(use_reactive!(|(user_id,)| async move {
        match user_id {
            Some(id) => list_notifications(id).await.map(Some),
            None => Ok(None),
        }
    }));

    let Some(result) = notifications.read().clone() else {
        return rsx! { p { class: "panel-empty", "Loading notifications..." } };
    };

    match result {
        Ok(None) => rsx! {
            p { class: "panel-empty", "Sign in to see your notifications." }
        },
        Err(err) => rsx! {
            p { class: "panel-error", "{AppError::friendly_message(&err.to_string())}" }
        },
        Ok(Some(items)) if items.is_empty() => rsx! {
            p { class: "panel-empty", "You have no notifications." }
        },
        Ok(Some(items)) => {
            let unread = unread_count(&items);
            rsx! {
                p { class: "panel-item-meta", "{unread} unread" }
                ul { class: "panel-list",
                    for item in items {
                        li {
                            key: "{item.id}",
                            class: "panel-item",
                            "data-read": if item.read { "true" } else { "false" },
                            div { class: "panel-item-header",
                                span { class: "panel-item-title", "{item.title}" }
                                span { class: "panel-item-meta", "{format_datetime_human(&item.created_at)}" }
                            }
                            p { "{item.body}" }
                            if !item.read {
                                button {
                                    class: "panel-action",
                                    r#type: "button",
                                    onclick: move |_| {
                                        let id = item.id;
                                        spawn(async move {
                                            match mark_notification_read(id).await {
                                                Ok(changed) => {
                                                    if changed {
                                                        on_notice_read.call(());
                                                    }
                                                    notifications.restart();
                                                }
                                                Err(e) => {
                                                    tracing::warn!(error = %e, %id, "Failed to mark notification read");
                                                }
                                            }
                                        });
                                    },
                                    "Mark as read"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
