use crate::format_helpers::{format_datetime_human, format_snake_case_title};
use dioxus::prelude::*;
use server::api::list_activities;
use shared_types::AppError;

/// Recent activity of the signed-in user.
#[component]
pub fn ActivitiesPanel() -> Element {
    let activities = use_resource(list_activities);

    let state = activities.read().clone();
    match state {
        None => rsx! { p { class: "panel-empty", "Loading activities..." } },
        Some(Err(err)) => rsx! {
            p { class: "panel-error", "{AppError::friendly_message(&err.to_string())}" }
        },
        Some(Ok(items)) if items.is_empty() => rsx! {
            p { class: "panel-empty", "No activity yet." }
        },
        Some(Ok(items)) => rsx! {
            ul { class: "panel-list",
                for item in items {
                    li { key: "{item.id}", class: "panel-item",
                        div { class: "panel-item-header",
                            span { class: "panel-item-title", "{format_snake_case_title(&item.action)}" }
                            span { class: "panel-item-meta", "{format_datetime_human(&item.created_at)}" }
                        }
                        if !item.description.is_empty() {
                            p { "{item.description}" }
                        }
                    }
                }
            }
        },
    }
}
