use crate::format_helpers::format_datetime_human;
use dioxus::prelude::*;
use server::api::list_reclamations;
use shared_types::{AppError, ReclamationStatus};
use shared_ui::{Badge, BadgeTone};

fn status_tone(status: ReclamationStatus) -> BadgeTone {
    match status {
        ReclamationStatus::Open => BadgeTone::Neutral,
        ReclamationStatus::InProgress => BadgeTone::Warning,
        ReclamationStatus::Resolved => BadgeTone::Success,
        ReclamationStatus::Rejected => BadgeTone::Danger,
    }
}

/// Reclamations filed by the signed-in user, newest first.
#[component]
pub fn ReclamationsPanel() -> Element {
    let reclamations = use_resource(list_reclamations);

    let state = reclamations.read().clone();
    match state {
        None => rsx! { p { class: "panel-empty", "Loading reclamations..." } },
        Some(Err(err)) => rsx! {
            p { class: "panel-error", "{AppError::friendly_message(&err.to_string())}" }
        },
        Some(Ok(items)) if items.is_empty() => rsx! {
            p { class: "panel-empty", "You have not filed any reclamations." }
        },
        Some(Ok(items)) => rsx! {
            ul { class: "panel-list",
                for item in items {
                    li {
                        key: "{item.id}",
                        class: "panel-item",
                        "data-status": item.status().as_str(),
                        div { class: "panel-item-header",
                            span { class: "panel-item-title", "{item.subject}" }
                            Badge { tone: status_tone(item.status()), "{item.status().label()}" }
                        }
                        p { "{item.description}" }
                        span { class: "panel-item-meta", "{format_datetime_human(&item.created_at)}" }
                    }
                }
            }
        },
    }
}
