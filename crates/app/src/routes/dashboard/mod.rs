mod activities;
mod notifications;
mod profile;
mod reclamations;

use crate::auth::use_auth;
use crate::user_sync::{after_notice_read, use_user_notices_sync};
use crate::viewport::use_viewport_mode;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClock, LdFileText};
use dioxus_free_icons::Icon;
use shared_types::{layout_name, Section};
use shared_ui::{DashboardSection, NoticeBadge};

use activities::ActivitiesPanel;
use notifications::NotificationsPanel;
use profile::Profile;
use reclamations::ReclamationsPanel;

/// The signed-in user's dashboard: profile on top, then the notifications,
/// activities and reclamations panels.
///
/// Narrow viewports render the panels as an accordion, wide ones as tabs.
#[component]
pub fn UserDashboard() -> Element {
    let auth = use_auth();
    let viewport = use_viewport_mode();
    let mut active = use_signal(Section::default);
    let mut notices_count = use_user_notices_sync(auth);

    let mode = viewport();
    let transition = Section::transition_for_measured(mode);
    let on_activate = move |target: Section| {
        let next = transition(*active.peek(), target);
        active.set(next);
    };

    let current = active();
    let user_id = auth.current_user.read().as_ref().map(|u| u.id);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-container", "data-layout": layout_name(mode),
            div { class: "dashboard-card",
                div { class: "dashboard-profile",
                    Profile {}
                }

                div { class: "dashboard-sections",
                    DashboardSection {
                        section: Section::Notifications,
                        active: current,
                        on_activate,
                        icon: rsx! { NoticeBadge { count: notices_count() } },
                        NotificationsPanel {
                            user_id,
                            on_notice_read: move |_| {
                                let next = after_notice_read(*notices_count.peek());
                                notices_count.set(next);
                            },
                        }
                    }

                    DashboardSection {
                        section: Section::Activities,
                        active: current,
                        on_activate,
                        icon: rsx! { Icon::<LdClock> { icon: LdClock, width: 20, height: 20 } },
                        ActivitiesPanel {}
                    }

                    DashboardSection {
                        section: Section::Reclamations,
                        active: current,
                        on_activate,
                        icon: rsx! { Icon::<LdFileText> { icon: LdFileText, width: 20, height: 20 } },
                        ReclamationsPanel {}
                    }
                }
            }
        }
    }
}
