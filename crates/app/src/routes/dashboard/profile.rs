use crate::ProfileState;
use dioxus::prelude::*;

/// Profile header: avatar, display name, handle and email of the held user.
#[component]
pub fn Profile() -> Element {
    let profile = use_context::<ProfileState>();
    let display_name = profile.display_name.read().clone();
    let initials = profile.initials.read().clone();
    let handle = profile.username.read().clone();
    let email = profile.email.read().clone();
    let avatar_url = profile.avatar_url.read().clone();

    rsx! {
        div { class: "profile",
            div { class: "profile-avatar",
                if let Some(url) = avatar_url {
                    img { src: "{url}", alt: "{display_name}" }
                } else {
                    "{initials}"
                }
            }
            div {
                div { class: "profile-name", "{display_name}" }
                if let Some(handle) = handle {
                    div { class: "profile-detail", "@{handle}" }
                }
                if let Some(email) = email {
                    div { class: "profile-detail", "{email}" }
                }
            }
        }
    }
}
