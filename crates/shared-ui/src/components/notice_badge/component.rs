use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdBell;
use dioxus_free_icons::Icon;
use shared_types::notice_badge_label;

/// Bell icon with the unread count. The counter is omitted at zero and
/// capped at "9+".
#[component]
pub fn NoticeBadge(count: u32) -> Element {
    let label = notice_badge_label(count);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { class: "notice-badge",
            Icon::<LdBell> { icon: LdBell, width: 20, height: 20 }
            if let Some(label) = label {
                span { class: "notice-badge-count", "{label}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn zero_hides_counter() {
        let html = render(|| rsx! { NoticeBadge { count: 0 } });
        assert!(html.contains("notice-badge"));
        assert!(!html.contains("notice-badge-count"));
    }

    #[test]
    fn small_count_is_shown() {
        let html = render(|| rsx! { NoticeBadge { count: 3 } });
        assert!(html.contains("notice-badge-count"));
        assert!(html.contains(">3<"));
    }

    #[test]
    fn large_count_is_capped() {
        let html = render(|| rsx! { NoticeBadge { count: 42 } });
        assert!(html.contains("9+"));
        assert!(!html.contains(">42<"));
    }
}
