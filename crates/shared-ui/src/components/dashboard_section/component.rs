use dioxus::prelude::*;
use shared_types::{section_span, Section};

/// One collapsible dashboard panel: a header button and, when `section` is
/// the active one, its body.
///
/// The header reports clicks through `on_activate`; what a click does (toggle
/// or select) is decided by the caller.
#[component]
pub fn DashboardSection(
    section: Section,
    active: Section,
    on_activate: EventHandler<Section>,
    icon: Element,
    children: Element,
) -> Element {
    let is_active = active == section;
    let accent = if is_active { section.accent() } else { "none" };
    let key = section.as_str();
    let title = section.title();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "dashboard-section",
            id: "dashboard-section-{key}",
            "data-section": key,
            "data-span": section_span(active, section),
            "data-active": if is_active { "true" } else { "false" },
            "data-accent": accent,

            div { class: "dashboard-section-accent" }
            button {
                class: "dashboard-section-title",
                r#type: "button",
                "aria-expanded": if is_active { "true" } else { "false" },
                onclick: move |_| on_activate.call(section),
                {icon}
                span { "{title}" }
            }
            if is_active {
                div { class: "dashboard-section-body", {children} }
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

    fn open_activities() -> Element {
        rsx! {
            DashboardSection {
                section: Section::Activities,
                active: Section::Activities,
                on_activate: move |_| {},
                icon: rsx! { span { "*" } },
                p { "activity body" }
            }
        }
    }

    fn closed_activities() -> Element {
        rsx! {
            DashboardSection {
                section: Section::Activities,
                active: Section::Notifications,
                on_activate: move |_| {},
                icon: rsx! { span { "*" } },
                p { "activity body" }
            }
        }
    }

    #[test]
    fn active_section_renders_body() {
        let html = render(open_activities);
        assert!(html.contains("activity body"));
        assert!(html.contains(r#"data-active="true""#));
        assert!(html.contains(r#"data-span="full""#));
        assert!(html.contains(r#"data-accent="yellow""#));
        assert!(html.contains("Activities"));
    }

    #[test]
    fn inactive_section_hides_body() {
        let html = render(closed_activities);
        assert!(!html.contains("activity body"));
        assert!(html.contains(r#"data-active="false""#));
        assert!(html.contains(r#"data-span="third""#));
        assert!(html.contains(r#"data-accent="none""#));
        assert!(html.contains("Activities"));
    }
}
