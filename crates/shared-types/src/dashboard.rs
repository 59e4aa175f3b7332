//! Section selection and viewport classification for the user dashboard.
//!
//! The dashboard shows at most one expanded panel. On narrow viewports the
//! panels behave like an accordion (clicking the open header closes it); on
//! wide viewports they behave like tabs (clicking always selects).

use serde::{Deserialize, Serialize};

/// Widths strictly below this many logical pixels are narrow.
pub const NARROW_BREAKPOINT_PX: u32 = 768;

/// Counts above this value are shown as `"9+"` on the notice badge.
pub const NOTICE_BADGE_CAP: u32 = 9;

/// Layout branch derived from the viewport width.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ViewportMode {
    Narrow,
    Wide,
}

impl ViewportMode {
    pub fn from_width(width: u32) -> Self {
        if width < NARROW_BREAKPOINT_PX {
            ViewportMode::Narrow
        } else {
            ViewportMode::Wide
        }
    }

    /// Value for the `data-layout` attribute.
    pub fn layout_name(self) -> &'static str {
        match self {
            ViewportMode::Narrow => "accordion",
            ViewportMode::Wide => "tabs",
        }
    }
}

/// `data-layout` value for a possibly unmeasured viewport.
pub fn layout_name(mode: Option<ViewportMode>) -> &'static str {
    mode.map_or("pending", ViewportMode::layout_name)
}

/// The expanded dashboard panel. `Dashboard` means nothing is open.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Notifications,
    Activities,
    Reclamations,
}

/// A header click handler: current section and clicked section in, next section out.
pub type SectionTransition = fn(Section, Section) -> Section;

impl Section {
    /// Accordion rule: clicking the open section collapses it.
    pub fn toggle(self, target: Section) -> Section {
        if self == target {
            Section::Dashboard
        } else {
            target
        }
    }

    /// Tab rule: clicking always selects, there is no way back to `Dashboard`.
    pub fn select(self, target: Section) -> Section {
        target
    }

    /// Rule while the viewport width is still unknown: clicks change nothing.
    pub fn hold(self, _target: Section) -> Section {
        self
    }

    /// The click rule for a layout mode. Chosen once per render and shared by
    /// every header.
    pub fn transition_for(mode: ViewportMode) -> SectionTransition {
        match mode {
            ViewportMode::Narrow => Section::toggle,
            ViewportMode::Wide => Section::select,
        }
    }

    /// Like [`Section::transition_for`], but holds the current section until
    /// a width has been measured.
    pub fn transition_for_measured(mode: Option<ViewportMode>) -> SectionTransition {
        mode.map_or(Section::hold as SectionTransition, Section::transition_for)
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Notifications => "Notifications",
            Section::Activities => "Activities",
            Section::Reclamations => "Reclamations",
        }
    }

    /// Stable key used in DOM ids and data attributes.
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Notifications => "notifications",
            Section::Activities => "activities",
            Section::Reclamations => "reclamations",
        }
    }

    /// Accent tone painted on the header of the open section.
    pub fn accent(self) -> &'static str {
        match self {
            Section::Dashboard => "none",
            Section::Notifications => "green",
            Section::Activities => "yellow",
            Section::Reclamations => "red",
        }
    }
}

/// Row span of a panel: the open one takes the whole row.
pub fn section_span(active: Section, section: Section) -> &'static str {
    if active == section {
        "full"
    } else {
        "third"
    }
}

/// Text for the notice badge, or `None` when the badge is hidden.
pub fn notice_badge_label(count: u32) -> Option<String> {
    match count {
        0 => None,
        n if n > NOTICE_BADGE_CAP => Some(format!("{NOTICE_BADGE_CAP}+")),
        n => Some(n.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PANEL_SECTIONS: [Section; 3] = [
        Section::Notifications,
        Section::Activities,
        Section::Reclamations,
    ];

    /// Replay clicks through one mode's rule, checking exclusivity after each.
    fn replay(mode: ViewportMode, clicks: &[Section]) -> Vec<Section> {
        let mut current = Section::default();
        let mut trace = Vec::with_capacity(clicks.len());
        for &click in clicks {
            current = Section::transition_for(mode)(current, click);
            let open = PANEL_SECTIONS.iter().filter(|s| **s == current).count();
            assert!(open <= 1);
            trace.push(current);
        }
        trace
    }

    #[test]
    fn viewport_breakpoint_boundaries() {
        assert_eq!(ViewportMode::from_width(767), ViewportMode::Narrow);
        assert_eq!(ViewportMode::from_width(768), ViewportMode::Wide);
        assert_eq!(ViewportMode::from_width(0), ViewportMode::Narrow);
        assert_eq!(ViewportMode::from_width(1920), ViewportMode::Wide);
    }

    #[test]
    fn viewport_layout_names() {
        assert_eq!(layout_name(Some(ViewportMode::Narrow)), "accordion");
        assert_eq!(layout_name(Some(ViewportMode::Wide)), "tabs");
        assert_eq!(layout_name(None), "pending");
    }

    #[test]
    fn unmeasured_viewport_ignores_clicks() {
        let rule = Section::transition_for_measured(None);
        assert_eq!(rule(Section::Dashboard, Section::Activities), Section::Dashboard);
        assert_eq!(rule(Section::Notifications, Section::Reclamations), Section::Notifications);
    }

    #[test]
    fn measured_viewport_uses_mode_rule() {
        let narrow = Section::transition_for_measured(Some(ViewportMode::Narrow));
        assert_eq!(narrow(Section::Activities, Section::Activities), Section::Dashboard);
        let wide = Section::transition_for_measured(Some(ViewportMode::Wide));
        assert_eq!(wide(Section::Activities, Section::Activities), Section::Activities);
    }

    #[test]
    fn initial_section_is_dashboard() {
        assert_eq!(Section::default(), Section::Dashboard);
    }

    #[test]
    fn toggle_opens_then_closes() {
        let open = Section::Dashboard.toggle(Section::Activities);
        assert_eq!(open, Section::Activities);
        assert_eq!(open.toggle(Section::Activities), Section::Dashboard);
    }

    #[test]
    fn toggle_switches_between_sections() {
        assert_eq!(
            Section::Notifications.toggle(Section::Reclamations),
            Section::Reclamations
        );
    }

    #[test]
    fn narrow_mode_click_sequence() {
        let trace = replay(
            ViewportMode::Narrow,
            &[
                Section::Notifications,
                Section::Notifications,
                Section::Activities,
                Section::Reclamations,
                Section::Reclamations,
                Section::Reclamations,
            ],
        );
        assert_eq!(
            trace,
            vec![
                Section::Notifications,
                Section::Dashboard,
                Section::Activities,
                Section::Reclamations,
                Section::Dashboard,
                Section::Reclamations,
            ]
        );
    }

    #[test]
    fn wide_mode_click_is_idempotent() {
        for header in PANEL_SECTIONS {
            let trace = replay(ViewportMode::Wide, &[header, header, header]);
            assert!(trace.iter().all(|s| *s == header));
        }
    }

    #[test]
    fn wide_mode_never_collapses() {
        let trace = replay(
            ViewportMode::Wide,
            &[
                Section::Activities,
                Section::Notifications,
                Section::Notifications,
                Section::Reclamations,
            ],
        );
        assert!(trace.iter().all(|s| *s != Section::Dashboard));
        assert_eq!(trace.last(), Some(&Section::Reclamations));
    }

    #[test]
    fn transition_for_matches_direct_rules() {
        let all = [
            Section::Dashboard,
            Section::Notifications,
            Section::Activities,
            Section::Reclamations,
        ];
        for current in all {
            for target in PANEL_SECTIONS {
                assert_eq!(
                    Section::transition_for(ViewportMode::Narrow)(current, target),
                    current.toggle(target)
                );
                assert_eq!(
                    Section::transition_for(ViewportMode::Wide)(current, target),
                    target
                );
            }
        }
    }

    #[test]
    fn section_metadata() {
        assert_eq!(Section::Notifications.title(), "Notifications");
        assert_eq!(Section::Reclamations.as_str(), "reclamations");
        assert_eq!(Section::Notifications.accent(), "green");
        assert_eq!(Section::Activities.accent(), "yellow");
        assert_eq!(Section::Reclamations.accent(), "red");
    }

    #[test]
    fn open_section_spans_full_row() {
        assert_eq!(section_span(Section::Activities, Section::Activities), "full");
        assert_eq!(section_span(Section::Activities, Section::Notifications), "third");
        assert_eq!(section_span(Section::Dashboard, Section::Reclamations), "third");
    }

    #[test]
    fn badge_label_hides_zero_and_caps() {
        assert_eq!(notice_badge_label(0), None);
        assert_eq!(notice_badge_label(1), Some("1".to_string()));
        assert_eq!(notice_badge_label(9), Some("9".to_string()));
        assert_eq!(notice_badge_label(10), Some("9+".to_string()));
        assert_eq!(notice_badge_label(250), Some("9+".to_string()));
    }
}
