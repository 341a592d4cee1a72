//! Scroll-synchronised navigation highlighting.

use crate::animation::Teardown;
use crate::constants::{
    NAV_CONDENSE_THRESHOLD_PX, NAV_SCROLL_OFFSET_PX, PROBE_OFFSET_PX, SCROLL_TOP_THRESHOLD_PX,
};
use std::collections::HashMap;

/// Vertical extent of a section, relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorRect {
    pub top: f32,
    pub bottom: f32,
}

impl AnchorRect {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    /// True if the horizontal line at `y` lies within `[top, bottom]`.
    pub fn straddles(&self, y: f32) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// Read-only lookup from section identifier to its current rectangle.
///
/// A missing identifier is "does not match", never an error.
pub trait SectionAnchors {
    fn anchor_rect(&self, id: &str) -> Option<AnchorRect>;
}

impl SectionAnchors for HashMap<String, AnchorRect> {
    fn anchor_rect(&self, id: &str) -> Option<AnchorRect> {
        self.get(id).copied()
    }
}

impl<F> SectionAnchors for F
where
    F: Fn(&str) -> Option<AnchorRect>,
{
    fn anchor_rect(&self, id: &str) -> Option<AnchorRect> {
        self(id)
    }
}

/// First section, in declaration order, whose rectangle straddles `probe`.
pub fn resolve_active<'a, A>(sections: &'a [String], anchors: &A, probe: f32) -> Option<&'a str>
where
    A: SectionAnchors + ?Sized,
{
    sections
        .iter()
        .find(|id| {
            anchors
                .anchor_rect(id)
                .is_some_and(|rect| rect.straddles(probe))
        })
        .map(String::as_str)
}

/// Everything the navigation chrome derives from one scroll position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Highlighted navigation entry
    pub active: Option<String>,
    /// Page scrolled past the chrome threshold
    pub nav_condensed: bool,
    /// Page scrolled far enough to offer a return-to-top control
    pub show_scroll_top: bool,
}

/// Derives [`ScrollState`] from scroll events with a full re-scan each time.
#[derive(Debug, Clone)]
pub struct ScrollSectionTracker {
    sections: Vec<String>,
    probe_offset: f32,
    state: ScrollState,
    listening: bool,
}

impl ScrollSectionTracker {
    /// Tracker over `sections`, in navigation order.
    pub fn new<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: sections.into_iter().map(Into::into).collect(),
            probe_offset: PROBE_OFFSET_PX,
            state: ScrollState::default(),
            listening: false,
        }
    }

    pub fn with_probe_offset(mut self, probe_offset: f32) -> Self {
        self.probe_offset = probe_offset;
        self
    }

    /// Starts listening and derives the initial state.
    pub fn mount<A: SectionAnchors + ?Sized>(&mut self, scroll_y: f32, anchors: &A) -> &ScrollState {
        self.listening = true;
        self.recompute(scroll_y, anchors);
        &self.state
    }

    /// Scroll handler. Events after teardown are ignored.
    pub fn on_scroll<A: SectionAnchors + ?Sized>(&mut self, scroll_y: f32, anchors: &A) -> &ScrollState {
        if self.listening {
            self.recompute(scroll_y, anchors);
        }
        &self.state
    }

    fn recompute<A: SectionAnchors + ?Sized>(&mut self, scroll_y: f32, anchors: &A) {
        let active = resolve_active(&self.sections, anchors, self.probe_offset).map(str::to_string);
        if active != self.state.active {
            tracing::debug!(from = ?self.state.active, to = ?active, "active section changed");
        }
        self.state = ScrollState {
            active,
            nav_condensed: scroll_y > NAV_CONDENSE_THRESHOLD_PX,
            show_scroll_top: scroll_y > SCROLL_TOP_THRESHOLD_PX,
        };
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn active_section(&self) -> Option<&str> {
        self.state.active.as_deref()
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Absolute scroll position that brings `id` just below the fixed header.
    pub fn nav_scroll_target<A: SectionAnchors + ?Sized>(
        &self,
        id: &str,
        scroll_y: f32,
        anchors: &A,
    ) -> Option<f32> {
        anchors
            .anchor_rect(id)
            .map(|rect| (rect.top + scroll_y - NAV_SCROLL_OFFSET_PX).max(0.0))
    }
}

impl Teardown for ScrollSectionTracker {
    fn teardown(&mut self) {
        self.listening = false;
    }

    fn has_active_resources(&self) -> bool {
        self.listening
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sections() -> Vec<String> {
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    }

    /// A=[0,200], B=[200,800], C=[800,1400] in page coordinates.
    fn page_anchors(scroll_y: f32) -> HashMap<String, AnchorRect> {
        [("a", 0.0, 200.0), ("b", 200.0, 800.0), ("c", 800.0, 1400.0)]
            .into_iter()
            .map(|(id, top, bottom)| {
                (id.to_string(), AnchorRect::new(top - scroll_y, bottom - scroll_y))
            })
            .collect()
    }

    #[test]
    fn test_probe_inside_first_section() {
        let anchors = page_anchors(0.0);
        assert_eq!(resolve_active(&sections(), &anchors, 150.0), Some("a"));
    }

    #[test]
    fn test_probe_inside_last_section() {
        let anchors = page_anchors(0.0);
        assert_eq!(resolve_active(&sections(), &anchors, 850.0), Some("c"));
    }

    #[test]
    fn test_shared_edge_prefers_declaration_order() {
        let anchors = page_anchors(0.0);
        assert_eq!(resolve_active(&sections(), &anchors, 200.0), Some("a"));
    }

    #[test]
    fn test_zero_height_and_overlapping_first_match_wins() {
        let mut anchors = HashMap::new();
        anchors.insert("a".to_string(), AnchorRect::new(150.0, 150.0));
        anchors.insert("b".to_string(), AnchorRect::new(100.0, 400.0));
        assert_eq!(resolve_active(&sections(), &anchors, 150.0), Some("a"));
    }

    #[test]
    fn test_no_match_is_none() {
        let anchors = page_anchors(-500.0);
        assert_eq!(resolve_active(&sections(), &anchors, 150.0), None);
    }

    #[test]
    fn test_missing_anchor_is_skipped() {
        let lookup = |id: &str| match id {
            "c" => Some(AnchorRect::new(0.0, 300.0)),
            _ => None,
        };
        assert_eq!(resolve_active(&sections(), &lookup, 150.0), Some("c"));
    }

    #[test]
    fn test_tracker_follows_scroll_and_thresholds() {
        let mut tracker = ScrollSectionTracker::new(["a", "b", "c"]);

        let state = tracker.mount(0.0, &page_anchors(0.0)).clone();
        assert_eq!(
            state,
            ScrollState {
                active: Some("a".to_string()),
                nav_condensed: false,
                show_scroll_top: false,
            }
        );

        let state = tracker.on_scroll(300.0, &page_anchors(300.0)).clone();
        assert_eq!(state.active.as_deref(), Some("b"));
        assert!(state.nav_condensed);
        assert!(!state.show_scroll_top);

        // Coalesced jump straight to the bottom.
        let state = tracker.on_scroll(1000.0, &page_anchors(1000.0)).clone();
        assert_eq!(state.active.as_deref(), Some("c"));
        assert!(state.show_scroll_top);
    }

    #[test]
    fn test_thresholds_are_strict() {
        let mut tracker = ScrollSectionTracker::new(["a"]);
        let state = tracker.mount(50.0, &page_anchors(50.0)).clone();
        assert!(!state.nav_condensed);
        let state = tracker.on_scroll(400.0, &page_anchors(400.0)).clone();
        assert!(state.nav_condensed);
        assert!(!state.show_scroll_top);
    }

    #[test]
    fn test_rescan_is_idempotent() {
        let mut tracker = ScrollSectionTracker::new(["a", "b", "c"]);
        tracker.mount(300.0, &page_anchors(300.0));
        let first = tracker.state().clone();
        tracker.on_scroll(300.0, &page_anchors(300.0));
        assert_eq!(tracker.state(), &first);
    }

    #[test]
    fn test_events_after_teardown_are_ignored() {
        let mut tracker = ScrollSectionTracker::new(["a", "b", "c"]);
        tracker.mount(0.0, &page_anchors(0.0));
        tracker.teardown();
        tracker.teardown();
        assert!(!tracker.has_active_resources());

        tracker.on_scroll(1000.0, &page_anchors(1000.0));
        assert_eq!(tracker.active_section(), Some("a"));
    }

    #[test]
    fn test_nav_scroll_target_accounts_for_header() {
        let tracker = ScrollSectionTracker::new(["a", "b", "c"]);
        let anchors = page_anchors(100.0);
        assert_eq!(tracker.nav_scroll_target("b", 100.0, &anchors), Some(120.0));
        assert_eq!(tracker.nav_scroll_target("a", 100.0, &anchors), Some(0.0));
        assert_eq!(tracker.nav_scroll_target("missing", 100.0, &anchors), None);
    }
}
