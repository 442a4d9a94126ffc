//! Scroll-position tracking and navigation state.
//!
//! Everything in this module is pure: the DOM is abstracted behind a
//! `top_of` closure returning each section's viewport-relative top edge
//! (`None` when the section is not mounted), so the transitions can be
//! exercised without a browser.

use crate::section::SectionId;

/// Tuning for the scroll tracker. The defaults match the layout the page
/// ships with; changing them changes which section counts as "in view".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerConfig {
    /// Scroll offset above which the nav bar switches to its compact
    /// (scrolled) treatment. Strictly greater-than: an offset of exactly
    /// this value does not count as scrolled.
    pub scrolled_threshold: f64,
    /// Upper edge of the activation band, inclusive.
    pub band_top: f64,
    /// Lower edge of the activation band, exclusive.
    pub band_bottom: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: 50.0,
            band_top: -100.0,
            band_bottom: 300.0,
        }
    }
}

impl TrackerConfig {
    fn in_band(&self, top: f64) -> bool {
        top >= self.band_top && top < self.band_bottom
    }
}

/// Transient UI state driven by the two event sources (scroll, click).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavState {
    /// Mobile menu visibility.
    pub menu_open: bool,
    /// Currently highlighted nav item. Always a valid section; starts at
    /// the first section before any scroll event has fired.
    pub active: SectionId,
    /// Whether the page has scrolled past the nav-bar threshold.
    pub scrolled: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            menu_open: false,
            active: SectionId::Home,
            scrolled: false,
        }
    }
}

impl NavState {
    /// Recompute `scrolled` and `active` from the current scroll offset.
    ///
    /// Scans the sections in source order and activates the first one whose
    /// top edge falls inside the activation band. If no section is in the
    /// band (mid-way through a tall section), `active` keeps its previous
    /// value. Unmounted sections (`top_of` returns `None`) are skipped.
    pub fn on_scroll<F>(&mut self, config: &TrackerConfig, offset: f64, top_of: F)
    where
        F: Fn(SectionId) -> Option<f64>,
    {
        self.scrolled = offset > config.scrolled_threshold;

        let current = SectionId::ALL
            .into_iter()
            .find(|&id| top_of(id).is_some_and(|top| config.in_band(top)));

        if let Some(id) = current {
            self.active = id;
        }
    }

    /// Handle a nav click on `target`. When the target's region is mounted,
    /// closes the mobile menu (whether or not it was open) and returns the
    /// scroll command the caller must issue. When the region is absent the
    /// whole call is a no-op and no command is returned.
    pub fn navigate(&mut self, target: SectionId, mounted: bool) -> Option<SectionId> {
        if !mounted {
            return None;
        }
        self.menu_open = false;
        Some(target)
    }

    /// Flip the mobile menu open/closed.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_top(section: SectionId, top: f64) -> impl Fn(SectionId) -> Option<f64> {
        move |id| {
            if id == section {
                Some(top)
            } else {
                Some(5000.0)
            }
        }
    }

    #[test]
    fn default_state_starts_at_home() {
        let state = NavState::default();
        assert_eq!(state.active, SectionId::Home);
        assert!(!state.menu_open);
        assert!(!state.scrolled);
    }

    #[test]
    fn section_in_band_becomes_active() {
        let mut state = NavState::default();
        state.on_scroll(
            &TrackerConfig::default(),
            800.0,
            single_top(SectionId::Skills, 0.0),
        );
        assert_eq!(state.active, SectionId::Skills);
    }

    #[test]
    fn no_section_in_band_keeps_previous_active() {
        let mut state = NavState::default();
        let config = TrackerConfig::default();
        state.on_scroll(&config, 800.0, single_top(SectionId::Projects, 150.0));
        assert_eq!(state.active, SectionId::Projects);

        // Every section far off-screen: the highlight must not move.
        state.on_scroll(&config, 1200.0, |_| Some(5000.0));
        assert_eq!(state.active, SectionId::Projects);
    }

    #[test]
    fn band_edges() {
        let config = TrackerConfig::default();
        let mut state = NavState::default();

        // -100 is inside the band (inclusive).
        state.on_scroll(&config, 500.0, single_top(SectionId::About, -100.0));
        assert_eq!(state.active, SectionId::About);

        // 300 is outside (exclusive); highlight stays put.
        state.on_scroll(&config, 500.0, single_top(SectionId::Contact, 300.0));
        assert_eq!(state.active, SectionId::About);

        // Just below -100 is outside too.
        state.on_scroll(&config, 500.0, single_top(SectionId::Contact, -100.1));
        assert_eq!(state.active, SectionId::About);
    }

    #[test]
    fn first_section_in_source_order_wins() {
        let mut state = NavState::default();
        // Both About and Skills sit in the band; About comes first on the page.
        state.on_scroll(&TrackerConfig::default(), 600.0, |id| match id {
            SectionId::About => Some(250.0),
            SectionId::Skills => Some(10.0),
            _ => Some(5000.0),
        });
        assert_eq!(state.active, SectionId::About);
    }

    #[test]
    fn unmounted_sections_are_skipped() {
        let mut state = NavState::default();
        state.on_scroll(&TrackerConfig::default(), 600.0, |id| match id {
            SectionId::Home | SectionId::About => None,
            SectionId::Skills => Some(50.0),
            _ => Some(5000.0),
        });
        assert_eq!(state.active, SectionId::Skills);
    }

    #[test]
    fn scrolled_threshold_boundary() {
        let config = TrackerConfig::default();
        let mut state = NavState::default();

        state.on_scroll(&config, 0.0, |_| None);
        assert!(!state.scrolled);

        state.on_scroll(&config, 50.0, |_| None);
        assert!(!state.scrolled);

        state.on_scroll(&config, 51.0, |_| None);
        assert!(state.scrolled);

        // Scrolling back up clears the flag again.
        state.on_scroll(&config, 10.0, |_| None);
        assert!(!state.scrolled);
    }

    #[test]
    fn navigate_closes_menu_and_issues_command() {
        let mut state = NavState {
            menu_open: true,
            ..NavState::default()
        };
        let command = state.navigate(SectionId::Contact, true);
        assert_eq!(command, Some(SectionId::Contact));
        assert!(!state.menu_open);
    }

    #[test]
    fn navigate_closes_menu_even_when_already_closed() {
        let mut state = NavState::default();
        let command = state.navigate(SectionId::Projects, true);
        assert_eq!(command, Some(SectionId::Projects));
        assert!(!state.menu_open);
    }

    #[test]
    fn navigate_to_unmounted_section_is_a_noop() {
        let mut state = NavState {
            menu_open: true,
            active: SectionId::Skills,
            scrolled: true,
        };
        let before = state;
        let command = state.navigate(SectionId::Contact, false);
        assert_eq!(command, None);
        assert_eq!(state, before);
    }

    #[test]
    fn menu_toggle_round_trips() {
        let mut state = NavState::default();
        state.toggle_menu();
        assert!(state.menu_open);
        state.toggle_menu();
        assert!(!state.menu_open);
    }
}
