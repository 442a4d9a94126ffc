use dioxus::prelude::*;
use tracing::debug;

use crate::dom;
use crate::section::SectionId;
use crate::tracker::{NavState, TrackerConfig};

/// Navigation UI state shared through context: the tracked `NavState`
/// behind a signal, plus the tracker tuning it is driven with.
#[derive(Clone, Copy)]
pub struct NavigationState {
    state: Signal<NavState>,
    config: TrackerConfig,
}

pub fn use_nav_state() -> NavigationState {
    let state = use_signal(NavState::default);

    NavigationState {
        state,
        config: TrackerConfig::default(),
    }
}

impl NavigationState {
    pub fn is_menu_open(&self) -> bool {
        self.state.read().menu_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.state.read().scrolled
    }

    pub fn active_section(&self) -> SectionId {
        self.state.read().active
    }

    /// Scroll-event handler: refresh `scrolled` and the active section from
    /// the live viewport geometry.
    pub fn handle_scroll(&mut self) {
        let offset = dom::scroll_offset();
        self.state
            .write()
            .on_scroll(&self.config, offset, dom::section_top);
    }

    /// Nav-click handler: smooth-scroll to `target` and collapse the mobile
    /// menu. A target whose region is not mounted is ignored.
    pub fn scroll_to_section(&mut self, target: SectionId) {
        let mounted = dom::section_mounted(target);
        if let Some(command) = self.state.write().navigate(target, mounted) {
            debug!(section = command.anchor(), "navigating to section");
            dom::scroll_into_view(command);
        }
    }

    /// Mobile menu button handler.
    pub fn toggle_menu(&mut self) {
        self.state.write().toggle_menu();
        debug!(open = self.is_menu_open(), "menu toggled");
    }
}
