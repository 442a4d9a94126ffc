//! Thin boundary over the browser viewport.
//!
//! Every lookup here is fallible in the same quiet way: an absent window,
//! document, or section element degrades to `None`/no-op. The page never
//! surfaces a DOM failure to the user.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::section::SectionId;

/// Current vertical scroll offset of the viewport, 0.0 when unavailable.
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Viewport-relative top edge of a section's region, or `None` when the
/// section is not mounted.
pub fn section_top(id: SectionId) -> Option<f64> {
    let rect = find_section(id)?.get_bounding_client_rect();
    Some(rect.top())
}

/// Whether the section's DOM region currently exists.
pub fn section_mounted(id: SectionId) -> bool {
    find_section(id).is_some()
}

/// Animate the viewport so the section's top edge comes into view. Silently
/// does nothing when the section is not mounted.
pub fn scroll_into_view(id: SectionId) {
    if let Some(element) = find_section(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn find_section(id: SectionId) -> Option<web_sys::Element> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id.anchor())
}

/// Owns the window `scroll` subscription. The handler stays registered for
/// as long as this guard lives; dropping it removes the listener, so a page
/// holding it in a hook releases the subscription on unmount.
pub struct ScrollListener {
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn attach(handler: impl FnMut() + 'static) -> Self {
        let callback = Closure::<dyn FnMut()>::new(handler);
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
        }
        Self { callback }
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
        }
    }
}
