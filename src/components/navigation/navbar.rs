use dioxus::prelude::*;

use crate::hooks::NavigationState;
use crate::section::SectionId;

/// Fixed top navigation: brand, desktop links, mobile hamburger with a
/// dropdown mirror of the same links. Switches to a compact treatment once
/// the page scrolls past the tracker threshold.
#[component]
pub fn NavBar() -> Element {
    let mut nav = use_context::<NavigationState>();
    let menu_open = nav.is_menu_open();

    rsx! {
        nav {
            class: if nav.is_scrolled() { "navbar navbar-scrolled" } else { "navbar" },

            div { class: "navbar-inner",
                div { class: "navbar-brand",
                    "MSH"
                    span { class: "brand-dot", "." }
                }

                // Desktop links
                div { class: "nav-links",
                    for id in SectionId::NAV {
                        NavLink { id }
                    }
                }

                // Mobile menu button
                button {
                    class: "menu-toggle",
                    onclick: move |_| nav.toggle_menu(),
                    if menu_open { "✕" } else { "☰" }
                }
            }

            // Mobile menu dropdown
            if menu_open {
                div { class: "mobile-menu",
                    for id in SectionId::NAV {
                        MobileNavLink { id }
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(id: SectionId) -> Element {
    let mut nav = use_context::<NavigationState>();
    let label = id.label();

    rsx! {
        button {
            class: if nav.active_section() == id { "nav-link nav-link-active" } else { "nav-link" },
            onclick: move |_| nav.scroll_to_section(id),
            "{label}"
        }
    }
}

#[component]
fn MobileNavLink(id: SectionId) -> Element {
    let mut nav = use_context::<NavigationState>();
    let label = id.label();

    rsx! {
        button {
            class: if nav.active_section() == id {
                "mobile-nav-link mobile-nav-link-active"
            } else {
                "mobile-nav-link"
            },
            onclick: move |_| nav.scroll_to_section(id),
            "{label}"
        }
    }
}
