use dioxus::prelude::*;

use crate::content::PROFILE;
use crate::hooks::NavigationState;
use crate::section::SectionId;

#[component]
pub fn Hero() -> Element {
    let mut nav = use_context::<NavigationState>();

    let first = PROFILE.name_first;
    let last = PROFILE.name_last;
    let tagline = PROFILE.tagline;
    let intro = PROFILE.intro;
    let email = PROFILE.email;

    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-inner",
                div { class: "hero-copy",
                    div { class: "hero-badge", "{tagline}" }
                    h1 { class: "hero-title",
                        "{first}"
                        br {}
                        span { class: "accent", "{last}" }
                    }
                    p { class: "hero-intro", "{intro}" }

                    div { class: "hero-actions",
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| nav.scroll_to_section(SectionId::Projects),
                            "View Work ›"
                        }
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| nav.scroll_to_section(SectionId::Contact),
                            "Contact Me"
                        }
                    }

                    div { class: "hero-social",
                        a {
                            href: PROFILE.github_url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "GitHub"
                        }
                        a {
                            href: PROFILE.linkedin_url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "LinkedIn"
                        }
                        a { href: "mailto:{email}", "Email" }
                    }
                }

                div { class: "hero-card",
                    div { class: "hero-card-icon", "</>" }
                    h3 { "Modern Development" }
                    p { class: "muted", "Laravel • React • MySQL" }
                }
            }
        }
    }
}
