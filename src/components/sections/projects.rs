use dioxus::prelude::*;

use crate::content::{PROFILE, PROJECTS};

#[component]
pub fn Projects() -> Element {
    rsx! {
        section { id: "projects", class: "section",
            div { class: "section-inner",
                div { class: "section-header",
                    h2 { class: "section-heading", "Featured Projects" }
                    a {
                        class: "section-header-link",
                        href: PROFILE.github_url,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "View All Github ↗"
                    }
                }

                div { class: "project-grid",
                    for project in PROJECTS.iter() {
                        div { key: "{project.title}", class: "card project-card",
                            div { class: "project-header",
                                h3 { "{project.title}" }
                                a {
                                    href: project.link,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "↗"
                                }
                            }
                            p { class: "muted", "{project.description}" }
                            div { class: "tag-row",
                                for tag in project.tech.iter() {
                                    span { class: "tag", "{tag}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
