use dioxus::prelude::*;

use crate::content::EXPERIENCE;

#[component]
pub fn Experience() -> Element {
    rsx! {
        section { id: "experience", class: "section section-alt",
            div { class: "section-inner",
                h2 { class: "section-heading", "Professional Experience" }

                div { class: "timeline",
                    for entry in EXPERIENCE.iter() {
                        div { key: "{entry.role}", class: "timeline-entry",
                            div {
                                class: if entry.current { "timeline-dot timeline-dot-current" } else { "timeline-dot" },
                            }
                            div { class: "card",
                                div { class: "timeline-header",
                                    div {
                                        h3 { "{entry.role}" }
                                        p { class: "accent", "{entry.company}" }
                                    }
                                    span { class: "pill", "{entry.period}" }
                                }
                                ul { class: "timeline-highlights",
                                    for item in entry.highlights.iter() {
                                        li { "{item}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
