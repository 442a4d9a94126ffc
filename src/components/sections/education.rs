use dioxus::prelude::*;

use crate::content::EDUCATION;

#[component]
pub fn Education() -> Element {
    rsx! {
        section { id: "education", class: "section section-alt",
            div { class: "section-inner",
                h2 { class: "section-heading", "Education" }

                div { class: "education-grid",
                    for entry in EDUCATION.iter() {
                        div { key: "{entry.degree}", class: "card education-card",
                            div { class: "education-header",
                                div {
                                    h3 { "{entry.degree}" }
                                    p { class: "muted", "{entry.institution}" }
                                }
                                span { class: "pill", "{entry.period}" }
                            }
                            p { class: "education-result", "{entry.result}" }
                            if let Some(note) = entry.note {
                                p { class: "education-note", "{note}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
