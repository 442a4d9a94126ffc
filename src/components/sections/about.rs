use dioxus::prelude::*;

use crate::content::{ABOUT_PARAGRAPHS, PROFILE};

#[component]
pub fn About() -> Element {
    let location = PROFILE.location;
    let education = PROFILE.education_summary;

    rsx! {
        section { id: "about", class: "section section-alt",
            div { class: "section-inner narrow",
                h2 { class: "section-heading", "About Me" }

                div { class: "card",
                    for text in ABOUT_PARAGRAPHS {
                        p { class: "about-paragraph", "{text}" }
                    }

                    div { class: "about-facts",
                        div {
                            h4 { class: "fact-label", "Location" }
                            p { "{location}" }
                        }
                        div {
                            h4 { class: "fact-label", "Education" }
                            p { "{education}" }
                        }
                    }
                }
            }
        }
    }
}
