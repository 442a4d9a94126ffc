use dioxus::prelude::*;

use crate::content::SKILL_GROUPS;

#[component]
pub fn Skills() -> Element {
    rsx! {
        section { id: "skills", class: "section",
            div { class: "section-inner",
                div { class: "section-intro",
                    h2 { class: "section-heading", "Technical Proficiency" }
                    p { class: "muted",
                        "A comprehensive toolkit of languages, frameworks, and technologies I use to bring ideas to life."
                    }
                }

                div { class: "skill-grid",
                    for group in SKILL_GROUPS.iter() {
                        div { key: "{group.title}", class: "card skill-card",
                            div { class: "skill-icon", "{group.icon}" }
                            h3 { "{group.title}" }
                            ul { class: "skill-list",
                                for skill in group.skills.iter() {
                                    li { "{skill}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
