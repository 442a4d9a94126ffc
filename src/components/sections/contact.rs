use dioxus::prelude::*;

use crate::content::PROFILE;

#[component]
pub fn Contact() -> Element {
    let email = PROFILE.email;
    let whatsapp = PROFILE.whatsapp_number;

    rsx! {
        section { id: "contact", class: "section",
            div { class: "section-inner narrow",
                div { class: "contact-panel",
                    h2 { class: "section-heading", "Get In Touch" }
                    p { class: "muted",
                        "I'm currently available for freelance work or full-time opportunities."
                        br {}
                        "Connect with me via Email or WhatsApp."
                    }

                    div { class: "contact-grid",
                        a { class: "card contact-card", href: "mailto:{email}",
                            div { class: "contact-icon", "✉" }
                            h3 { "Email" }
                            p { class: "muted", "{email}" }
                            span { class: "accent", "Send Message" }
                        }
                        a {
                            class: "card contact-card",
                            href: PROFILE.whatsapp_url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            div { class: "contact-icon", "☏" }
                            h3 { "WhatsApp" }
                            p { class: "muted", "{whatsapp}" }
                            span { class: "accent", "Chat Now" }
                        }
                    }

                    div { class: "contact-social",
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
                    }
                }
            }
        }
    }
}
