use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let year = js_sys::Date::new_0().get_full_year();

    rsx! {
        footer { class: "footer",
            p { class: "muted", "© {year} Md Siam Hossain. All rights reserved." }
        }
    }
}
