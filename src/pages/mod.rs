use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::navigation::NavBar;
use crate::components::sections::{
    About, Contact, Education, Experience, Footer, Hero, Projects, Skills,
};
use crate::dom::ScrollListener;
use crate::hooks::use_nav_state;

#[component]
pub fn Portfolio() -> Element {
    let nav = use_nav_state();
    use_context_provider(|| nav);

    // The window scroll subscription lives in a hook slot, so the listener
    // is removed when this page unmounts.
    let _listener = use_hook(|| {
        let mut nav = nav;
        Rc::new(ScrollListener::attach(move || nav.handle_scroll()))
    });

    rsx! {
        div { class: "page",
            NavBar {}
            Hero {}
            About {}
            Skills {}
            Experience {}
            Projects {}
            Education {}
            Contact {}
            Footer {}
        }
    }
}
