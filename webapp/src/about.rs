use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use crate::components::{container::Container, icons::AlertIcon};

#[component]
pub fn About() -> Element {
    rsx! {
        h2 { "About" }
        p { "Field Notes is maintained by the toolkit team and published from the main branch." }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Container { fill_height: true,
            div { class: "callout",
                AlertIcon {}
                span { "Nothing lives at /{path}." }
            }
            Link { to: Route::Home {}, "Go home" }
        }
    }
}
