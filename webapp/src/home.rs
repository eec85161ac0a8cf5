use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use crate::components::icons::AlertIcon;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "hero",
            h1 { "Field Notes" }
            p { "Guides, reference material and release notes for the toolkit." }
            div { class: "callout",
                AlertIcon { color: "var(--accent)".to_string() }
                span { "The 2.0 configuration format is not compatible with 1.x files." }
            }
            Link { to: Route::DocsIndex {}, "Start with the docs" }
        }
    }
}
