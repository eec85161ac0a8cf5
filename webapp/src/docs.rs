use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

// (slug, title)
const PAGES: [(&str, &str); 3] = [
    ("getting-started", "Getting started"),
    ("configuration", "Configuration"),
    ("theming", "Theming"),
];

#[component]
pub fn DocsIndex() -> Element {
    rsx! {
        h2 { "Documentation" }
        ul {
            for (slug , title) in PAGES {
                li {
                    Link {
                        to: Route::DocsPage {
                            slug: slug.to_owned(),
                        },
                        "{title}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn DocsPage(slug: String) -> Element {
    let title = PAGES
        .iter()
        .find(|(s, _)| *s == slug)
        .map(|(_, t)| *t)
        .unwrap_or("Untitled");

    rsx! {
        h2 { "{title}" }
        p { class: "visually-hidden", "Documentation page {slug}" }
        Link { to: Route::DocsIndex {}, "Back to all docs" }
    }
}
