use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use common::{cascade::Mode, config::SiteConfig};

use crate::Route;
use crate::components::{container::Container, menu::Menu, mode_toggle::ModeToggle};

const HEADER: &str = r#"
.site-header {
    background: var(--header-gradient);
    border-bottom: 1px solid var(--divider);
}

.site-header .header-row {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: var(--spacing) 0;
}

.site-header .logo {
    font-weight: 700;
}

.mode-toggle {
    background: var(--secondary-background);
    color: var(--color);
    border-radius: 999px;
    cursor: pointer;
    padding: 0.25rem 0.75rem;
}

.callout {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    background: var(--secondary-background);
    border-left: 3px solid var(--accent);
    margin: var(--spacing) 0;
    padding: 1rem;
}
"#;

#[component]
fn NavBarInner() -> Element {
    let config = use_context::<Arc<SiteConfig>>();
    let mode = use_context::<Signal<Mode>>();

    let current_path: Route = use_route();

    rsx! {
        style { "{HEADER}" }
        header { class: "site-header",
            Container {
                div { class: "header-row",
                    Link { class: "logo", to: Route::Home {}, "Field Notes" }
                    Menu {
                        items: config.nav.clone(),
                        current: current_path.to_string(),
                        is_dark: mode().is_dark(),
                    }
                    ModeToggle {}
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        Container { fill_height: true,
            main { Outlet::<Route> {} }
        }
    }
}
