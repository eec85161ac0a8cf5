#![allow(non_snake_case)]
use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::{Level, info};

use common::{
    cascade::Mode,
    config::{SiteConfig, read_site_config},
};

mod storage;

mod components;
use components::{global_styles::GlobalStyles, navigation::NavBar};

mod home;
use home::Home;

mod docs;
use docs::{DocsIndex, DocsPage};

mod about;
use about::{About, NotFound};

const SITE_CONFIG: &str = include_str!("../site.toml");

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");

    // a broken theme should stop the app here, not render a page with missing properties
    let config: Arc<SiteConfig> = read_site_config(SITE_CONFIG).expect("invalid site config");

    info!(nav_items = config.nav.len(), "site config loaded, launching");

    LaunchBuilder::new().with_context(config).launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[nest("/docs")]
            #[route("/")]
            DocsIndex {},
            #[route("/:slug")]
            DocsPage { slug: String },
        #[end_nest]
        #[route("/about")]
        About {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let config = use_context::<Arc<SiteConfig>>();

    // the shell owns the mode; the toggle writes it, everything else reads it
    let mode = use_context_provider(|| Signal::new(storage::initial_mode()));
    let current: Mode = mode();

    rsx! {
        GlobalStyles { theme: config.theme.clone(), mode: current,
            Router::<Route> {}
        }
    }
}
