use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::error;

use common::{
    config::SiteConfig,
    nav::{ActiveMatcher, NavigationItem, is_active, menu_links, menu_stylesheet, nav_class},
};

#[derive(Clone, PartialEq, Props)]
pub struct MenuProps {
    items: Vec<NavigationItem>,
    // location the links are matched against, as rendered by the router
    current: String,
    #[props(default)]
    is_dark: bool,
    #[props(default = is_active)]
    matcher: ActiveMatcher,
}

#[component]
pub fn Menu(props: MenuProps) -> Element {
    let config = use_context::<Arc<SiteConfig>>();

    // the config was validated at startup, so this only fails if someone bypassed that;
    // unstyled links are still better than losing the whole header
    let styles = match menu_stylesheet(&config.theme) {
        Ok(css) => css,
        Err(err) => {
            error!("failed to build menu styles: {err:#}");
            String::new()
        }
    };

    let links = menu_links(&props.items, &props.current, props.matcher);

    rsx! {
        style { "{styles}" }
        nav { class: nav_class(props.is_dark), "data-dark": "{props.is_dark}",
            // urls may repeat, so key on position
            for (idx , link) in links.into_iter().enumerate() {
                Link { key: "{idx}", class: link.class(), to: link.url, "{link.label}" }
            }
        }
    }
}
