use dioxus::prelude::*;

use tracing::{debug, warn};

use common::{
    cascade::{Mode, stylesheet},
    theme::Theme,
};

// marker left in context by the first GlobalStyles, so that a nested one can notice
#[derive(Clone, Copy)]
struct GlobalStylesMounted;

#[derive(Clone, PartialEq, Props)]
pub struct GlobalStylesProps {
    theme: Theme,
    mode: Mode,
    children: Element,
}

// owns the one global <style> element of the document
//
// the element text is regenerated in full from (theme, mode) whenever either prop changes,
// so a mode switch can never leave a declaration from the previous mode behind
#[component]
pub fn GlobalStyles(props: GlobalStylesProps) -> Element {
    let nested = use_hook(|| try_consume_context::<GlobalStylesMounted>().is_some());
    use_context_provider(|| GlobalStylesMounted);

    if nested {
        warn!("GlobalStyles mounted more than once, ignoring the inner instance");
        return rsx! { {props.children} };
    }

    let css = stylesheet(&props.theme, props.mode);
    debug!(mode = ?props.mode, "applying global styles");

    rsx! {
        style { id: "global-styles", "{css}" }
        {props.children}
    }
}
