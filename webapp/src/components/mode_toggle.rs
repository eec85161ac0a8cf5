use dioxus::prelude::*;

use tracing::debug;

use common::cascade::Mode;

use crate::storage::store_mode;

#[component]
pub fn ModeToggle() -> Element {
    let mut mode = use_context::<Signal<Mode>>();

    let label = if mode().is_dark() { "Light mode" } else { "Dark mode" };

    rsx! {
        button {
            class: "mode-toggle",
            r#type: "button",
            aria_pressed: "{mode().is_dark()}",
            onclick: move |_| {
                let next = mode().toggled();
                mode.set(next);
                store_mode(next);
                debug!(mode = ?next, "mode toggled");
            },
            "{label}"
        }
    }
}
