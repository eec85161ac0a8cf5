use dioxus::prelude::*;

use common::container::container_style;

#[derive(Clone, PartialEq, Props)]
pub struct ContainerProps {
    // take all remaining space in a flex column
    #[props(default)]
    fill_height: bool,
    children: Element,
}

#[component]
pub fn Container(props: ContainerProps) -> Element {
    rsx! {
        div { class: "container", style: container_style(props.fill_height), {props.children} }
    }
}
