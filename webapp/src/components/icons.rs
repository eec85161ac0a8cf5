use dioxus::prelude::*;

use common::icon::{ALERT_LINES, ALERT_PATH, IconAttrs, LINE_CAP, LINE_JOIN, STROKE_WIDTH, VIEW_BOX};

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    color: Option<String>,
    width: Option<String>,
    height: Option<String>,
}

#[component]
pub fn AlertIcon(props: IconProps) -> Element {
    let attrs = IconAttrs::new(props.color, props.width, props.height);

    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "{attrs.width}",
            height: "{attrs.height}",
            view_box: VIEW_BOX,
            fill: "none",
            stroke: "{attrs.color}",
            stroke_width: STROKE_WIDTH,
            stroke_linecap: LINE_CAP,
            stroke_linejoin: LINE_JOIN,
            path { d: ALERT_PATH }
            for (x1 , y1 , x2 , y2) in ALERT_LINES {
                line { x1: x1, y1: y1, x2: x2, y2: y2 }
            }
        }
    }
}
