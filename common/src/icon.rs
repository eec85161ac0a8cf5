// shared geometry and defaults for the inline svg icons

pub const VIEW_BOX: &str = "0 0 24 24";
pub const STROKE_WIDTH: &str = "2";
pub const LINE_CAP: &str = "round";
pub const LINE_JOIN: &str = "round";

// warning triangle with an exclamation mark
pub const ALERT_PATH: &str =
    "M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z";

// (x1, y1, x2, y2)
pub const ALERT_LINES: [(&str, &str, &str, &str); 2] =
    [("12", "9", "12", "13"), ("12", "17", "12.01", "17")];

// caller-facing parameters; values are passed through to the svg attributes unchecked
#[derive(Clone, Debug, PartialEq)]
pub struct IconAttrs {
    pub color: String,
    pub width: String,
    pub height: String,
}

impl Default for IconAttrs {
    fn default() -> Self {
        IconAttrs {
            color: String::from("currentColor"),
            width: String::from("24"),
            height: String::from("24"),
        }
    }
}

impl IconAttrs {
    pub fn new(color: Option<String>, width: Option<String>, height: Option<String>) -> Self {
        let defaults = IconAttrs::default();

        IconAttrs {
            color: color.unwrap_or(defaults.color),
            width: width.unwrap_or(defaults.width),
            height: height.unwrap_or(defaults.height),
        }
    }
}
