pub mod cascade;
pub mod config;
pub mod container;
pub mod icon;
pub mod length;
pub mod nav;
pub mod theme;

// css length validation
//
// a length is a decimal number with a unit, or a bare zero.  we only accept the units that
// the site tokens actually use, since anything else would be a typo in the theme file rather
// than a deliberate choice
pub const LENGTH_REGEX: &str =
    r"^(?:-?0(?:\.0*)?|(?P<value>-?(?:\d+(?:\.\d*)?|\.\d+))(?P<unit>px|rem|em|%|vw|vh))$";
