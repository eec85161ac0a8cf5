use std::collections::BTreeMap;

use constcat::concat;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::theme::Theme;

// root font scale below and above the small breakpoint.  these are the only literals the
// cascade contributes itself; everything else comes out of the theme
pub const BASE_FONT_SIZE: &str = "93.75%";
pub const FULL_FONT_SIZE: &str = "100%";

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub fn is_dark(self) -> bool {
        self == Mode::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }
}

// whether the viewport satisfies the theme's media.small condition
//
// the live page never computes this, the browser evaluates the media query at paint time.
// it only exists so that resolve() can describe both sides of the breakpoint
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Viewport {
    Below,
    Above,
}

// the root-scope declarations produced by the cascade, in emission order
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Property {
    FontSize,
    Background,
    SecondaryBackground,
    Color,
    Accent,
    Spacing,
    Divider,
    HeaderGradient,
}

impl Property {
    pub fn all() -> Vec<Self> {
        vec![
            Self::FontSize,
            Self::Background,
            Self::SecondaryBackground,
            Self::Color,
            Self::Accent,
            Self::Spacing,
            Self::Divider,
            Self::HeaderGradient,
        ]
    }

    pub fn css_name(self) -> &'static str {
        match self {
            Self::FontSize => "font-size",
            Self::Background => "--background",
            Self::SecondaryBackground => "--secondary-background",
            Self::Color => "--color",
            Self::Accent => "--accent",
            Self::Spacing => "--spacing",
            Self::Divider => "--divider",
            Self::HeaderGradient => "--header-gradient",
        }
    }
}

// one resolved value per property
//
// setting a property that is already present replaces it, which is how the later steps of
// the cascade shadow the earlier ones
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PropertyMap {
    values: BTreeMap<Property, String>,
}

impl PropertyMap {
    pub fn set(&mut self, property: Property, value: &str) {
        self.values.insert(property, value.to_owned());
    }

    pub fn get(&self, property: Property) -> Option<&str> {
        self.values.get(&property).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Property, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    // the entries of self that a stylesheet must declare on top of base to arrive at self
    pub fn overrides_against(&self, base: &PropertyMap) -> PropertyMap {
        let values = self
            .values
            .iter()
            .filter(|(k, v)| base.values.get(k) != Some(*v))
            .map(|(k, v)| (*k, v.clone()))
            .collect();

        PropertyMap { values }
    }

    // body of a declaration block, one property per line at the given indent
    pub fn declarations(&self, indent: &str) -> String {
        self.iter()
            .map(|(k, v)| format!("{indent}{}: {v};\n", k.css_name()))
            .collect()
    }
}

// resolve the root-scope properties for one (mode, viewport) pair
//
// later steps win: base defaults, then the breakpoint, then the mode.  the breakpoint and
// mode steps touch disjoint properties, so their relative order does not change the result
pub fn resolve(theme: &Theme, mode: Mode, viewport: Viewport) -> PropertyMap {
    let mut map = PropertyMap::default();

    // base scope always starts from the light tokens
    map.set(Property::FontSize, BASE_FONT_SIZE);
    map.set(Property::Background, &theme.color.light);
    map.set(Property::SecondaryBackground, &theme.color.secondary_bg);
    map.set(Property::Color, &theme.color.dark);
    map.set(Property::Accent, &theme.color.accent);
    map.set(Property::Spacing, &theme.spacing_small);
    map.set(Property::Divider, &theme.color.divider);
    map.set(Property::HeaderGradient, &theme.gradient.header);

    if viewport == Viewport::Above {
        map.set(Property::FontSize, FULL_FONT_SIZE);
        map.set(Property::Spacing, &theme.spacing);
    }

    if mode.is_dark() {
        map.set(Property::Background, &theme.color.dark);
        map.set(Property::Color, &theme.color.light);
        map.set(Property::SecondaryBackground, &theme.color.secondary_bg_dark);
        map.set(Property::Accent, &theme.color.accent_dark);
        map.set(Property::Divider, &theme.color.divider_dark);
        map.set(Property::HeaderGradient, &theme.gradient.header_dark);
    }

    map
}

// the complete global stylesheet for a document in the given mode
//
// the override blocks are derived from resolve() rather than written out by hand, so the
// stylesheet and the pure resolution can never disagree about which keys move where.  the
// caller replaces the whole sheet when the mode changes; nothing here is incremental
#[instrument(level=Level::DEBUG, skip(theme))]
pub fn stylesheet(theme: &Theme, mode: Mode) -> String {
    let base = resolve(theme, Mode::Light, Viewport::Below);
    let breakpoint = resolve(theme, Mode::Light, Viewport::Above).overrides_against(&base);

    let mut css = format!(":root {{\n{}}}\n\n", base.declarations("  "));

    css.push_str(&format!(
        "@media {} {{\n  :root {{\n{}  }}\n}}\n\n",
        theme.media.small,
        breakpoint.declarations("    ")
    ));

    // same specificity as the base block, so declaring it later is enough to win
    if mode.is_dark() {
        let dark = resolve(theme, Mode::Dark, Viewport::Below).overrides_against(&base);
        css.push_str(&format!(":root {{\n{}}}\n\n", dark.declarations("  ")));
    }

    css.push_str(&resets(theme));

    debug!(bytes = css.len(), "built global stylesheet");
    css
}

const BOX_RESET: &str = r#"*, *::before, *::after {
  box-sizing: inherit;
  border: 0;
  margin: 0;
  padding: 0;
  font-weight: normal;
}
"#;

const ELEMENT_RESETS: &str = r#"
#main {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

ul, ol {
  list-style: none;
}

img {
  max-width: 100%;
  height: auto;
}

a {
  color: currentColor;
  text-decoration: none;
}
"#;

const HEADINGS: &str = r#"
h1, h2, h3, h4, .h4 {
  font-weight: 700;
  font-size: 2.488rem;
  line-height: 1.2em;
  margin-bottom: 1em;
}

h1 {
  font-size: 2.488rem;
}

h2 {
  font-size: 2.074rem;
}

h3 {
  font-size: 1.728rem;
}

h4, .h4 {
  font-size: 1.44rem;
}
"#;

const FORM_RESET: &str = r#"
button {
  font: inherit;
}
"#;

const VISUALLY_HIDDEN: &str = r#"
.visually-hidden {
  clip: rect(0 0 0 0);
  clip-path: inset(50%);
  height: 1px;
  overflow: hidden;
  position: absolute;
  white-space: nowrap;
  width: 1px;
}
"#;

const STATIC_TAIL: &str = concat!(HEADINGS, FORM_RESET, VISUALLY_HIDDEN);

// element baseline; only the font and selection tokens are theme-dependent
fn resets(theme: &Theme) -> String {
    let mut css = String::from(BOX_RESET);

    css.push_str(&format!(
        r#"
html:focus-within {{
  scroll-behavior: auto;
}}

@media {should_animate} {{
  html:focus-within {{
    scroll-behavior: smooth;
  }}
}}

body {{
  color: var(--color);
  background: var(--background);
  box-sizing: border-box;
  font-family: {family};
  font-weight: {weight};
  line-height: 1.75;
  text-rendering: optimizeLegibility;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}}

::selection,
a::selection {{
  background-color: var(--accent);
  color: {light};
}}
"#,
        should_animate = theme.media.should_animate,
        family = theme.font.family,
        weight = theme.font.weight,
        light = theme.color.light,
    ));

    css.push_str(ELEMENT_RESETS);

    css.push_str(&format!(
        r#"
strong {{
  font-weight: {weight_bold};
}}

em {{
  font-style: italic;
}}

code,
pre {{
  font-family: {family_mono};
  font-size: 0.833rem;
}}
"#,
        weight_bold = theme.font.weight_bold,
        family_mono = theme.font.family_mono,
    ));

    css.push_str(STATIC_TAIL);
    css
}
