use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::{nav::NavigationItem, theme::Theme};

// site configuration
//
// the theme and the top-level navigation are the only things a deployment can change
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteConfig {
    pub theme: Theme,

    #[serde(default)]
    pub nav: Vec<NavigationItem>,
}

// in order to extract the site table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlSiteFile {
    site: SiteConfig,
}

impl SiteConfig {
    pub fn validate(&self) -> Result<()> {
        self.theme.validate().context("invalid theme")?;

        for (idx, item) in self.nav.iter().enumerate() {
            if item.label.trim().is_empty() {
                return Err(anyhow::Error::msg(format!("nav item {idx} has an empty label")));
            }

            if !item.url.starts_with('/') {
                return Err(anyhow::Error::msg(format!(
                    "nav item {idx} ({}) must have an absolute url",
                    item.label
                )));
            }
        }

        Ok(())
    }
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn read_site_config(doc: &str) -> Result<Arc<SiteConfig>> {
    debug!("reading site config");

    let data: TomlSiteFile = toml::from_str(doc).context("failed to parse site config")?;

    data.site.validate()?;

    debug!(nav_items = data.site.nav.len(), "successfully parsed site config");
    Ok(Arc::new(data.site))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = r##"
[site.theme]
spacing = "2rem"
spacing_small = "1.25rem"
border = "4px"
transition_speed = "150ms"
transition_timing = "ease"
content_margin = "1rem"

[site.theme.color]
light = "#ffffff"
dark = "#000000"
accent = "#0055ff"
accent_dark = "#66aaff"
secondary_bg = "#f0f0f0"
secondary_bg_dark = "#111111"
divider = "#dddddd"
divider_dark = "#333333"

[site.theme.gradient]
header = "linear-gradient(#fff, #eee)"
header_dark = "linear-gradient(#000, #111)"

[site.theme.font]
family = "sans-serif"
family_mono = "monospace"
weight = "400"
weight_bold = "700"

[site.theme.media]
small = "(min-width: 600px)"
should_animate = "(prefers-reduced-motion: no-preference)"

[[site.nav]]
label = "Docs"
url = "/docs"
has_child_routes = true

[[site.nav]]
label = "About"
url = "/about"
"##;

    #[test]
    fn reads_theme_and_nav() {
        let config = read_site_config(SITE).unwrap();

        assert_eq!(config.theme.color.accent, "#0055ff");
        assert_eq!(config.theme.border, "4px");
        assert_eq!(
            config.nav,
            vec![
                NavigationItem::new("Docs", "/docs", true),
                NavigationItem::new("About", "/about", false),
            ]
        );
    }

    #[test]
    fn missing_token_is_a_config_error() {
        let doc = SITE.replace("accent_dark = \"#66aaff\"\n", "");

        let err = read_site_config(&doc).unwrap_err();
        assert!(format!("{err:#}").contains("accent_dark"));
    }

    #[test]
    fn invalid_length_is_a_config_error() {
        let doc = SITE.replace("border = \"4px\"", "border = \"wide\"");

        let err = read_site_config(&doc).unwrap_err();
        assert!(format!("{err:#}").contains("border"));
    }

    #[test]
    fn relative_nav_url_is_rejected() {
        let doc = SITE.replace("url = \"/about\"", "url = \"about\"");

        assert!(read_site_config(&doc).is_err());
    }

    #[test]
    fn default_theme_round_trips_through_toml() {
        let config = SiteConfig {
            theme: Theme::default(),
            nav: vec![],
        };
        let doc = toml::to_string(&TomlSiteFile { site: config.clone() }).unwrap();

        assert_eq!(*read_site_config(&doc).unwrap(), config);
    }
}
