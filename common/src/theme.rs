use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::length::Length;

// site design tokens
//
// every value is a literal css value that is copied verbatim into the stylesheet.  none of
// the fields carry serde defaults: a theme file that forgets a key is rejected when it is
// read, rather than rendering a page with a missing custom property
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Theme {
    pub color: ColorTokens,
    pub gradient: GradientTokens,
    pub font: FontTokens,
    pub media: MediaTokens,

    // horizontal rhythm above the small breakpoint, and below it
    pub spacing: String,
    pub spacing_small: String,

    // also used as the diameter of the active menu marker
    pub border: String,

    pub transition_speed: String,
    pub transition_timing: String,
    pub content_margin: String,
}

// only the color-ish tokens have a dark counterpart
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ColorTokens {
    pub light: String,
    pub dark: String,
    pub accent: String,
    pub accent_dark: String,
    pub secondary_bg: String,
    pub secondary_bg_dark: String,
    pub divider: String,
    pub divider_dark: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GradientTokens {
    pub header: String,
    pub header_dark: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FontTokens {
    pub family: String,
    pub family_mono: String,
    pub weight: String,
    pub weight_bold: String,
}

// media query conditions, without the leading @media
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MediaTokens {
    pub small: String,
    pub should_animate: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            color: ColorTokens {
                light: String::from("#f9f9fb"),
                dark: String::from("#1c1c21"),
                accent: String::from("#d6336c"),
                accent_dark: String::from("#ff8fab"),
                secondary_bg: String::from("#eeeef2"),
                secondary_bg_dark: String::from("#26262d"),
                divider: String::from("rgba(28, 28, 33, 0.12)"),
                divider_dark: String::from("rgba(249, 249, 251, 0.12)"),
            },
            gradient: GradientTokens {
                header: String::from("linear-gradient(135deg, #fdfbfb 0%, #ebedee 100%)"),
                header_dark: String::from("linear-gradient(135deg, #232526 0%, #414345 100%)"),
            },
            font: FontTokens {
                family: String::from(
                    "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif",
                ),
                family_mono: String::from("'JetBrains Mono', Menlo, Consolas, monospace"),
                weight: String::from("400"),
                weight_bold: String::from("600"),
            },
            media: MediaTokens {
                small: String::from("(min-width: 40em)"),
                should_animate: String::from("(prefers-reduced-motion: no-preference)"),
            },
            spacing: String::from("2rem"),
            spacing_small: String::from("1.25rem"),
            border: String::from("0.25rem"),
            transition_speed: String::from("0.2s"),
            transition_timing: String::from("ease-in-out"),
            content_margin: String::from("1.5rem"),
        }
    }
}

impl Theme {
    // every token, keyed by its dotted path in the theme file
    pub fn tokens(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("color.light", &self.color.light),
            ("color.dark", &self.color.dark),
            ("color.accent", &self.color.accent),
            ("color.accent_dark", &self.color.accent_dark),
            ("color.secondary_bg", &self.color.secondary_bg),
            ("color.secondary_bg_dark", &self.color.secondary_bg_dark),
            ("color.divider", &self.color.divider),
            ("color.divider_dark", &self.color.divider_dark),
            ("gradient.header", &self.gradient.header),
            ("gradient.header_dark", &self.gradient.header_dark),
            ("font.family", &self.font.family),
            ("font.family_mono", &self.font.family_mono),
            ("font.weight", &self.font.weight),
            ("font.weight_bold", &self.font.weight_bold),
            ("media.small", &self.media.small),
            ("media.should_animate", &self.media.should_animate),
            ("spacing", &self.spacing),
            ("spacing_small", &self.spacing_small),
            ("border", &self.border),
            ("transition_speed", &self.transition_speed),
            ("transition_timing", &self.transition_timing),
            ("content_margin", &self.content_margin),
        ]
    }

    // tokens that take part in arithmetic or that the menu/container place in length positions
    fn length_tokens(&self) -> [(&'static str, &str); 4] {
        [
            ("spacing", &self.spacing),
            ("spacing_small", &self.spacing_small),
            ("border", &self.border),
            ("content_margin", &self.content_margin),
        ]
    }

    pub fn validate(&self) -> Result<()> {
        for (key, value) in self.tokens() {
            if value.trim().is_empty() {
                return Err(anyhow::Error::msg(format!("theme token {key} is empty")));
            }

            // tokens are pasted into declarations verbatim, so these would end a block early
            if value.contains(['{', '}', ';']) {
                return Err(anyhow::Error::msg(format!(
                    "theme token {key} must not contain '{{', '}}' or ';'"
                )));
            }
        }

        for (key, value) in self.length_tokens() {
            value
                .parse::<Length>()
                .with_context(|| format!("theme token {key} must be a css length"))?;
        }

        Ok(())
    }

    pub fn border_length(&self) -> Result<Length> {
        self.border
            .parse()
            .context("theme token border must be a css length")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_valid() {
        Theme::default().validate().unwrap();
    }

    #[test]
    fn empty_token_is_rejected() {
        let mut theme = Theme::default();
        theme.color.accent_dark = String::from("  ");

        let err = theme.validate().unwrap_err();
        assert!(err.to_string().contains("color.accent_dark"));
    }

    #[test]
    fn non_length_spacing_is_rejected() {
        let mut theme = Theme::default();
        theme.border = String::from("thick");

        let err = theme.validate().unwrap_err();
        assert!(err.to_string().contains("border"));
    }

    #[test]
    fn unitless_lengths_are_rejected() {
        let mut theme = Theme::default();
        theme.border = String::from("4");
        assert!(theme.validate().unwrap_err().to_string().contains("border"));

        let mut theme = Theme::default();
        theme.spacing = String::from("16");
        assert!(theme.validate().unwrap_err().to_string().contains("spacing"));

        let mut theme = Theme::default();
        theme.content_margin = String::from("0");
        theme.validate().unwrap();
    }

    #[test]
    fn block_delimiters_are_rejected() {
        for bad in ["#fff; color: red", "#fff }", "{ #fff"] {
            let mut theme = Theme::default();
            theme.color.accent = String::from(bad);

            let err = theme.validate().unwrap_err();
            assert!(err.to_string().contains("color.accent"), "{bad} accepted");
        }

        let mut theme = Theme::default();
        theme.font.family = String::from("'Inter'; }");
        assert!(theme.validate().is_err());
    }

    #[test]
    fn tokens_cover_every_field() {
        let theme = Theme::default();
        let tokens = theme.tokens();

        assert_eq!(tokens.len(), 22);
        assert!(tokens.iter().any(|(k, v)| *k == "gradient.header_dark" && *v == theme.gradient.header_dark));
    }
}
