// page-width layout region
//
// the padding references var(--spacing) directly instead of a resolved value, so a container
// always follows whatever the cascade currently resolves for the breakpoint

pub const MAX_WIDTH: &str = "90rem";

// plain padding first, for engines that drop the clamp() line
pub const FALLBACK_PADDING: &str = "0 var(--spacing)";
pub const PADDING: &str = "0 clamp(calc(var(--spacing) / 2), 5vw, calc(var(--spacing) * 2))";

pub fn container_style(fill_height: bool) -> String {
    let flex = if fill_height { "1" } else { "initial" };

    format!(
        "flex: {flex}; margin: 0 auto; max-width: {MAX_WIDTH}; padding: {FALLBACK_PADDING}; padding: {PADDING}; width: 100%;"
    )
}

// horizontal padding in px for a spacing and viewport width in px, i.e. what the browser
// computes for PADDING.  css clamp() lets the minimum win when it exceeds the maximum
pub fn horizontal_padding(spacing: f64, viewport_width: f64) -> f64 {
    let min = spacing / 2.0;
    let max = spacing * 2.0;
    let preferred = viewport_width * 0.05;

    min.max(preferred.min(max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_height_grows() {
        assert!(container_style(true).starts_with("flex: 1;"));
        assert!(container_style(false).starts_with("flex: initial;"));
    }

    #[test]
    fn style_carries_clamp_after_fallback() {
        let style = container_style(false);

        let fallback = style.find("padding: 0 var(--spacing);").unwrap();
        let clamp = style.find("padding: 0 clamp(").unwrap();
        assert!(fallback < clamp);
        assert!(style.contains("max-width: 90rem;"));
        assert!(style.contains("margin: 0 auto;"));
    }

    #[test]
    fn padding_regimes() {
        // 5vw below spacing / 2
        assert_eq!(horizontal_padding(32.0, 200.0), 16.0);
        // 5vw between the bounds
        assert_eq!(horizontal_padding(32.0, 800.0), 40.0);
        // 5vw above spacing * 2
        assert_eq!(horizontal_padding(32.0, 2000.0), 64.0);
    }

    #[test]
    fn zero_spacing_collapses_padding() {
        assert_eq!(horizontal_padding(0.0, 0.0), 0.0);
        assert_eq!(horizontal_padding(0.0, 1920.0), 0.0);
    }
}
