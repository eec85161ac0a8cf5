use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::theme::Theme;

// one entry of the site navigation, supplied by whatever page composes the menu
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NavigationItem {
    pub label: String,
    pub url: String,

    // when set, the item also counts as active anywhere below its url
    #[serde(default)]
    pub has_child_routes: bool,
}

impl NavigationItem {
    pub fn new(label: &str, url: &str, has_child_routes: bool) -> Self {
        NavigationItem {
            label: label.to_owned(),
            url: url.to_owned(),
            has_child_routes,
        }
    }
}

// decides whether an item is active for the current location
//
// the menu only ever calls this, so tests and alternative routers can swap in their own
pub type ActiveMatcher = fn(&str, &NavigationItem) -> bool;

// drop any query or fragment and all trailing slashes, keeping "/" itself
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');

    if trimmed.is_empty() && path.starts_with('/') { "/" } else { trimmed }
}

// exact match, or for items with child routes any location nested under the item's url.
// nesting is checked on path segments, so "/blogroll" is not under "/blog"
pub fn is_active(current: &str, item: &NavigationItem) -> bool {
    let current = normalize(current);
    let target = normalize(&item.url);

    if current == target {
        return true;
    }

    if !item.has_child_routes {
        return false;
    }

    if target == "/" {
        return current.starts_with('/');
    }

    current
        .strip_prefix(target)
        .is_some_and(|rest| rest.starts_with('/'))
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuLink {
    pub label: String,
    pub url: String,
    pub active: bool,
}

impl MenuLink {
    pub fn class(&self) -> &'static str {
        if self.active { "smallcaps active" } else { "smallcaps" }
    }
}

// one link per item, in the order given.  duplicates are matched independently
pub fn menu_links(items: &[NavigationItem], current: &str, matcher: ActiveMatcher) -> Vec<MenuLink> {
    items
        .iter()
        .map(|item| MenuLink {
            label: item.label.clone(),
            url: item.url.clone(),
            active: matcher(current, item),
        })
        .collect()
}

pub fn nav_class(is_dark: bool) -> &'static str {
    if is_dark { "menu dark" } else { "menu" }
}

// link styling for the menu, including the dot under the active link
//
// the dot is centered by offsetting half of its own size, computed here from the border
// token so the unit matches whatever the theme uses
pub fn menu_stylesheet(theme: &Theme) -> Result<String> {
    let border = theme.border_length()?;
    let offset = border.half();

    Ok(format!(
        r#"
.menu a {{
  display: inline;
  font-size: 0.79rem;
  position: relative;
  transition: color {speed} {timing};
}}

.menu a:not(:last-child) {{
  margin-right: {margin};
}}

.menu a:hover,
.menu a.active {{
  color: var(--accent);
}}

.menu a.active::after {{
  background-color: var(--accent);
  border-radius: 50%;
  content: '';
  height: {border};
  left: calc(50% - {offset});
  position: absolute;
  right: auto;
  top: {margin};
  width: {border};
}}
"#,
        speed = theme.transition_speed,
        timing = theme.transition_timing,
        margin = theme.content_margin,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<NavigationItem> {
        vec![
            NavigationItem::new("A", "/a", false),
            NavigationItem::new("B", "/b", true),
        ]
    }

    #[test]
    fn child_route_marks_parent_active() {
        let links = menu_links(&items(), "/b/sub", is_active);

        let labels: Vec<&str> = links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B"]);
        assert!(!links[0].active);
        assert!(links[1].active);
        assert_eq!(links[1].class(), "smallcaps active");
        assert_eq!(links[0].class(), "smallcaps");
    }

    #[test]
    fn exact_match_without_child_routes() {
        let a = NavigationItem::new("A", "/a", false);

        assert!(is_active("/a", &a));
        assert!(is_active("/a/", &a));
        assert!(is_active("/a?page=2", &a));
        assert!(is_active("/a//", &a));
        assert!(is_active("/a///?page=2", &a));
        assert!(!is_active("/a/sub", &a));
        assert!(!is_active("/", &a));
    }

    #[test]
    fn prefix_match_respects_segments() {
        let blog = NavigationItem::new("Blog", "/blog", true);

        assert!(is_active("/blog", &blog));
        assert!(is_active("/blog/2024/post", &blog));
        assert!(is_active("/blog//", &blog));
        assert!(!is_active("/blogroll", &blog));
        assert!(!is_active("/about", &blog));
    }

    #[test]
    fn root_item() {
        let exact = NavigationItem::new("Home", "/", false);
        let partial = NavigationItem::new("Home", "/", true);

        assert!(is_active("/", &exact));
        assert!(is_active("//", &exact));
        assert!(!is_active("/docs", &exact));
        assert!(is_active("/docs", &partial));
    }

    #[test]
    fn empty_items_render_nothing() {
        assert!(menu_links(&[], "/", is_active).is_empty());
    }

    #[test]
    fn duplicates_match_independently() {
        let items = vec![
            NavigationItem::new("Docs", "/docs", false),
            NavigationItem::new("Guide", "/docs", true),
        ];

        let links = menu_links(&items, "/docs/intro", is_active);
        assert!(!links[0].active);
        assert!(links[1].active);

        let links = menu_links(&items, "/docs", is_active);
        assert!(links.iter().all(|l| l.active));
    }

    #[test]
    fn matcher_is_injected() {
        fn never(_: &str, _: &NavigationItem) -> bool {
            false
        }

        let links = menu_links(&items(), "/a", never);
        assert!(links.iter().all(|l| !l.active));
    }

    #[test]
    fn dark_flag_only_changes_container_class() {
        assert_eq!(nav_class(false), "menu");
        assert_eq!(nav_class(true), "menu dark");
    }

    #[test]
    fn active_dot_is_centered_on_half_border() {
        let theme = Theme::default();
        let css = menu_stylesheet(&theme).unwrap();

        assert!(css.contains("left: calc(50% - 0.125rem);"));
        assert!(css.contains("height: 0.25rem;"));
        assert!(css.contains("width: 0.25rem;"));
        assert!(css.contains(&format!("top: {};", theme.content_margin)));
        assert!(css.contains("transition: color 0.2s ease-in-out;"));
        assert!(css.contains(".menu a:not(:last-child) {\n  margin-right: 1.5rem;"));
    }

    #[test]
    fn bad_border_fails() {
        let mut theme = Theme::default();
        theme.border = String::from("thin");

        assert!(menu_stylesheet(&theme).is_err());
    }
}
