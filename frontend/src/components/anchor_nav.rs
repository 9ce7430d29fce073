/// The element id an in-page link points at, or `None` for links that
/// should navigate normally. `"#"` yields an empty id, which matches nothing.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

/// Document offset to scroll to so the target sits just under the fixed navbar.
pub fn scroll_target(element_top: f64, scroll_y: f64, navbar_height: f64) -> f64 {
    element_top + scroll_y - navbar_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_links_are_in_page() {
        assert_eq!(anchor_id("#gallery"), Some("gallery"));
        assert_eq!(anchor_id("#"), Some(""));
    }

    #[test]
    fn other_links_navigate_normally() {
        assert_eq!(anchor_id("https://example.com/#gallery"), None);
        assert_eq!(anchor_id("contact.html"), None);
        assert_eq!(anchor_id(""), None);
    }

    #[test]
    fn target_accounts_for_navbar() {
        // Element 400px below the viewport top, page already scrolled 250px.
        assert_eq!(scroll_target(400.0, 250.0, 72.0), 578.0);
        assert_eq!(scroll_target(-100.0, 600.0, 72.0), 428.0);
    }
}
