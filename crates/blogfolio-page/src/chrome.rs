//! Navigation chrome around the terminal: the mobile menu, the
//! scroll-to-top button and in-page anchor links.

/// Scroll offset past which the scroll-to-top button is shown.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MobileMenu {
    is_active: bool,
}

impl MobileMenu {
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Hamburger button click.
    pub fn toggle(&mut self) {
        self.is_active = !self.is_active;
    }

    /// Any nav link click closes the menu.
    pub fn close(&mut self) {
        self.is_active = false;
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScrollToTop {
    visible: bool,
}

impl ScrollToTop {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Update visibility for the current vertical scroll offset.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.visible = offset > SCROLL_TOP_THRESHOLD;
        self.visible
    }

    /// Offset the page scrolls to when the button is clicked.
    pub fn target(&self) -> f64 {
        0.0
    }
}

/// Resolve an in-page `#id` link against the ids present on the page.
pub fn resolve_anchor<'a>(href: &str, ids: &[&'a str]) -> Option<&'a str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    ids.iter().copied().find(|candidate| *candidate == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_toggle_and_close() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(menu.is_active());
        menu.toggle();
        assert!(!menu.is_active());
        menu.toggle();
        menu.close();
        assert!(!menu.is_active());
    }

    #[test]
    fn test_scroll_to_top_threshold() {
        let mut button = ScrollToTop::default();
        assert!(!button.on_scroll(0.0));
        assert!(!button.on_scroll(300.0));
        assert!(button.on_scroll(300.5));
        assert!(button.is_visible());
        assert!(!button.on_scroll(120.0));
        assert_eq!(button.target(), 0.0);
    }

    #[test]
    fn test_resolve_anchor() {
        let ids = ["about", "projects", "terminal"];
        assert_eq!(resolve_anchor("#projects", &ids), Some("projects"));
        assert_eq!(resolve_anchor("#missing", &ids), None);
        assert_eq!(resolve_anchor("#", &ids), None);
        assert_eq!(resolve_anchor("https://x.com/l0n3d3v", &ids), None);
    }
}
