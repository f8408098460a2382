// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation bar: mobile menu, scroll elevation, and active links.

use crate::reveal::{Easing, Transition};
use crate::time::Duration;

/// Viewports at or below this width use the collapsible menu.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Scroll offset past which the navbar is drawn raised.
pub const NAVBAR_ELEVATION_SCROLL_PX: f64 = 100.0;

/// Body fade-out before following a link to another page.
pub const PAGE_FADE: Transition = Transition {
    duration: Duration::from_millis(300),
    easing: Easing::EaseOut,
};

/// Page served for an empty path.
pub const INDEX_PAGE: &str = "index.html";

/// Inline styles of the three hamburger bars.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HamburgerStyle {
    /// `transform` of the top bar.
    pub top_transform: &'static str,
    /// `opacity` of the middle bar.
    pub middle_opacity: &'static str,
    /// `transform` of the bottom bar.
    pub bottom_transform: &'static str,
}

impl HamburgerStyle {
    /// Bars crossed into an X.
    pub const OPEN: Self = Self {
        top_transform: "rotate(45deg) translate(5px, 5px)",
        middle_opacity: "0",
        bottom_transform: "rotate(-45deg) translate(7px, -6px)",
    };

    /// Three flat bars.
    pub const CLOSED: Self = Self {
        top_transform: "none",
        middle_opacity: "1",
        bottom_transform: "none",
    };
}

/// Open/closed state of the collapsible menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// Returns `true` while the menu is expanded.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Bar styles for the current state.
    #[must_use]
    pub fn hamburger(&self) -> HamburgerStyle {
        if self.open {
            HamburgerStyle::OPEN
        } else {
            HamburgerStyle::CLOSED
        }
    }

    /// Handles the toggle button.
    pub fn toggle(&mut self) -> HamburgerStyle {
        self.open = !self.open;
        self.hamburger()
    }

    /// Collapses the menu.
    pub fn close(&mut self) -> HamburgerStyle {
        self.open = false;
        HamburgerStyle::CLOSED
    }

    /// Handles a click on a nav link; collapses on mobile widths.
    pub fn on_link_click(&mut self, viewport_width: f64) -> Option<HamburgerStyle> {
        (viewport_width <= MOBILE_BREAKPOINT_PX).then(|| self.close())
    }

    /// Handles a window resize; collapses when growing past the breakpoint.
    pub fn on_resize(&mut self, viewport_width: f64) -> Option<HamburgerStyle> {
        (viewport_width > MOBILE_BREAKPOINT_PX).then(|| self.close())
    }
}

/// Navbar shadow and backdrop blur for a scroll position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NavbarElevation {
    /// `box-shadow` value.
    pub box_shadow: &'static str,
    /// `backdrop-filter` value.
    pub backdrop_filter: &'static str,
}

impl NavbarElevation {
    /// Resting navbar at the top of the page.
    pub const FLAT: Self = Self {
        box_shadow: "0 2px 8px rgba(102, 126, 234, 0.1)",
        backdrop_filter: "blur(20px)",
    };

    /// Raised navbar once the page has scrolled.
    pub const RAISED: Self = Self {
        box_shadow: "0 8px 24px rgba(102, 126, 234, 0.2)",
        backdrop_filter: "blur(30px)",
    };

    /// Picks the elevation for a vertical scroll offset.
    #[must_use]
    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > NAVBAR_ELEVATION_SCROLL_PX {
            Self::RAISED
        } else {
            Self::FLAT
        }
    }
}

/// Last path segment of `pathname`, or [`INDEX_PAGE`] when empty.
#[must_use]
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some("") | None => INDEX_PAGE,
        Some(page) => page,
    }
}

/// Returns `true` if a nav link's `href` points at the current page.
#[must_use]
pub fn is_active_link(pathname: &str, href: &str) -> bool {
    href == current_page(pathname)
}

/// Returns `true` for links that should fade the page out before navigating.
#[must_use]
pub fn fades_on_navigate(href: &str) -> bool {
    href.ends_with(".html") && !href.starts_with('#')
}

/// Returns the selector of an in-page anchor target (`#id`), if `href` is one.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    (href.len() > 1 && href.starts_with('#')).then_some(href)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_crosses_and_uncrosses_bars() {
        let mut menu = MobileMenu::default();
        assert_eq!(menu.toggle(), HamburgerStyle::OPEN);
        assert!(menu.is_open());
        assert_eq!(menu.toggle(), HamburgerStyle::CLOSED);
        assert!(!menu.is_open());
    }

    #[test]
    fn link_click_closes_only_on_mobile() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert_eq!(menu.on_link_click(1024.0), None);
        assert!(menu.is_open(), "desktop click leaves menu alone");
        assert_eq!(menu.on_link_click(768.0), Some(HamburgerStyle::CLOSED));
        assert!(!menu.is_open());
    }

    #[test]
    fn resize_past_breakpoint_closes() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert_eq!(menu.on_resize(600.0), None);
        assert_eq!(menu.on_resize(769.0), Some(HamburgerStyle::CLOSED));
    }

    #[test]
    fn navbar_raises_after_threshold() {
        assert_eq!(NavbarElevation::for_scroll(100.0), NavbarElevation::FLAT);
        assert_eq!(NavbarElevation::for_scroll(100.5), NavbarElevation::RAISED);
    }

    #[test]
    fn active_link_uses_last_segment() {
        assert_eq!(current_page("/site/about.html"), "about.html");
        assert_eq!(current_page("/"), INDEX_PAGE);
        assert_eq!(current_page(""), INDEX_PAGE);
        assert!(is_active_link("/", "index.html"));
        assert!(!is_active_link("/projects.html", "index.html"));
    }

    #[test]
    fn page_fade_is_a_short_opacity_fade() {
        assert_eq!(PAGE_FADE.property_css("opacity"), "opacity 0.3s ease-out");
    }

    #[test]
    fn link_classification() {
        assert!(fades_on_navigate("about.html"));
        assert!(!fades_on_navigate("#contact"));
        assert_eq!(anchor_target("#contact"), Some("#contact"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("about.html"), None);
    }
}
