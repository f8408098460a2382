// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-linked effects: progress bar and hero parallax.

use crate::reveal::{Easing, Transition};
use crate::time::Duration;

/// Hero image moves at this fraction of the scroll speed.
pub const PARALLAX_FACTOR: f64 = 0.3;

/// Delay before the body fades in after `load`.
pub const LOAD_FADE_DELAY: Duration = Duration::from_millis(100);

/// Body fade-in after `load`.
pub const LOAD_FADE: Transition = Transition {
    duration: Duration::from_millis(500),
    easing: Easing::EaseIn,
};

/// Inline style of the fixed progress bar element.
pub const PROGRESS_BAR_CSS: &str = "position: fixed; top: 0; left: 0; width: 0%; height: 4px; \
     background: linear-gradient(135deg, #2d8659 0%, #4a7c59 100%); z-index: 9999; \
     transition: width 0.1s ease-out; box-shadow: 0 2px 10px rgba(45, 134, 89, 0.4);";

/// Percentage of the document scrolled, in `[0, 100]`.
///
/// Pages that do not scroll report 0.
#[must_use]
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, client_height: f64) -> f64 {
    let range = scroll_height - client_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_y / range * 100.0).clamp(0.0, 100.0)
}

/// Vertical translation of the hero image while the hero is on screen.
///
/// Returns `None` once the hero has scrolled out, leaving the last offset in
/// place.
#[must_use]
pub fn hero_parallax(scroll_y: f64, hero_height: f64) -> Option<f64> {
    (scroll_y < hero_height).then_some(scroll_y * PARALLAX_FACTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_spans_scrollable_range() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 100.0, "overscroll clamps");
    }

    #[test]
    fn short_pages_have_no_progress() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
    }

    #[test]
    fn parallax_stops_below_hero() {
        assert_eq!(hero_parallax(100.0, 600.0), Some(30.0));
        assert_eq!(hero_parallax(600.0, 600.0), None);
    }
}
