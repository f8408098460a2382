// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click ripples on buttons and hover micro-interactions.

use kurbo::{Point, Rect};

use crate::time::Duration;

/// How long a ripple element lives before removal.
pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(600);

/// Class given to ripple elements.
pub const RIPPLE_CLASS: &str = "ripple";

/// Stylesheet injected once for ripples and the form message fade-out.
pub const RIPPLE_STYLESHEET: &str = "
    .btn {
        position: relative;
        overflow: hidden;
    }

    .ripple {
        position: absolute;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.6);
        transform: scale(0);
        animation: ripple-animation 0.6s ease-out;
        pointer-events: none;
    }

    @keyframes ripple-animation {
        to {
            transform: scale(4);
            opacity: 0;
        }
    }

    @keyframes fadeOut {
        from {
            opacity: 1;
        }
        to {
            opacity: 0;
        }
    }
";

/// Placement of a circular ripple inside a button, in button-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    /// Diameter; the larger of the button's width and height.
    pub size: f64,
    /// Left edge relative to the button.
    pub left: f64,
    /// Top edge relative to the button.
    pub top: f64,
}

impl Ripple {
    /// Centers a ripple on `click`, both in viewport coordinates.
    #[must_use]
    pub fn from_click(button: Rect, click: Point) -> Self {
        let size = button.width().max(button.height());
        Self {
            size,
            left: click.x - button.x0 - size / 2.0,
            top: click.y - button.y0 - size / 2.0,
        }
    }

    /// Circle covered by the ripple before it animates, in button-local pixels.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.left,
            self.top,
            self.left + self.size,
            self.top + self.size,
        )
    }
}

/// Inline styles written on pointer enter and leave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HoverEffect {
    /// CSS selectors the effect applies to.
    pub selectors: &'static [&'static str],
    /// `transition` installed on enter, if any.
    pub transition: Option<&'static str>,
    /// `transform` on enter, if any.
    pub enter: Option<&'static str>,
    /// `transform` on leave, if any.
    pub leave: Option<&'static str>,
}

impl HoverEffect {
    /// Cards ease into their CSS hover state.
    pub const CARDS: Self = Self {
        selectors: &[".link-card", ".project-card", ".course-card"],
        transition: Some("all 0.3s ease"),
        enter: None,
        leave: None,
    };

    /// Icons grow slightly.
    pub const ICONS: Self = Self {
        selectors: &[".project-icon", ".instrument-icon"],
        transition: Some("transform 0.3s ease"),
        enter: Some("scale(1.1)"),
        leave: Some("scale(1)"),
    };

    /// Social links lift.
    pub const SOCIAL_LINKS: Self = Self {
        selectors: &[".social-link", ".social-link-contact"],
        transition: None,
        enter: Some("translateY(-3px) scale(1.05)"),
        leave: Some("translateY(0) scale(1)"),
    };

    /// Every hover effect on the page.
    pub const ALL: [Self; 3] = [Self::CARDS, Self::ICONS, Self::SOCIAL_LINKS];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_is_centered_on_click() {
        let button = Rect::new(100.0, 50.0, 220.0, 90.0);
        let ripple = Ripple::from_click(button, Point::new(160.0, 70.0));
        assert_eq!(ripple.size, 120.0, "wider than tall");
        assert_eq!(ripple.left, 0.0);
        assert_eq!(ripple.top, -40.0);
        assert_eq!(ripple.rect().center(), Point::new(60.0, 20.0));
    }

    #[test]
    fn ripple_box_is_a_square_at_its_offset() {
        let button = Rect::new(0.0, 0.0, 80.0, 200.0);
        let circle = Ripple::from_click(button, Point::new(10.0, 150.0)).rect();
        assert_eq!(circle.width(), 200.0, "taller than wide");
        assert_eq!(circle.height(), circle.width());
        assert_eq!((circle.x0, circle.y0), (-90.0, 50.0));
    }

    #[test]
    fn hover_effects_cover_distinct_selectors() {
        let total: usize = HoverEffect::ALL.iter().map(|h| h.selectors.len()).sum();
        assert_eq!(total, 7);
        assert!(HoverEffect::CARDS.enter.is_none(), "cards only animate via CSS");
    }
}
