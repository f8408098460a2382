// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport geometry: root margins and intersection ratios.
//!
//! Rectangles are [`kurbo::Rect`] in CSS pixels, y growing downwards, in the
//! same coordinate space as the viewport (the "root").

use alloc::string::String;
use core::fmt::{self, Write as _};
use core::str::FromStr;

use kurbo::Rect;

/// One side of a [`RootMargin`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarginLength {
    /// Absolute CSS pixels.
    Px(f64),
    /// Percentage of the root's width (left/right) or height (top/bottom).
    Percent(f64),
}

impl MarginLength {
    /// Resolves the length against the root extent along its axis.
    #[must_use]
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Px(px) => px,
            Self::Percent(pct) => extent * pct / 100.0,
        }
    }

    fn parse(token: &str) -> Option<Self> {
        if let Some(n) = token.strip_suffix("px") {
            finite(n).map(Self::Px)
        } else if let Some(n) = token.strip_suffix('%') {
            finite(n).map(Self::Percent)
        } else if finite(token)? == 0.0 {
            // Unitless lengths are only valid for zero, as in CSS.
            Some(Self::Px(0.0))
        } else {
            None
        }
    }
}

/// Parses a number, rejecting `NaN` and infinities.
fn finite(n: &str) -> Option<f64> {
    n.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl fmt::Display for MarginLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}px"),
            Self::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

/// Grows (positive) or shrinks (negative) the root box before intersection is
/// computed, in CSS `margin` shorthand order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMargin {
    /// Top edge.
    pub top: MarginLength,
    /// Right edge.
    pub right: MarginLength,
    /// Bottom edge.
    pub bottom: MarginLength,
    /// Left edge.
    pub left: MarginLength,
}

impl RootMargin {
    /// No margin: the root box is the viewport.
    pub const ZERO: Self = Self::bottom_px(0.0);

    /// Offsets only the bottom edge, e.g. `-50.0` for `"0px 0px -50px 0px"`.
    #[must_use]
    pub const fn bottom_px(px: f64) -> Self {
        Self {
            top: MarginLength::Px(0.0),
            right: MarginLength::Px(0.0),
            bottom: MarginLength::Px(px),
            left: MarginLength::Px(0.0),
        }
    }

    /// Parses CSS margin shorthand with one to four `px`/`%` components.
    pub fn parse(s: &str) -> Result<Self, ParseMarginError> {
        let mut sides = [MarginLength::Px(0.0); 4];
        let mut count = 0;
        for token in s.split_whitespace() {
            if count == 4 {
                return Err(ParseMarginError::TooManyValues);
            }
            sides[count] = MarginLength::parse(token).ok_or(ParseMarginError::InvalidLength {
                position: count,
            })?;
            count += 1;
        }
        let [a, b, c, d] = sides;
        match count {
            0 => Err(ParseMarginError::Empty),
            1 => Ok(Self::sides(a, a, a, a)),
            2 => Ok(Self::sides(a, b, a, b)),
            3 => Ok(Self::sides(a, b, c, b)),
            _ => Ok(Self::sides(a, b, c, d)),
        }
    }

    const fn sides(
        top: MarginLength,
        right: MarginLength,
        bottom: MarginLength,
        left: MarginLength,
    ) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Applies the margin to a root rectangle.
    #[must_use]
    pub fn expand(&self, root: Rect) -> Rect {
        let (w, h) = (root.width(), root.height());
        Rect::new(
            root.x0 - self.left.resolve(w),
            root.y0 - self.top.resolve(h),
            root.x1 + self.right.resolve(w),
            root.y1 + self.bottom.resolve(h),
        )
    }

    /// Renders the four-value CSS form accepted by `IntersectionObserver`.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "{self}");
        out
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

impl FromStr for RootMargin {
    type Err = ParseMarginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error returned by [`RootMargin::parse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseMarginError {
    /// The string had no components.
    Empty,
    /// More than four components were given.
    TooManyValues,
    /// A component was not a number followed by `px` or `%`.
    InvalidLength {
        /// Zero-based component index.
        position: usize,
    },
}

impl fmt::Display for ParseMarginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("root margin is empty"),
            Self::TooManyValues => f.write_str("root margin has more than four values"),
            Self::InvalidLength { position } => {
                write!(f, "root margin value {position} must be in px or %")
            }
        }
    }
}

impl core::error::Error for ParseMarginError {}

/// Returns `true` if `target` touches or overlaps `root`.
///
/// Edge-adjacent boxes count as intersecting, as they do for
/// `IntersectionObserverEntry.isIntersecting`.
#[must_use]
pub fn intersects(target: Rect, root: Rect) -> bool {
    target.x0 <= root.x1 && target.x1 >= root.x0 && target.y0 <= root.y1 && target.y1 >= root.y0
}

/// Fraction of `target`'s area that lies inside `root`, in `[0, 1]`.
///
/// A zero-area target that touches the root reports `1.0`.
#[must_use]
pub fn intersection_ratio(target: Rect, root: Rect) -> f64 {
    if !intersects(target, root) {
        return 0.0;
    }
    let area = target.area();
    if area <= 0.0 {
        return 1.0;
    }
    (target.intersect(root).area() / area).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_four_value_shorthand() {
        let m = RootMargin::parse("0px 0px -50px 0px").unwrap();
        assert_eq!(m, RootMargin::bottom_px(-50.0));
        assert_eq!(m.to_css(), "0px 0px -50px 0px");
    }

    #[test]
    fn expands_shorthand_like_css() {
        let one: RootMargin = "10px".parse().unwrap();
        assert_eq!(one.left, MarginLength::Px(10.0));
        let two = RootMargin::parse("5% 0").unwrap();
        assert_eq!(two.bottom, MarginLength::Percent(5.0));
        assert_eq!(two.right, MarginLength::Px(0.0));
        let three = RootMargin::parse("1px 2px 3px").unwrap();
        assert_eq!(three.left, MarginLength::Px(2.0), "left mirrors right");
    }

    #[test]
    fn rejects_bad_margins() {
        assert_eq!(RootMargin::parse("  "), Err(ParseMarginError::Empty));
        assert_eq!(
            RootMargin::parse("1px 2px 3px 4px 5px"),
            Err(ParseMarginError::TooManyValues)
        );
        assert_eq!(
            RootMargin::parse("0px 10em"),
            Err(ParseMarginError::InvalidLength { position: 1 })
        );
        assert_eq!(
            RootMargin::parse("12"),
            Err(ParseMarginError::InvalidLength { position: 0 })
        );
    }

    #[test]
    fn rejects_non_finite_lengths() {
        assert_eq!(
            RootMargin::parse("NaNpx"),
            Err(ParseMarginError::InvalidLength { position: 0 })
        );
        assert_eq!(
            RootMargin::parse("infpx 0 0 0"),
            Err(ParseMarginError::InvalidLength { position: 0 })
        );
        assert_eq!(
            RootMargin::parse("0 -inf%"),
            Err(ParseMarginError::InvalidLength { position: 1 })
        );
    }

    #[test]
    fn negative_bottom_margin_shrinks_root() {
        let root = Rect::new(0.0, 0.0, 800.0, 600.0);
        let shrunk = RootMargin::bottom_px(-50.0).expand(root);
        assert_eq!(shrunk, Rect::new(0.0, 0.0, 800.0, 550.0));

        let pct = RootMargin::parse("10%").unwrap().expand(root);
        assert_eq!(pct, Rect::new(-80.0, -60.0, 880.0, 660.0));
    }

    #[test]
    fn ratio_of_partially_visible_box() {
        let root = Rect::new(0.0, 0.0, 100.0, 100.0);
        let half = Rect::new(0.0, 50.0, 100.0, 150.0);
        assert!((intersection_ratio(half, root) - 0.5).abs() < 1e-9, "half visible");
        let outside = Rect::new(0.0, 200.0, 100.0, 300.0);
        assert_eq!(intersection_ratio(outside, root), 0.0);
        let inside = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert_eq!(intersection_ratio(inside, root), 1.0);
    }

    #[test]
    fn zero_area_target_touching_root_is_fully_visible() {
        let root = Rect::new(0.0, 0.0, 100.0, 100.0);
        let line = Rect::new(0.0, 100.0, 100.0, 100.0);
        assert!(intersects(line, root), "edge contact counts");
        assert_eq!(intersection_ratio(line, root), 1.0);
    }
}
