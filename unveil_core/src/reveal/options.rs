// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reveal configuration and the page's named presets.

use alloc::string::String;

use crate::geometry::RootMargin;
use crate::monitor::VisibilityEntry;
use crate::time::Duration;

use super::style::{Easing, Offset, RevealStyle, Transition};

/// When an element counts as visible, and how reveals in one batch cascade.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Minimum visible fraction (0.0–1.0) of the element inside the root box.
    pub threshold: f64,
    /// Adjustment applied to the viewport before intersection is computed.
    pub root_margin: RootMargin,
    /// Extra delay per position in a notification batch.
    pub stagger: Duration,
}

impl RevealOptions {
    /// Creates options, clamping `threshold` into `[0, 1]` (NaN becomes 0).
    #[must_use]
    pub fn new(threshold: f64, root_margin: RootMargin, stagger: Duration) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            root_margin,
            stagger,
        }
    }

    /// Cards and list items: reveal 50px before the bottom edge, 100ms cascade.
    #[must_use]
    pub const fn cards() -> Self {
        Self {
            threshold: 0.1,
            root_margin: RootMargin::bottom_px(-50.0),
            stagger: Duration::from_millis(100),
        }
    }

    /// Whole sections: reveal 100px before the bottom edge, no cascade.
    #[must_use]
    pub const fn sections() -> Self {
        Self {
            threshold: 0.1,
            root_margin: RootMargin::bottom_px(-100.0),
            stagger: Duration::ZERO,
        }
    }

    /// Returns `true` if `entry` is visible enough to trigger a reveal.
    #[must_use]
    pub fn qualifies<E>(&self, entry: &VisibilityEntry<E>) -> bool {
        entry.is_intersecting && entry.ratio >= self.threshold
    }

    /// Delay for the entry at `index` in a notification batch.
    #[must_use]
    pub const fn delay_for(&self, index: usize) -> Duration {
        self.stagger.saturating_mul(index as u64)
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::cards()
    }
}

/// A named reveal configuration together with the selectors it applies to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealPreset {
    /// Short name used in diagnostics.
    pub name: &'static str,
    /// CSS selectors of the elements in the reveal set.
    pub selectors: &'static [&'static str],
    /// Visibility and stagger configuration.
    pub options: RevealOptions,
    /// Hidden/resting appearance.
    pub style: RevealStyle,
}

impl RevealPreset {
    /// Content cards, timeline entries, and interest items.
    #[must_use]
    pub const fn cards() -> Self {
        Self {
            name: "cards",
            selectors: &[
                ".link-card",
                ".course-card",
                ".leadership-card",
                ".project-card",
                ".value-card",
                ".interest-card",
                ".instrument-card",
                ".philosophy-item",
                ".timeline-item",
                ".interest-item",
            ],
            options: RevealOptions::cards(),
            style: RevealStyle {
                offset: Offset {
                    translate_y: 30.0,
                    scale: Some(0.95),
                },
                transition: Transition {
                    duration: Duration::from_millis(600),
                    easing: Easing::Standard,
                },
            },
        }
    }

    /// Top-level page sections.
    #[must_use]
    pub const fn sections() -> Self {
        Self {
            name: "sections",
            selectors: &[".content-section", ".quick-links", ".timeline-section"],
            options: RevealOptions::sections(),
            style: RevealStyle {
                offset: Offset {
                    translate_y: 50.0,
                    scale: None,
                },
                transition: Transition {
                    duration: Duration::from_millis(800),
                    easing: Easing::EaseOut,
                },
            },
        }
    }

    /// Both page presets, in installation order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::cards(), Self::sections()]
    }

    /// Joins the selectors into one `querySelectorAll` argument.
    #[must_use]
    pub fn selector_list(&self) -> String {
        self.selectors.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_clamped() {
        let o = RevealOptions::new(1.5, RootMargin::ZERO, Duration::ZERO);
        assert_eq!(o.threshold, 1.0);
        let o = RevealOptions::new(f64::NAN, RootMargin::ZERO, Duration::ZERO);
        assert_eq!(o.threshold, 0.0, "NaN threshold falls back to 0");
    }

    #[test]
    fn qualification_needs_intersection_and_threshold() {
        let o = RevealOptions::cards();
        let entry = |ratio, is_intersecting| VisibilityEntry {
            target: (),
            ratio,
            is_intersecting,
        };
        assert!(o.qualifies(&entry(0.1, true)), "exactly at threshold");
        assert!(!o.qualifies(&entry(0.05, true)));
        assert!(!o.qualifies(&entry(0.5, false)));
    }

    #[test]
    fn stagger_grows_with_batch_position() {
        let o = RevealOptions::cards();
        assert_eq!(o.delay_for(0), Duration::ZERO);
        assert_eq!(o.delay_for(2), Duration::from_millis(200));
        assert_eq!(RevealOptions::sections().delay_for(5), Duration::ZERO);
    }

    #[test]
    fn presets_keep_their_own_margins() {
        let [cards, sections] = RevealPreset::all();
        assert_eq!(cards.options.root_margin.to_css(), "0px 0px -50px 0px");
        assert_eq!(sections.options.root_margin.to_css(), "0px 0px -100px 0px");
        assert_eq!(
            sections.selector_list(),
            ".content-section, .quick-links, .timeline-section"
        );
    }
}
