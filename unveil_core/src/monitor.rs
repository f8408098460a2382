// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility monitoring contract.
//!
//! A monitor watches a set of elements and reports, in batches, which of them
//! crossed the visibility threshold since the last report. The browser backend
//! wraps `IntersectionObserver`; [`GeometryMonitor`] computes the same
//! notifications from explicit rectangles, for simulations and tests.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::geometry::{RootMargin, intersection_ratio, intersects};

/// One element's visibility as delivered in a notification batch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityEntry<E> {
    /// The element whose visibility changed.
    pub target: E,
    /// Visible fraction of the element inside the (margin-adjusted) root.
    pub ratio: f64,
    /// Whether the element touches the root box at all.
    pub is_intersecting: bool,
}

/// Starts and stops visibility tracking for individual elements.
///
/// A monitor that is unavailable on the host is represented by its absence
/// (`None`) rather than by a failing implementation.
pub trait VisibilityMonitor<E> {
    /// Begins tracking `element`. Tracking an element twice has no effect.
    fn observe(&mut self, element: &E);

    /// Stops tracking `element`. Unknown elements are ignored.
    fn unobserve(&mut self, element: &E);
}

#[derive(Clone, Debug)]
struct Watched<E> {
    element: E,
    /// Whether the element was past the threshold at the last check; `None`
    /// until the first check after `observe`.
    visible: Option<bool>,
}

/// Computes visibility batches from element rectangles.
///
/// Follows `IntersectionObserver` delivery rules: every newly observed element
/// is reported on the next check, and afterwards only threshold crossings are
/// reported. Entries are in observation order.
#[derive(Clone, Debug)]
pub struct GeometryMonitor<E> {
    root_margin: RootMargin,
    threshold: f64,
    watched: Vec<Watched<E>>,
}

impl<E: Clone + PartialEq> GeometryMonitor<E> {
    /// Creates a monitor with the given margin and threshold.
    #[must_use]
    pub fn new(root_margin: RootMargin, threshold: f64) -> Self {
        Self {
            root_margin,
            threshold,
            watched: Vec::new(),
        }
    }

    /// Returns the number of elements currently tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.watched.len()
    }

    /// Returns `true` if nothing is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.watched.is_empty()
    }

    /// Returns `true` if `element` is tracked.
    #[must_use]
    pub fn is_observing(&self, element: &E) -> bool {
        self.watched.iter().any(|w| w.element == *element)
    }

    /// Evaluates every tracked element against `viewport` and returns the
    /// batch of entries to deliver (possibly empty).
    pub fn check(
        &mut self,
        viewport: Rect,
        mut rect_of: impl FnMut(&E) -> Rect,
    ) -> Vec<VisibilityEntry<E>> {
        let root = self.root_margin.expand(viewport);
        let mut batch = Vec::new();
        for w in &mut self.watched {
            let rect = rect_of(&w.element);
            let is_intersecting = intersects(rect, root);
            let ratio = intersection_ratio(rect, root);
            let visible = is_intersecting && ratio >= self.threshold;
            if w.visible != Some(visible) {
                w.visible = Some(visible);
                batch.push(VisibilityEntry {
                    target: w.element.clone(),
                    ratio,
                    is_intersecting,
                });
            }
        }
        batch
    }
}

impl<E: Clone + PartialEq> VisibilityMonitor<E> for GeometryMonitor<E> {
    fn observe(&mut self, element: &E) {
        if !self.is_observing(element) {
            self.watched.push(Watched {
                element: element.clone(),
                visible: None,
            });
        }
    }

    fn unobserve(&mut self, element: &E) {
        self.watched.retain(|w| w.element != *element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

    fn at_y(y: f64) -> Rect {
        Rect::new(0.0, y, 200.0, y + 100.0)
    }

    #[test]
    fn first_check_reports_every_observed_element() {
        let mut m = GeometryMonitor::new(RootMargin::ZERO, 0.1);
        m.observe(&1_u32);
        m.observe(&2_u32);
        m.observe(&1_u32);
        assert_eq!(m.len(), 2, "duplicate observe is ignored");

        let batch = m.check(VIEWPORT, |&id| if id == 1 { at_y(0.0) } else { at_y(2000.0) });
        assert_eq!(batch.len(), 2);
        assert!(batch[0].is_intersecting);
        assert_eq!(batch[0].ratio, 1.0);
        assert!(!batch[1].is_intersecting);

        let again = m.check(VIEWPORT, |&id| if id == 1 { at_y(0.0) } else { at_y(2000.0) });
        assert!(again.is_empty(), "no crossing, no entries");
    }

    #[test]
    fn reports_threshold_crossings_only() {
        let mut m = GeometryMonitor::new(RootMargin::ZERO, 0.5);
        m.observe(&'a');
        let _ = m.check(VIEWPORT, |_| at_y(1000.0));

        // 20% visible: intersecting but below threshold, still not visible.
        assert!(m.check(VIEWPORT, |_| at_y(580.0)).is_empty());

        let batch = m.check(VIEWPORT, |_| at_y(540.0));
        assert_eq!(batch.len(), 1);
        assert!((batch[0].ratio - 0.6).abs() < 1e-9, "ratio {}", batch[0].ratio);
    }

    #[test]
    fn margin_shrinks_the_root() {
        let mut m = GeometryMonitor::new(RootMargin::bottom_px(-50.0), 0.1);
        m.observe(&'a');
        // Top 40px inside the viewport, but entirely inside the 50px margin.
        let batch = m.check(VIEWPORT, |_| at_y(560.0));
        assert_eq!(batch[0].ratio, 0.0);
        assert!(!batch[0].is_intersecting);
    }

    #[test]
    fn unobserved_elements_are_never_reported() {
        let mut m = GeometryMonitor::new(RootMargin::ZERO, 0.1);
        m.observe(&'a');
        m.unobserve(&'a');
        m.unobserve(&'z');
        assert!(m.is_empty());
        assert!(m.check(VIEWPORT, |_| at_y(0.0)).is_empty());
    }
}
