// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slow background bob of the decorative plant images.
//!
//! Every [`BOB_PERIOD`] each plant rises by [`BOB_LIFT_PX`], then settles
//! back [`REST_AFTER`] later. The right-hand plant is mirrored, so its
//! transform keeps the flip in front of the translation.

use crate::reveal::{Easing, Transition};
use crate::time::Duration;

/// Elements that bob.
pub const PLANT_SELECTORS: [&str; 2] = [".plant-bg-left", ".plant-bg-right"];

/// The animation runs only on pages that have this element.
pub const PLANT_MARKER: &str = ".plant-bg-left";

/// Class that marks the mirrored plant.
pub const RIGHT_CLASS: &str = "plant-bg-right";

/// Interval between rises.
pub const BOB_PERIOD: Duration = Duration::from_millis(20_000);

/// Delay from a rise to the matching settle.
pub const REST_AFTER: Duration = Duration::from_millis(10_000);

/// Upward travel at the top of a bob.
pub const BOB_LIFT_PX: f64 = 5.0;

/// Transition installed on each plant.
pub const PLANT_TRANSITION: Transition = Transition {
    duration: Duration::from_millis(20_000),
    easing: Easing::EaseInOut,
};

/// Which background plant an element is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlantSide {
    /// Drawn as authored.
    Left,
    /// Mirrored horizontally.
    Right,
}

impl PlantSide {
    /// Classifies an element by whether it carries [`RIGHT_CLASS`].
    #[must_use]
    pub const fn from_right_class(is_right: bool) -> Self {
        if is_right { Self::Right } else { Self::Left }
    }

    /// Transform for the given phase of the bob.
    #[must_use]
    pub const fn transform(self, phase: BobPhase) -> &'static str {
        match (self, phase) {
            (Self::Left, BobPhase::Raised) => "translateY(-5px)",
            (Self::Left, BobPhase::Resting) => "translateY(0)",
            (Self::Right, BobPhase::Raised) => "scaleX(-1) translateY(-5px)",
            (Self::Right, BobPhase::Resting) => "scaleX(-1) translateY(0)",
        }
    }
}

/// Position within one bob cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BobPhase {
    /// Lifted by [`BOB_LIFT_PX`].
    Raised,
    /// Back at the authored position.
    Resting,
}
