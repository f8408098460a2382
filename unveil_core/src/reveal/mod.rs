// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport reveal controller.
//!
//! A *reveal set* is a fixed, ordered list of page elements chosen once at
//! initialization. Each element has:
//!
//! - An identity ([`ElementId`]), its position in the set.
//! - A [`RevealState`]: `Hidden`, then `PendingReveal` once it has been seen,
//!   then `Revealed` once its stagger delay has elapsed.
//!
//! # Flow
//!
//! 1. [`RevealController::initialize`] writes the hidden style (opacity 0,
//!    offset transform, transition) on every element and then observes them.
//! 2. The host delivers visibility batches to
//!    [`RevealController::on_visibility`]. Qualifying hidden elements are
//!    unobserved and a [`RevealTask`] is scheduled for each, delayed by
//!    `index_in_batch * stagger`.
//! 3. Released tasks go to [`RevealController::fire`], which writes the
//!    resting style (opacity 1, identity transform).
//!
//! # Presets
//!
//! The page uses two configurations, [`RevealPreset::cards`] and
//! [`RevealPreset::sections`], which differ in margin, stagger, offset, and
//! transition.

mod controller;
mod id;
mod options;
mod style;

pub use controller::{RevealController, RevealState, RevealTask};
pub use id::ElementId;
pub use options::{RevealOptions, RevealPreset};
pub use style::{Easing, Offset, RevealStyle, StyleChange, Transition};
