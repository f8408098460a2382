// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for host integrations.
//!
//! Unveil splits host-specific work into *backend* crates. Each backend
//! provides the following pieces:
//!
//! - **Visibility source**: Implements
//!   [`VisibilityMonitor`](crate::monitor::VisibilityMonitor) and delivers
//!   [`VisibilityEntry`](crate::monitor::VisibilityEntry) batches to
//!   [`RevealController::on_visibility`]. Backends must check that the host
//!   facility exists and pass `None` to [`RevealController::initialize`] when
//!   it does not.
//!
//! - **Timers**: Implements [`TaskScheduler`](crate::clock::TaskScheduler)
//!   for [`RevealTask`](crate::reveal::RevealTask) and hands each released
//!   task to [`RevealController::fire`].
//!
//! - **Time**: A `now() -> HostTime` free function reading the host's
//!   monotonic clock, used to timestamp trace events.
//!
//! - **Presenter**: Implements the [`StylePresenter`] trait to write
//!   [`StyleChange`]s onto host elements (inline styles in the browser).
//!
//! # Crate boundaries
//!
//! `unveil_core` owns the reveal state machine, configuration, and this
//! contract module. Backend crates depend on `unveil_core` and provide host
//! glue. Application code depends on both and wires them together at page
//! initialization.
//!
//! [`RevealController::initialize`]: crate::reveal::RevealController::initialize
//! [`RevealController::on_visibility`]: crate::reveal::RevealController::on_visibility
//! [`RevealController::fire`]: crate::reveal::RevealController::fire

use crate::reveal::StyleChange;

/// Writes reveal styles onto host elements.
///
/// The browser presenter and test doubles implement this trait, so the
/// controller never touches the DOM directly.
///
/// # Wiring pseudocode
///
/// ```rust,ignore
/// let preset = RevealPreset::cards();
/// let mut monitor = intersection_observer_if_available();
/// let mut controller = RevealController::initialize(
///     &preset, elements, now(), &mut presenter, monitor.as_mut(), &mut tracer,
/// );
///
/// // Host delivers a batch (and an observer handle for unobserving):
/// controller.on_visibility(&batch, now(), &mut observer, &mut timers, &mut tracer);
///
/// // A timer releases a task:
/// controller.fire(task, now(), &mut presenter, &mut tracer);
/// ```
pub trait StylePresenter<E> {
    /// Applies `change` to `element`.
    fn apply(&mut self, element: &E, change: &StyleChange<'_>);
}
