// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport reveal controller and page interactivity for static sites.
//!
//! `unveil_core` holds everything that does not need a browser: the reveal
//! state machine, its presets, a geometry-based visibility monitor, a virtual
//! clock, and the decision logic of the page's other behaviors. It is `no_std`
//! compatible (with `alloc`).
//!
//! # Architecture
//!
//! ```text
//!   RevealController::initialize ──► StylePresenter::apply (hide)
//!                                └─► VisibilityMonitor::observe
//!
//!   visibility batch ──► RevealController::on_visibility
//!                             │  unobserve + TaskScheduler::schedule
//!                             ▼
//!   RevealTask (after index * stagger) ──► RevealController::fire
//!                                               │
//!                                               ▼
//!                                  StylePresenter::apply (reveal)
//! ```
//!
//! **[`reveal`]**: Per-element state machine, options, presets, and styles.
//!
//! **[`monitor`]**: The [`VisibilityMonitor`](monitor::VisibilityMonitor)
//! trait and a geometric implementation for hosts without a native
//! intersection API.
//!
//! **[`geometry`]**: Root margins and intersection ratios over `kurbo` rects.
//!
//! **[`clock`]**: The [`TaskScheduler`](clock::TaskScheduler) trait and a
//! deterministic [`VirtualClock`](clock::VirtualClock).
//!
//! **[`backend`]**: The [`StylePresenter`](backend::StylePresenter) trait.
//!
//! **[`page`]**: Theme, navigation, scroll, ripple, plant, and contact form logic.
//!
//! **[`time`]**: Microsecond host timestamps and durations.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types, with
//! a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` in dependencies and the
//!   `regex`-backed contact form validator.
//! - `trace` (disabled by default): Enables `Tracer` method bodies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod backend;
pub mod clock;
pub mod geometry;
pub mod monitor;
pub mod page;
pub mod reveal;
pub mod time;
pub mod trace;
