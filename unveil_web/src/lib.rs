// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser backend for unveil.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`IntersectionMonitor`]: `IntersectionObserver` visibility source
//! - [`InlineStylePresenter`]: writes reveal styles to `element.style`
//! - [`TimeoutScheduler`]: `setTimeout`-backed delayed tasks
//! - [`LocalStorageThemeStore`]: theme persistence in `localStorage`
//! - [`reveal::mount`]: binds a reveal preset to the document
//! - [`page`]: DOM wiring for the theme toggle, navigation, scroll effects,
//!   ripples, hover effects, the plant animation, and the contact form

#![no_std]

extern crate alloc;

mod dom;
mod observer;
pub mod page;
mod presenter;
pub mod reveal;
mod storage;
mod timeout;

pub use observer::{IntersectionMonitor, ObserverRef};
pub use presenter::InlineStylePresenter;
pub use storage::LocalStorageThemeStore;
pub use timeout::{TimeoutScheduler, after, every};
pub use unveil_core::backend::StylePresenter;

use unveil_core::time::HostTime;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    fn performance_now() -> f64;
}

/// Returns the current host time from `performance.now()`.
#[must_use]
pub fn now() -> HostTime {
    host_time_from_millis(performance_now())
}

/// Converts a `DOMHighResTimeStamp` (milliseconds) to microsecond ticks.
fn host_time_from_millis(ms: f64) -> HostTime {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "performance.now() returns small positive f64; µs fits in u64"
    )]
    let us = (ms.max(0.0) * 1000.0) as u64;
    HostTime(us)
}

/// Returns `true` if the global object exposes `IntersectionObserver`.
///
/// Reveal sets mounted without it stay hidden.
#[must_use]
pub fn intersection_observer_available() -> bool {
    let global = js_sys::global();
    js_sys::Reflect::has(&global, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_become_microseconds() {
        assert_eq!(host_time_from_millis(16.5), HostTime(16_500));
        assert_eq!(host_time_from_millis(0.0), HostTime(0));
    }

    #[test]
    fn negative_timestamps_clamp_to_zero() {
        assert_eq!(host_time_from_millis(-3.0), HostTime(0));
    }
}
