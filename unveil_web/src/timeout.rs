// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setTimeout`-backed delayed tasks and `setInterval` repeats.

use alloc::boxed::Box;
use alloc::rc::Rc;

use unveil_core::clock::TaskScheduler;
use unveil_core::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

// Direct global binding; works in windows and workers alike.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(callback: &JsValue, delay_ms: i32) -> i32;

    #[wasm_bindgen(js_name = "setInterval")]
    fn set_interval(callback: &JsValue, period_ms: i32) -> i32;
}

fn delay_ms(delay: Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(i32::MAX)
}

/// Runs `f` once after `delay`.
///
/// The callback is a one-shot closure released by JS after it runs.
pub fn after(delay: Duration, f: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(f);
    set_timeout(&callback, delay_ms(delay));
}

/// Runs `f` every `period` for the lifetime of the page.
pub fn every(period: Duration, f: impl FnMut() + 'static) {
    let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    set_interval(callback.as_ref(), delay_ms(period));
    // Page-lived interval; never cleared.
    callback.forget();
}

/// Schedules tasks on the browser timer queue and hands each to one handler.
///
/// Tasks with equal delays run in scheduling order.
pub struct TimeoutScheduler<T> {
    handler: Rc<dyn Fn(T)>,
}

impl<T: 'static> TimeoutScheduler<T> {
    /// Creates a scheduler that calls `handler` with each due task.
    pub fn new(handler: impl Fn(T) + 'static) -> Self {
        Self {
            handler: Rc::new(handler),
        }
    }
}

impl<T: 'static> TaskScheduler<T> for TimeoutScheduler<T> {
    fn schedule(&mut self, delay: Duration, task: T) {
        let handler = Rc::clone(&self.handler);
        after(delay, move || handler(task));
    }
}

impl<T> core::fmt::Debug for TimeoutScheduler<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TimeoutScheduler").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_saturate_at_i32_max() {
        assert_eq!(delay_ms(Duration::from_millis(1500)), 1500);
        assert_eq!(delay_ms(Duration(u64::MAX)), i32::MAX);
    }
}
