// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `IntersectionObserver` visibility source.
//!
//! [`IntersectionMonitor`] owns an observer configured from
//! [`RevealOptions`] and the JS closure it calls back into. Each callback
//! converts the delivered `IntersectionObserverEntry` array into a batch of
//! [`VisibilityEntry`] values, in delivery order, and hands it to the user
//! callback together with an [`ObserverRef`] for unobserving.

use alloc::boxed::Box;
use alloc::vec::Vec;

use js_sys::Array;
use unveil_core::monitor::{VisibilityEntry, VisibilityMonitor};
use unveil_core::reveal::RevealOptions;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// A borrowed handle to a live observer, passed to batch callbacks.
#[derive(Clone, Debug)]
pub struct ObserverRef {
    observer: IntersectionObserver,
}

impl VisibilityMonitor<HtmlElement> for ObserverRef {
    fn observe(&mut self, element: &HtmlElement) {
        self.observer.observe(element);
    }

    fn unobserve(&mut self, element: &HtmlElement) {
        self.observer.unobserve(element);
    }
}

/// Visibility monitor backed by one `IntersectionObserver`.
///
/// Dropping the monitor disconnects the observer and releases its closure.
pub struct IntersectionMonitor {
    handle: ObserverRef,
    _callback: ObserverClosure,
}

impl IntersectionMonitor {
    /// Creates an observer with the threshold and root margin of `options`.
    ///
    /// `on_batch` runs once per notification with the converted entries.
    /// Entries whose target is not an `HtmlElement` are dropped.
    pub fn new(
        options: &RevealOptions,
        mut on_batch: impl FnMut(Vec<VisibilityEntry<HtmlElement>>, &mut ObserverRef) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    Some(VisibilityEntry {
                        target: entry.target().dyn_into::<HtmlElement>().ok()?,
                        ratio: entry.intersection_ratio(),
                        is_intersecting: entry.is_intersecting(),
                    })
                })
                .collect();
            on_batch(batch, &mut ObserverRef { observer });
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin.to_css());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        Ok(Self {
            handle: ObserverRef { observer },
            _callback: callback,
        })
    }

    /// Returns a handle usable outside the callback.
    #[must_use]
    pub fn handle(&self) -> ObserverRef {
        self.handle.clone()
    }
}

impl VisibilityMonitor<HtmlElement> for IntersectionMonitor {
    fn observe(&mut self, element: &HtmlElement) {
        self.handle.observe(element);
    }

    fn unobserve(&mut self, element: &HtmlElement) {
        self.handle.unobserve(element);
    }
}

impl Drop for IntersectionMonitor {
    fn drop(&mut self) {
        self.handle.observer.disconnect();
    }
}

impl core::fmt::Debug for IntersectionMonitor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IntersectionMonitor")
            .field("observer", &"IntersectionObserver")
            .finish_non_exhaustive()
    }
}
