// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binding a reveal preset to the live document.
//!
//! [`mount`] selects the preset's elements, hides them, and connects an
//! `IntersectionObserver` and `setTimeout` to a [`RevealController`]. The
//! observer and timer callbacks hold only weak references to the binding, so
//! dropping the returned [`MountedReveal`] disconnects everything.

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;

use unveil_core::monitor::VisibilityEntry;
use unveil_core::reveal::{RevealController, RevealPreset, RevealTask};
use unveil_core::trace::Tracer;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::dom::select_all;
use crate::{
    InlineStylePresenter, IntersectionMonitor, ObserverRef, TimeoutScheduler,
    intersection_observer_available, now,
};

struct Binding {
    controller: RevealController<HtmlElement>,
    presenter: InlineStylePresenter,
    scheduler: TimeoutScheduler<RevealTask>,
    /// Kept alive for the observer's closure; `None` when unavailable.
    _monitor: Option<IntersectionMonitor>,
}

impl Binding {
    fn on_batch(&mut self, batch: &[VisibilityEntry<HtmlElement>], observer: &mut ObserverRef) {
        let Self {
            controller,
            scheduler,
            ..
        } = self;
        controller.on_visibility(batch, now(), observer, scheduler, &mut Tracer::none());
    }

    fn fire(&mut self, task: RevealTask) {
        let Self {
            controller,
            presenter,
            ..
        } = self;
        controller.fire(task, now(), presenter, &mut Tracer::none());
    }
}

/// A reveal preset attached to the document.
///
/// Keep it alive for as long as the page should react to scrolling.
pub struct MountedReveal {
    state: Rc<RefCell<Binding>>,
}

impl MountedReveal {
    /// Preset name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.state.borrow().controller.name()
    }

    /// Number of elements in the reveal set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.borrow().controller.len()
    }

    /// Returns `true` if the preset matched no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.borrow().controller.is_empty()
    }

    /// Returns `true` if an observer is attached.
    #[must_use]
    pub fn is_monitored(&self) -> bool {
        self.state.borrow().controller.is_monitored()
    }

    /// Number of elements revealed so far.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.state.borrow().controller.revealed_count()
    }
}

impl core::fmt::Debug for MountedReveal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("MountedReveal")
            .field("name", &state.controller.name())
            .field("elements", &state.controller.len())
            .field("revealed", &state.controller.revealed_count())
            .finish()
    }
}

/// Hides and starts observing every element matching `preset`.
///
/// Without `IntersectionObserver` the elements are hidden and never revealed.
/// Fails only if the preset's selectors are rejected by the document.
pub fn mount(document: &Document, preset: &RevealPreset) -> Result<MountedReveal, JsValue> {
    let elements = select_all(document, &preset.selector_list())?;

    let state = Rc::new_cyclic(|weak: &Weak<RefCell<Binding>>| {
        let on_batch = {
            let weak = weak.clone();
            move |batch: Vec<VisibilityEntry<HtmlElement>>, observer: &mut ObserverRef| {
                if let Some(state) = weak.upgrade() {
                    state.borrow_mut().on_batch(&batch, observer);
                }
            }
        };
        let mut monitor = if intersection_observer_available() {
            IntersectionMonitor::new(&preset.options, on_batch).ok()
        } else {
            None
        };

        let fire = weak.clone();
        let scheduler = TimeoutScheduler::new(move |task| {
            if let Some(state) = fire.upgrade() {
                state.borrow_mut().fire(task);
            }
        });

        let mut presenter = InlineStylePresenter;
        let controller = RevealController::initialize(
            preset,
            elements,
            now(),
            &mut presenter,
            monitor.as_mut(),
            &mut Tracer::none(),
        );

        RefCell::new(Binding {
            controller,
            presenter,
            scheduler,
            _monitor: monitor,
        })
    });

    Ok(MountedReveal { state })
}

/// Mounts every page preset, in installation order.
pub fn mount_all(document: &Document) -> Result<Vec<MountedReveal>, JsValue> {
    RevealPreset::all()
        .iter()
        .map(|preset| mount(document, preset))
        .collect()
}
