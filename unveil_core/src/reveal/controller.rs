// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport reveal state machine.

use alloc::vec::Vec;

use crate::backend::StylePresenter;
use crate::clock::TaskScheduler;
use crate::monitor::{VisibilityEntry, VisibilityMonitor};
use crate::time::HostTime;
use crate::trace::{
    EntryIgnoredEvent, IgnoreReason, InitializeEvent, RevealFiredEvent, RevealScheduledEvent,
    Tracer, VisibilityBatchEvent,
};

use super::id::ElementId;
use super::options::{RevealOptions, RevealPreset};
use super::style::{RevealStyle, StyleChange};

/// Lifecycle of one observed element.
///
/// `Hidden → PendingReveal → Revealed`; nothing leaves `Revealed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealState {
    /// Hidden and observed, waiting to become visible.
    Hidden,
    /// Seen; unobserved; reveal waiting on its stagger delay.
    PendingReveal,
    /// At rest. Terminal.
    Revealed,
}

/// Delayed work item handed to a [`TaskScheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RevealTask {
    /// Element to reveal.
    pub element: ElementId,
}

#[derive(Clone, Debug)]
struct Slot<E> {
    element: E,
    state: RevealState,
}

/// Reveals each element of a fixed set the first time it becomes visible.
///
/// The controller owns the per-element state; the host owns the elements,
/// the monitor, the timers, and the presenter, and passes them in per call.
/// See [`backend`](crate::backend) for the wiring.
#[derive(Clone, Debug)]
pub struct RevealController<E> {
    name: &'static str,
    options: RevealOptions,
    style: RevealStyle,
    slots: Vec<Slot<E>>,
    monitored: bool,
}

impl<E: PartialEq> RevealController<E> {
    /// Hides every element, then starts monitoring them.
    ///
    /// Hiding happens for all elements before the first `observe` call so no
    /// element can flash at full opacity. When `monitor` is `None` (the host
    /// has no visibility facility) the elements stay hidden for the lifetime
    /// of the page; this is not reported as an error.
    pub fn initialize<P, M>(
        preset: &RevealPreset,
        elements: impl IntoIterator<Item = E>,
        now: HostTime,
        presenter: &mut P,
        monitor: Option<&mut M>,
        tracer: &mut Tracer<'_>,
    ) -> Self
    where
        P: StylePresenter<E> + ?Sized,
        M: VisibilityMonitor<E> + ?Sized,
    {
        let slots: Vec<Slot<E>> = elements
            .into_iter()
            .map(|element| Slot {
                element,
                state: RevealState::Hidden,
            })
            .collect();

        let hide = StyleChange::Hide(&preset.style);
        for slot in &slots {
            presenter.apply(&slot.element, &hide);
        }

        let monitored = monitor.is_some();
        if let Some(monitor) = monitor {
            for slot in &slots {
                monitor.observe(&slot.element);
            }
        }

        #[expect(
            clippy::cast_possible_truncation,
            reason = "reveal sets are page element lists, far below u32::MAX"
        )]
        tracer.initialize(&InitializeEvent {
            controller: preset.name,
            at: now,
            elements: slots.len() as u32,
            monitored,
            threshold: preset.options.threshold,
            stagger: preset.options.stagger,
        });

        Self {
            name: preset.name,
            options: preset.options,
            style: preset.style,
            slots,
            monitored,
        }
    }

    /// Processes one notification batch.
    ///
    /// Every entry whose target is hidden and visible enough is unobserved and
    /// scheduled for reveal after `index * stagger`, where `index` is the
    /// entry's position in `batch`. Other entries have no effect. Returns the
    /// number of reveals scheduled.
    pub fn on_visibility<M, S>(
        &mut self,
        batch: &[VisibilityEntry<E>],
        now: HostTime,
        monitor: &mut M,
        scheduler: &mut S,
        tracer: &mut Tracer<'_>,
    ) -> usize
    where
        M: VisibilityMonitor<E> + ?Sized,
        S: TaskScheduler<RevealTask> + ?Sized,
    {
        let mut scheduled = 0;
        for (index, entry) in batch.iter().enumerate() {
            let Some(id) = self.id_of(&entry.target) else {
                self.ignore(tracer, now, None, IgnoreReason::UnknownTarget);
                continue;
            };
            let idx = id.0 as usize;
            match self.slots[idx].state {
                RevealState::PendingReveal => {
                    self.ignore(tracer, now, Some(id), IgnoreReason::AlreadyScheduled);
                }
                RevealState::Revealed => {
                    self.ignore(tracer, now, Some(id), IgnoreReason::AlreadyRevealed);
                }
                RevealState::Hidden if !self.options.qualifies(entry) => {
                    self.ignore(tracer, now, Some(id), IgnoreReason::NotVisible);
                }
                RevealState::Hidden => {
                    let slot = &mut self.slots[idx];
                    slot.state = RevealState::PendingReveal;
                    monitor.unobserve(&slot.element);
                    let delay = self.options.delay_for(index);
                    scheduler.schedule(delay, RevealTask { element: id });
                    scheduled += 1;
                    #[expect(
                        clippy::cast_possible_truncation,
                        reason = "batch positions are bounded by the reveal set size"
                    )]
                    tracer.reveal_scheduled(&RevealScheduledEvent {
                        controller: self.name,
                        at: now,
                        element: id,
                        batch_index: index as u32,
                        delay,
                    });
                }
            }
        }

        #[expect(
            clippy::cast_possible_truncation,
            reason = "batch sizes are bounded by the reveal set size"
        )]
        tracer.visibility_batch(&VisibilityBatchEvent {
            controller: self.name,
            at: now,
            entries: batch.len() as u32,
            scheduled: scheduled as u32,
        });
        scheduled
    }

    /// Runs a reveal released by the scheduler.
    ///
    /// Returns `true` if the element moved to [`RevealState::Revealed`]. A task
    /// for an element that is not pending (or not in this set) does nothing.
    pub fn fire<P>(
        &mut self,
        task: RevealTask,
        now: HostTime,
        presenter: &mut P,
        tracer: &mut Tracer<'_>,
    ) -> bool
    where
        P: StylePresenter<E> + ?Sized,
    {
        let id = task.element;
        let Some(slot) = self.slots.get_mut(id.0 as usize) else {
            self.ignore(tracer, now, None, IgnoreReason::StaleTask);
            return false;
        };
        if slot.state != RevealState::PendingReveal {
            self.ignore(tracer, now, Some(id), IgnoreReason::StaleTask);
            return false;
        }
        slot.state = RevealState::Revealed;
        presenter.apply(&slot.element, &StyleChange::Reveal(&self.style));
        tracer.reveal_fired(&RevealFiredEvent {
            controller: self.name,
            at: now,
            element: id,
        });
        true
    }

    /// Looks up the handle of a host element.
    #[must_use]
    pub fn id_of(&self, element: &E) -> Option<ElementId> {
        self.slots
            .iter()
            .position(|slot| slot.element == *element)
            .and_then(|idx| u32::try_from(idx).ok())
            .map(ElementId)
    }

    fn ignore(
        &self,
        tracer: &mut Tracer<'_>,
        at: HostTime,
        element: Option<ElementId>,
        reason: IgnoreReason,
    ) {
        tracer.entry_ignored(&EntryIgnoredEvent {
            controller: self.name,
            at,
            element,
            reason,
        });
    }
}

impl<E> RevealController<E> {
    /// Preset name this controller was created from.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Visibility and stagger configuration.
    #[must_use]
    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// Hidden/resting appearance.
    #[must_use]
    pub fn style(&self) -> &RevealStyle {
        &self.style
    }

    /// Size of the reveal set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the reveal set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `false` if the controller was initialized without a monitor.
    #[must_use]
    pub fn is_monitored(&self) -> bool {
        self.monitored
    }

    /// Returns the host element for a handle.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&E> {
        self.slots.get(id.0 as usize).map(|slot| &slot.element)
    }

    /// Returns the state of an element.
    #[must_use]
    pub fn state(&self, id: ElementId) -> Option<RevealState> {
        self.slots.get(id.0 as usize).map(|slot| slot.state)
    }

    /// Iterates over `(handle, state)` in initialization order.
    pub fn states(&self) -> impl Iterator<Item = (ElementId, RevealState)> + '_ {
        (0_u32..)
            .zip(&self.slots)
            .map(|(idx, slot)| (ElementId(idx), slot.state))
    }

    /// Number of elements waiting on their stagger delay.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.count(RevealState::PendingReveal)
    }

    /// Number of elements at rest.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.count(RevealState::Revealed)
    }

    fn count(&self, state: RevealState) -> usize {
        self.slots.iter().filter(|slot| slot.state == state).count()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::vec;
    use core::cell::RefCell;

    use super::*;
    use crate::clock::{Fired, VirtualClock};
    use crate::geometry::RootMargin;
    use crate::time::Duration;

    /// Inline style of a fake element.
    #[derive(Clone, Debug, PartialEq)]
    struct Inline {
        opacity: f64,
        transform: String,
        writes: u32,
    }

    /// Shared record of every host call, in order.
    type CallLog = Rc<RefCell<Vec<String>>>;

    /// Records style writes per element name; stands in for the DOM.
    #[derive(Debug, Default)]
    struct FakeDom {
        styles: Vec<(&'static str, Inline)>,
        log: CallLog,
    }

    impl FakeDom {
        fn style(&self, name: &str) -> Option<&Inline> {
            self.styles.iter().find(|(n, _)| *n == name).map(|(_, s)| s)
        }
    }

    impl StylePresenter<&'static str> for FakeDom {
        fn apply(&mut self, element: &&'static str, change: &StyleChange<'_>) {
            let opacity = change.opacity();
            let transform = change.transform().to_css();
            self.log.borrow_mut().push(format!("style {element}"));
            match self.styles.iter_mut().find(|(n, _)| n == element) {
                Some((_, s)) => {
                    s.opacity = opacity;
                    s.transform = transform;
                    s.writes += 1;
                }
                None => self.styles.push((
                    *element,
                    Inline {
                        opacity,
                        transform,
                        writes: 1,
                    },
                )),
            }
        }
    }

    /// Records observe/unobserve calls.
    #[derive(Debug, Default)]
    struct FakeObserver {
        observed: Vec<&'static str>,
        unobserved: Vec<&'static str>,
        log: CallLog,
    }

    impl VisibilityMonitor<&'static str> for FakeObserver {
        fn observe(&mut self, element: &&'static str) {
            self.log.borrow_mut().push(format!("observe {element}"));
            self.observed.push(*element);
        }

        fn unobserve(&mut self, element: &&'static str) {
            self.log.borrow_mut().push(format!("unobserve {element}"));
            self.observed.retain(|e| e != element);
            self.unobserved.push(*element);
        }
    }

    fn visible(target: &'static str) -> VisibilityEntry<&'static str> {
        VisibilityEntry {
            target,
            ratio: 1.0,
            is_intersecting: true,
        }
    }

    fn preset(stagger_ms: u64) -> RevealPreset {
        RevealPreset {
            options: RevealOptions::new(
                0.1,
                RootMargin::bottom_px(-50.0),
                Duration::from_millis(stagger_ms),
            ),
            ..RevealPreset::cards()
        }
    }

    struct Page {
        dom: FakeDom,
        observer: FakeObserver,
        clock: VirtualClock<RevealTask>,
        controller: RevealController<&'static str>,
    }

    impl Page {
        fn new(elements: &[&'static str], stagger_ms: u64) -> Self {
            let log = CallLog::default();
            let mut dom = FakeDom {
                log: Rc::clone(&log),
                ..FakeDom::default()
            };
            let mut observer = FakeObserver {
                log,
                ..FakeObserver::default()
            };
            let controller = RevealController::initialize(
                &preset(stagger_ms),
                elements.iter().copied(),
                HostTime::ZERO,
                &mut dom,
                Some(&mut observer),
                &mut Tracer::none(),
            );
            Self {
                dom,
                observer,
                clock: VirtualClock::new(),
                controller,
            }
        }

        fn deliver(&mut self, batch: &[VisibilityEntry<&'static str>]) -> usize {
            let now = self.clock.now();
            self.controller.on_visibility(
                batch,
                now,
                &mut self.observer,
                &mut self.clock,
                &mut Tracer::none(),
            )
        }

        /// Advances the clock, firing reveals; returns `(name, ms)` per reveal.
        fn advance_ms(&mut self, ms: u64) -> Vec<(&'static str, u64)> {
            let mut revealed = Vec::new();
            for Fired { at, task } in self.clock.advance(Duration::from_millis(ms)) {
                if self
                    .controller
                    .fire(task, at, &mut self.dom, &mut Tracer::none())
                {
                    let name = *self.controller.element(task.element).unwrap();
                    revealed.push((name, at.saturating_duration_since(HostTime::ZERO).as_millis()));
                }
            }
            revealed
        }

        fn opacity(&self, name: &str) -> f64 {
            self.dom.style(name).unwrap().opacity
        }
    }

    #[test]
    fn initialize_hides_everything_before_observing() {
        let page = Page::new(&["e1", "e2"], 100);
        for name in ["e1", "e2"] {
            let style = page.dom.style(name).unwrap();
            assert_eq!(style.opacity, 0.0, "{name} starts transparent");
            assert_eq!(style.transform, "translateY(30px) scale(0.95)");
        }
        assert_eq!(page.observer.observed, vec!["e1", "e2"]);
        assert_eq!(
            *page.dom.log.borrow(),
            vec!["style e1", "style e2", "observe e1", "observe e2"]
        );
        assert!(page.controller.is_monitored());
        assert_eq!(page.controller.len(), 2);
    }

    #[test]
    fn batch_order_drives_stagger() {
        let mut page = Page::new(&["a", "b", "c"], 100);
        let scheduled = page.deliver(&[visible("a"), visible("b"), visible("c")]);
        assert_eq!(scheduled, 3);
        assert_eq!(page.controller.pending_count(), 3);

        let revealed = page.advance_ms(250);
        assert_eq!(revealed, vec![("a", 0), ("b", 100), ("c", 200)]);
        assert_eq!(page.controller.revealed_count(), 3);
    }

    #[test]
    fn reversed_batch_reveals_in_intersection_order() {
        let mut page = Page::new(&["e1", "e2"], 100);
        page.deliver(&[visible("e2"), visible("e1")]);

        let first = page.advance_ms(0);
        assert_eq!(first, vec![("e2", 0)]);
        assert_eq!(page.opacity("e1"), 0.0, "e1 still waiting on its stagger");

        let second = page.advance_ms(100);
        assert_eq!(second, vec![("e1", 100)]);
        assert_eq!(page.opacity("e1"), 1.0);
        assert_eq!(page.dom.style("e1").unwrap().transform, "translateY(0) scale(1)");

        // Repeat notifications after reveal are no-ops.
        assert_eq!(page.deliver(&[visible("e1"), visible("e2")]), 0);
        assert!(page.advance_ms(1000).is_empty());
        assert_eq!(page.dom.style("e2").unwrap().writes, 2, "hide + reveal only");
    }

    #[test]
    fn revealed_elements_stop_being_observed() {
        let mut page = Page::new(&["a", "b"], 100);
        page.deliver(&[visible("b")]);
        assert_eq!(page.observer.observed, vec!["a"]);
        assert_eq!(page.observer.unobserved, vec!["b"]);

        // Pending elements are not rescheduled either.
        assert_eq!(page.deliver(&[visible("b")]), 0);
        assert_eq!(page.clock.pending(), 1);
    }

    #[test]
    fn below_threshold_entries_keep_their_stagger_slot() {
        let mut page = Page::new(&["a", "b"], 100);
        let faint = VisibilityEntry {
            target: "a",
            ratio: 0.05,
            is_intersecting: true,
        };
        assert_eq!(page.deliver(&[faint, visible("b")]), 1);
        assert_eq!(page.controller.state(ElementId(0)), Some(RevealState::Hidden));
        assert_eq!(page.advance_ms(100), vec![("b", 100)]);
    }

    #[test]
    fn foreign_elements_are_never_touched() {
        let mut page = Page::new(&["a"], 100);
        assert_eq!(page.deliver(&[visible("stranger")]), 0);
        assert!(page.advance_ms(1000).is_empty());
        assert!(page.dom.style("stranger").is_none());
        assert!(page.observer.unobserved.is_empty());
    }

    #[test]
    fn revealing_twice_has_no_second_effect() {
        let mut page = Page::new(&["a"], 0);
        page.deliver(&[visible("a")]);
        assert_eq!(page.advance_ms(0), vec![("a", 0)]);

        let task = RevealTask {
            element: ElementId(0),
        };
        assert!(
            !page
                .controller
                .fire(task, HostTime::ZERO, &mut page.dom, &mut Tracer::none()),
            "second fire is a no-op"
        );
        let bogus = RevealTask {
            element: ElementId(42),
        };
        assert!(
            !page
                .controller
                .fire(bogus, HostTime::ZERO, &mut page.dom, &mut Tracer::none())
        );
        assert_eq!(page.dom.style("a").unwrap().writes, 2);
    }

    #[test]
    fn missing_monitor_leaves_elements_hidden() {
        let mut dom = FakeDom::default();
        let controller = RevealController::initialize(
            &preset(100),
            ["e1", "e2"],
            HostTime::ZERO,
            &mut dom,
            None::<&mut FakeObserver>,
            &mut Tracer::none(),
        );
        assert!(!controller.is_monitored());
        assert_eq!(dom.style("e1").unwrap().opacity, 0.0);
        assert_eq!(dom.style("e2").unwrap().opacity, 0.0);
        assert!(
            controller
                .states()
                .all(|(_, state)| state == RevealState::Hidden)
        );
    }

    #[test]
    fn reveal_happens_within_stagger_times_batch_size() {
        let names = ["a", "b", "c", "d", "e"];
        let mut page = Page::new(&names, 100);
        let batch: Vec<_> = names.iter().map(|&n| visible(n)).collect();
        page.deliver(&batch);
        let revealed = page.advance_ms(100 * names.len() as u64);
        assert_eq!(revealed.len(), names.len());
        for name in names {
            assert_eq!(page.opacity(name), 1.0, "{name} revealed");
        }
    }
}
