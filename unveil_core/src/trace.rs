// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the reveal controller.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! controller calls at each state change. All method bodies default to
//! no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::reveal::ElementId;
use crate::time::{Duration, HostTime};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Why a visibility entry or timer task had no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// The entry's target is not in the reveal set.
    UnknownTarget,
    /// The target is not intersecting or is below the threshold.
    NotVisible,
    /// The target already has a reveal scheduled.
    AlreadyScheduled,
    /// The target was already revealed.
    AlreadyRevealed,
    /// A timer task fired for an element that was not pending.
    StaleTask,
}

impl IgnoreReason {
    /// Short lowercase name for log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownTarget => "unknown-target",
            Self::NotVisible => "not-visible",
            Self::AlreadyScheduled => "already-scheduled",
            Self::AlreadyRevealed => "already-revealed",
            Self::StaleTask => "stale-task",
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once when a controller has hidden its elements.
#[derive(Clone, Copy, Debug)]
pub struct InitializeEvent {
    /// Preset name of the controller.
    pub controller: &'static str,
    /// Host time of initialization.
    pub at: HostTime,
    /// Size of the reveal set.
    pub elements: u32,
    /// Whether a visibility monitor was available.
    pub monitored: bool,
    /// Configured visibility threshold.
    pub threshold: f64,
    /// Configured per-position stagger.
    pub stagger: Duration,
}

/// Emitted after a notification batch has been processed.
#[derive(Clone, Copy, Debug)]
pub struct VisibilityBatchEvent {
    /// Preset name of the controller.
    pub controller: &'static str,
    /// Host time the batch arrived.
    pub at: HostTime,
    /// Number of entries in the batch.
    pub entries: u32,
    /// Number of reveals the batch scheduled.
    pub scheduled: u32,
}

/// Emitted when an element moves from hidden to pending.
#[derive(Clone, Copy, Debug)]
pub struct RevealScheduledEvent {
    /// Preset name of the controller.
    pub controller: &'static str,
    /// Host time the reveal was scheduled.
    pub at: HostTime,
    /// The element.
    pub element: ElementId,
    /// Position of the element's entry in its batch.
    pub batch_index: u32,
    /// Stagger delay before the reveal fires.
    pub delay: Duration,
}

/// Emitted when an element reaches its resting state.
#[derive(Clone, Copy, Debug)]
pub struct RevealFiredEvent {
    /// Preset name of the controller.
    pub controller: &'static str,
    /// Host time of the reveal.
    pub at: HostTime,
    /// The element.
    pub element: ElementId,
}

/// Emitted when an entry or task is dropped without effect.
#[derive(Clone, Copy, Debug)]
pub struct EntryIgnoredEvent {
    /// Preset name of the controller.
    pub controller: &'static str,
    /// Host time.
    pub at: HostTime,
    /// The element, if it belongs to the reveal set.
    pub element: Option<ElementId>,
    /// Why nothing happened.
    pub reason: IgnoreReason,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from reveal controllers.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called once per controller after its elements are hidden.
    fn on_initialize(&mut self, e: &InitializeEvent) {
        _ = e;
    }

    /// Called after each notification batch.
    fn on_visibility_batch(&mut self, e: &VisibilityBatchEvent) {
        _ = e;
    }

    /// Called when a reveal is scheduled.
    fn on_reveal_scheduled(&mut self, e: &RevealScheduledEvent) {
        _ = e;
    }

    /// Called when a reveal fires.
    fn on_reveal_fired(&mut self, e: &RevealFiredEvent) {
        _ = e;
    }

    /// Called when an entry or task has no effect.
    fn on_entry_ignored(&mut self, e: &EntryIgnoredEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits an [`InitializeEvent`].
    #[inline]
    pub fn initialize(&mut self, e: &InitializeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_initialize(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`VisibilityBatchEvent`].
    #[inline]
    pub fn visibility_batch(&mut self, e: &VisibilityBatchEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_visibility_batch(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RevealScheduledEvent`].
    #[inline]
    pub fn reveal_scheduled(&mut self, e: &RevealScheduledEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_reveal_scheduled(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RevealFiredEvent`].
    #[inline]
    pub fn reveal_fired(&mut self, e: &RevealFiredEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_reveal_fired(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`EntryIgnoredEvent`].
    #[inline]
    pub fn entry_ignored(&mut self, e: &EntryIgnoredEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_entry_ignored(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fired() -> RevealFiredEvent {
        RevealFiredEvent {
            controller: "cards",
            at: HostTime::from_millis(100),
            element: ElementId::from_index(3),
        }
    }

    #[test]
    fn noop_sink_accepts_everything() {
        let mut sink = NoopSink;
        sink.on_reveal_fired(&sample_fired());
        sink.on_entry_ignored(&EntryIgnoredEvent {
            controller: "cards",
            at: HostTime::ZERO,
            element: None,
            reason: IgnoreReason::UnknownTarget,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.reveal_fired(&sample_fired());
    }

    #[test]
    fn ignore_reasons_have_distinct_names() {
        let reasons = [
            IgnoreReason::UnknownTarget,
            IgnoreReason::NotVisible,
            IgnoreReason::AlreadyScheduled,
            IgnoreReason::AlreadyRevealed,
            IgnoreReason::StaleTask,
        ];
        for (i, a) in reasons.iter().enumerate() {
            for b in &reasons[i + 1..] {
                assert_ne!(a.as_str(), b.as_str(), "{a:?} vs {b:?}");
            }
        }
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            fired: Vec<u32>,
        }
        impl TraceSink for RecordingSink {
            fn on_reveal_fired(&mut self, e: &RevealFiredEvent) {
                self.fired.push(e.element.index());
            }
        }

        let mut sink = RecordingSink { fired: Vec::new() };
        let mut tracer = Tracer::new(&mut sink);
        tracer.reveal_fired(&sample_fired());
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.fired, &[3]);
    }
}
