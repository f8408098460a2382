// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as little-endian records. [`decode`] reads them back as an
//! iterator of [`RecordedEvent`].
//!
//! Controller names are written once, in a name record ahead of their first
//! use; event records refer to them by `u8` index. A recording holds at most
//! 256 distinct names and further names share the last slot.

use unveil_core::reveal::ElementId;
use unveil_core::time::{Duration, HostTime};
use unveil_core::trace::{
    EntryIgnoredEvent, IgnoreReason, InitializeEvent, RevealFiredEvent, RevealScheduledEvent,
    TraceSink, VisibilityBatchEvent,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_NAME: u8 = 0;
const TAG_INITIALIZE: u8 = 1;
const TAG_VISIBILITY_BATCH: u8 = 2;
const TAG_REVEAL_SCHEDULED: u8 = 3;
const TAG_REVEAL_FIRED: u8 = 4;
const TAG_ENTRY_IGNORED: u8 = 5;

const MAX_NAMES: usize = u8::MAX as usize + 1;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
    names: Vec<&'static str>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_option_u32(&mut self, v: Option<u32>) {
        match v {
            Some(val) => {
                self.write_u8(1);
                self.write_u32(val);
            }
            None => {
                self.write_u8(0);
                self.write_u32(0);
            }
        }
    }

    /// Returns the table index of `name`, emitting a name record the first
    /// time it is seen.
    fn controller_index(&mut self, name: &'static str) -> u8 {
        let idx = match self.names.iter().position(|n| *n == name) {
            Some(idx) => idx,
            None if self.names.len() < MAX_NAMES => {
                self.names.push(name);
                let idx = self.names.len() - 1;
                self.write_u8(TAG_NAME);
                self.write_u8(table_index(idx));
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "controller names are short preset identifiers"
                )]
                self.write_u32(name.len() as u32);
                self.buf.extend_from_slice(name.as_bytes());
                idx
            }
            None => MAX_NAMES - 1,
        };
        table_index(idx)
    }

    fn begin(&mut self, tag: u8, controller: &'static str, at: HostTime) {
        let idx = self.controller_index(controller);
        self.write_u8(tag);
        self.write_u8(idx);
        self.write_u64(at.ticks());
    }
}

fn table_index(idx: usize) -> u8 {
    u8::try_from(idx).unwrap_or(u8::MAX)
}

fn reason_code(reason: IgnoreReason) -> u8 {
    match reason {
        IgnoreReason::UnknownTarget => 0,
        IgnoreReason::NotVisible => 1,
        IgnoreReason::AlreadyScheduled => 2,
        IgnoreReason::AlreadyRevealed => 3,
        IgnoreReason::StaleTask => 4,
    }
}

impl TraceSink for RecorderSink {
    fn on_initialize(&mut self, e: &InitializeEvent) {
        self.begin(TAG_INITIALIZE, e.controller, e.at);
        self.write_u32(e.elements);
        self.write_u8(u8::from(e.monitored));
        self.write_u64(e.threshold.to_bits());
        self.write_u64(e.stagger.ticks());
    }

    fn on_visibility_batch(&mut self, e: &VisibilityBatchEvent) {
        self.begin(TAG_VISIBILITY_BATCH, e.controller, e.at);
        self.write_u32(e.entries);
        self.write_u32(e.scheduled);
    }

    fn on_reveal_scheduled(&mut self, e: &RevealScheduledEvent) {
        self.begin(TAG_REVEAL_SCHEDULED, e.controller, e.at);
        self.write_u32(e.element.index());
        self.write_u32(e.batch_index);
        self.write_u64(e.delay.ticks());
    }

    fn on_reveal_fired(&mut self, e: &RevealFiredEvent) {
        self.begin(TAG_REVEAL_FIRED, e.controller, e.at);
        self.write_u32(e.element.index());
    }

    fn on_entry_ignored(&mut self, e: &EntryIgnoredEvent) {
        self.begin(TAG_ENTRY_IGNORED, e.controller, e.at);
        self.write_option_u32(e.element.map(ElementId::index));
        self.write_u8(reason_code(e.reason));
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
///
/// Controller names borrow from the recording.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent<'a> {
    /// An [`InitializeEvent`].
    Initialize {
        /// Controller name.
        controller: &'a str,
        /// Host time.
        at: HostTime,
        /// Size of the reveal set.
        elements: u32,
        /// Whether a monitor was attached.
        monitored: bool,
        /// Visibility threshold.
        threshold: f64,
        /// Per-position stagger.
        stagger: Duration,
    },
    /// A [`VisibilityBatchEvent`].
    VisibilityBatch {
        /// Controller name.
        controller: &'a str,
        /// Host time.
        at: HostTime,
        /// Entries in the batch.
        entries: u32,
        /// Reveals scheduled.
        scheduled: u32,
    },
    /// A [`RevealScheduledEvent`].
    RevealScheduled {
        /// Controller name.
        controller: &'a str,
        /// Host time.
        at: HostTime,
        /// The element.
        element: ElementId,
        /// Position in the batch.
        batch_index: u32,
        /// Stagger delay.
        delay: Duration,
    },
    /// A [`RevealFiredEvent`].
    RevealFired {
        /// Controller name.
        controller: &'a str,
        /// Host time.
        at: HostTime,
        /// The element.
        element: ElementId,
    },
    /// An [`EntryIgnoredEvent`].
    EntryIgnored {
        /// Controller name.
        controller: &'a str,
        /// Host time.
        at: HostTime,
        /// The element, if known.
        element: Option<ElementId>,
        /// Why nothing happened.
        reason: IgnoreReason,
    },
}

impl RecordedEvent<'_> {
    /// Host time of the event.
    #[must_use]
    pub fn at(&self) -> HostTime {
        match self {
            Self::Initialize { at, .. }
            | Self::VisibilityBatch { at, .. }
            | Self::RevealScheduled { at, .. }
            | Self::RevealFired { at, .. }
            | Self::EntryIgnored { at, .. } => *at,
        }
    }

    /// Controller that emitted the event.
    #[must_use]
    pub fn controller(&self) -> &str {
        match self {
            Self::Initialize { controller, .. }
            | Self::VisibilityBatch { controller, .. }
            | Self::RevealScheduled { controller, .. }
            | Self::RevealFired { controller, .. }
            | Self::EntryIgnored { controller, .. } => controller,
        }
    }
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
///
/// Decoding stops at the first truncated or malformed record.
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
        names: Vec::new(),
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
    names: Vec<&'a str>,
}

impl<'a> DecodeIter<'a> {
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read_bytes(&mut self, len: usize) -> Option<&'a [u8]> {
        if self.remaining() < len {
            return None;
        }
        let data: &'a [u8] = self.data;
        let bytes = &data[self.pos..self.pos + len];
        self.pos += len;
        Some(bytes)
    }

    fn read_u8(&mut self) -> Option<u8> {
        Some(self.read_bytes(1)?[0])
    }

    fn read_u32(&mut self) -> Option<u32> {
        Some(u32::from_le_bytes(self.read_bytes(4)?.try_into().ok()?))
    }

    fn read_u64(&mut self) -> Option<u64> {
        Some(u64::from_le_bytes(self.read_bytes(8)?.try_into().ok()?))
    }

    fn read_option_u32(&mut self) -> Option<Option<u32>> {
        let present = self.read_u8()?;
        let val = self.read_u32()?;
        Some(if present != 0 { Some(val) } else { None })
    }

    fn read_reason(&mut self) -> Option<IgnoreReason> {
        Some(match self.read_u8()? {
            0 => IgnoreReason::UnknownTarget,
            1 => IgnoreReason::NotVisible,
            2 => IgnoreReason::AlreadyScheduled,
            3 => IgnoreReason::AlreadyRevealed,
            4 => IgnoreReason::StaleTask,
            _ => return None,
        })
    }

    fn read_name_record(&mut self) -> Option<()> {
        let idx = usize::from(self.read_u8()?);
        let len = usize::try_from(self.read_u32()?).ok()?;
        let name = core::str::from_utf8(self.read_bytes(len)?).ok()?;
        if idx == self.names.len() {
            self.names.push(name);
        }
        Some(())
    }

    fn read_header(&mut self) -> Option<(&'a str, HostTime)> {
        let idx = usize::from(self.read_u8()?);
        let controller = *self.names.get(idx)?;
        Some((controller, HostTime(self.read_u64()?)))
    }

    fn decode_initialize(&mut self) -> Option<RecordedEvent<'a>> {
        let (controller, at) = self.read_header()?;
        Some(RecordedEvent::Initialize {
            controller,
            at,
            elements: self.read_u32()?,
            monitored: self.read_u8()? != 0,
            threshold: f64::from_bits(self.read_u64()?),
            stagger: Duration(self.read_u64()?),
        })
    }

    fn decode_visibility_batch(&mut self) -> Option<RecordedEvent<'a>> {
        let (controller, at) = self.read_header()?;
        Some(RecordedEvent::VisibilityBatch {
            controller,
            at,
            entries: self.read_u32()?,
            scheduled: self.read_u32()?,
        })
    }

    fn decode_reveal_scheduled(&mut self) -> Option<RecordedEvent<'a>> {
        let (controller, at) = self.read_header()?;
        Some(RecordedEvent::RevealScheduled {
            controller,
            at,
            element: ElementId::from_index(self.read_u32()?),
            batch_index: self.read_u32()?,
            delay: Duration(self.read_u64()?),
        })
    }

    fn decode_reveal_fired(&mut self) -> Option<RecordedEvent<'a>> {
        let (controller, at) = self.read_header()?;
        Some(RecordedEvent::RevealFired {
            controller,
            at,
            element: ElementId::from_index(self.read_u32()?),
        })
    }

    fn decode_entry_ignored(&mut self) -> Option<RecordedEvent<'a>> {
        let (controller, at) = self.read_header()?;
        Some(RecordedEvent::EntryIgnored {
            controller,
            at,
            element: self.read_option_u32()?.map(ElementId::from_index),
            reason: self.read_reason()?,
        })
    }
}

impl<'a> Iterator for DecodeIter<'a> {
    type Item = RecordedEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let tag = self.read_u8()?;
            return match tag {
                TAG_NAME => {
                    self.read_name_record()?;
                    continue;
                }
                TAG_INITIALIZE => self.decode_initialize(),
                TAG_VISIBILITY_BATCH => self.decode_visibility_batch(),
                TAG_REVEAL_SCHEDULED => self.decode_reveal_scheduled(),
                TAG_REVEAL_FIRED => self.decode_reveal_fired(),
                TAG_ENTRY_IGNORED => self.decode_entry_ignored(),
                _ => None,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduled(controller: &'static str, element: u32, delay_ms: u64) -> RevealScheduledEvent {
        RevealScheduledEvent {
            controller,
            at: HostTime::from_millis(10),
            element: ElementId::from_index(element),
            batch_index: element,
            delay: Duration::from_millis(delay_ms),
        }
    }

    #[test]
    fn decode_preserves_order_and_names() {
        let mut rec = RecorderSink::new();
        rec.on_initialize(&InitializeEvent {
            controller: "cards",
            at: HostTime::ZERO,
            elements: 3,
            monitored: true,
            threshold: 0.1,
            stagger: Duration::from_millis(100),
        });
        rec.on_reveal_scheduled(&scheduled("cards", 1, 100));
        rec.on_reveal_scheduled(&scheduled("sections", 0, 0));
        rec.on_reveal_fired(&RevealFiredEvent {
            controller: "cards",
            at: HostTime::from_millis(110),
            element: ElementId::from_index(1),
        });

        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(events.len(), 4);
        assert_eq!(
            events[0],
            RecordedEvent::Initialize {
                controller: "cards",
                at: HostTime::ZERO,
                elements: 3,
                monitored: true,
                threshold: 0.1,
                stagger: Duration::from_millis(100),
            }
        );
        assert_eq!(events[2].controller(), "sections");
        assert_eq!(events[3].at(), HostTime::from_millis(110));
    }

    #[test]
    fn names_are_written_once() {
        let mut rec = RecorderSink::new();
        rec.on_reveal_scheduled(&scheduled("cards", 0, 0));
        let first = rec.as_bytes().len();
        rec.on_reveal_scheduled(&scheduled("cards", 1, 100));
        let second = rec.as_bytes().len() - first;
        assert!(second < first, "second record reuses the name table");
    }

    #[test]
    fn ignored_entry_without_element() {
        let mut rec = RecorderSink::new();
        rec.on_entry_ignored(&EntryIgnoredEvent {
            controller: "sections",
            at: HostTime::ZERO,
            element: None,
            reason: IgnoreReason::UnknownTarget,
        });
        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(
            events,
            [RecordedEvent::EntryIgnored {
                controller: "sections",
                at: HostTime::ZERO,
                element: None,
                reason: IgnoreReason::UnknownTarget,
            }]
        );
    }

    #[test]
    fn unknown_reason_code_stops_decoding() {
        let mut rec = RecorderSink::new();
        rec.on_entry_ignored(&EntryIgnoredEvent {
            controller: "cards",
            at: HostTime::ZERO,
            element: Some(ElementId::from_index(0)),
            reason: IgnoreReason::StaleTask,
        });
        let mut bytes = rec.into_bytes();
        let last = bytes.len() - 1;
        assert_eq!(bytes[last], 4, "reason is the final byte of the record");
        bytes[last] = 9;
        assert_eq!(decode(&bytes).count(), 0);
    }

    #[test]
    fn truncated_recording_stops_cleanly() {
        let mut rec = RecorderSink::new();
        rec.on_reveal_scheduled(&scheduled("cards", 0, 0));
        let bytes = rec.into_bytes();
        assert_eq!(decode(&bytes[..bytes.len() - 1]).count(), 0);
    }
}
