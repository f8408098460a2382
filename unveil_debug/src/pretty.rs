// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Timestamps
//! are printed in milliseconds.

use std::io::Write;

use unveil_core::time::HostTime;
use unveil_core::trace::{
    EntryIgnoredEvent, InitializeEvent, RevealFiredEvent, RevealScheduledEvent, TraceSink,
    VisibilityBatchEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn ms(t: HostTime) -> f64 {
    t.as_millis_f64()
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_initialize(&mut self, e: &InitializeEvent) {
        let _ = writeln!(
            self.writer,
            "[init] {} elements={} monitored={} threshold={} stagger={}ms at {:.1}ms",
            e.controller,
            e.elements,
            e.monitored,
            e.threshold,
            e.stagger.as_millis(),
            ms(e.at),
        );
    }

    fn on_visibility_batch(&mut self, e: &VisibilityBatchEvent) {
        let _ = writeln!(
            self.writer,
            "[batch] {} entries={} scheduled={} at {:.1}ms",
            e.controller,
            e.entries,
            e.scheduled,
            ms(e.at),
        );
    }

    fn on_reveal_scheduled(&mut self, e: &RevealScheduledEvent) {
        let _ = writeln!(
            self.writer,
            "[schedule] {} element={} index={} delay={}ms at {:.1}ms",
            e.controller,
            e.element.index(),
            e.batch_index,
            e.delay.as_millis(),
            ms(e.at),
        );
    }

    fn on_reveal_fired(&mut self, e: &RevealFiredEvent) {
        let _ = writeln!(
            self.writer,
            "[reveal] {} element={} at {:.1}ms",
            e.controller,
            e.element.index(),
            ms(e.at),
        );
    }

    fn on_entry_ignored(&mut self, e: &EntryIgnoredEvent) {
        let _ = match e.element {
            Some(id) => writeln!(
                self.writer,
                "[ignore] {} element={} reason={} at {:.1}ms",
                e.controller,
                id.index(),
                e.reason.as_str(),
                ms(e.at),
            ),
            None => writeln!(
                self.writer,
                "[ignore] {} element=? reason={} at {:.1}ms",
                e.controller,
                e.reason.as_str(),
                ms(e.at),
            ),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unveil_core::reveal::ElementId;
    use unveil_core::time::Duration;
    use unveil_core::trace::IgnoreReason;

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn schedule_line_shows_delay_and_index() {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        sink.on_reveal_scheduled(&RevealScheduledEvent {
            controller: "cards",
            at: HostTime::from_millis(1_250),
            element: ElementId::from_index(3),
            batch_index: 2,
            delay: Duration::from_millis(200),
        });
        assert_eq!(
            output(sink),
            "[schedule] cards element=3 index=2 delay=200ms at 1250.0ms\n"
        );
    }

    #[test]
    fn ignored_foreign_entry_has_no_element() {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        sink.on_entry_ignored(&EntryIgnoredEvent {
            controller: "sections",
            at: HostTime::ZERO,
            element: None,
            reason: IgnoreReason::UnknownTarget,
        });
        let line = output(sink);
        assert!(line.contains("element=?"), "{line}");
        assert!(line.contains("reason=unknown-target"), "{line}");
    }
}
