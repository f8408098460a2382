// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][format] JSON to the given writer.
//!
//! Each reveal becomes an async span (`"b"`/`"e"`) keyed by controller and
//! element, so the stagger of a batch shows up as a staircase of spans.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
/// Host times are already microseconds and are written unchanged.
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for recorded in decode(bytes) {
        match recorded {
            RecordedEvent::Initialize {
                controller,
                at,
                elements,
                monitored,
                threshold,
                stagger,
            } => {
                events.push(json!({
                    "ph": "i",
                    "name": "Initialize",
                    "cat": controller,
                    "ts": at.ticks(),
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "elements": elements,
                        "monitored": monitored,
                        "threshold": threshold,
                        "stagger_ms": stagger.as_millis(),
                    }
                }));
            }
            RecordedEvent::VisibilityBatch {
                controller,
                at,
                entries,
                scheduled,
            } => {
                events.push(json!({
                    "ph": "i",
                    "name": "VisibilityBatch",
                    "cat": controller,
                    "ts": at.ticks(),
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "entries": entries,
                        "scheduled": scheduled,
                    }
                }));
            }
            RecordedEvent::RevealScheduled {
                controller,
                at,
                element,
                batch_index,
                delay,
            } => {
                events.push(json!({
                    "ph": "b",
                    "name": "Reveal",
                    "cat": controller,
                    "id": span_id(controller, element.index()),
                    "ts": at.ticks(),
                    "pid": 0,
                    "tid": 0,
                    "args": {
                        "element": element.index(),
                        "batch_index": batch_index,
                        "delay_ms": delay.as_millis(),
                    }
                }));
            }
            RecordedEvent::RevealFired {
                controller,
                at,
                element,
            } => {
                events.push(json!({
                    "ph": "e",
                    "name": "Reveal",
                    "cat": controller,
                    "id": span_id(controller, element.index()),
                    "ts": at.ticks(),
                    "pid": 0,
                    "tid": 0,
                }));
            }
            RecordedEvent::EntryIgnored {
                controller,
                at,
                element,
                reason,
            } => {
                events.push(json!({
                    "ph": "i",
                    "name": "EntryIgnored",
                    "cat": controller,
                    "ts": at.ticks(),
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "element": element.map(|id| id.index()),
                        "reason": reason.as_str(),
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn span_id(controller: &str, element: u32) -> String {
    format!("{controller}:{element}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use unveil_core::reveal::ElementId;
    use unveil_core::time::{Duration, HostTime};
    use unveil_core::trace::{RevealFiredEvent, RevealScheduledEvent, TraceSink};

    #[test]
    fn reveal_becomes_async_span() {
        let mut rec = RecorderSink::new();
        rec.on_reveal_scheduled(&RevealScheduledEvent {
            controller: "cards",
            at: HostTime::from_millis(1),
            element: ElementId::from_index(2),
            batch_index: 1,
            delay: Duration::from_millis(100),
        });
        rec.on_reveal_fired(&RevealFiredEvent {
            controller: "cards",
            at: HostTime::from_millis(101),
            element: ElementId::from_index(2),
        });

        let mut out = Vec::new();
        export(rec.as_bytes(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 2);

        assert_eq!(parsed[0]["ph"], "b");
        assert_eq!(parsed[0]["id"], "cards:2");
        assert_eq!(parsed[0]["ts"], 1_000);
        assert_eq!(parsed[0]["args"]["delay_ms"], 100);

        assert_eq!(parsed[1]["ph"], "e");
        assert_eq!(parsed[1]["id"], parsed[0]["id"]);
        assert_eq!(parsed[1]["ts"], 101_000);
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty());
    }
}
