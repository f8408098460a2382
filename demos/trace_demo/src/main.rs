// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated scroll session that exercises the tracing and diagnostics pipeline.
//!
//! Lays out a page of sections and cards, scrolls a viewport down it in fixed
//! steps, and drives both reveal presets with a
//! [`GeometryMonitor`](unveil_core::monitor::GeometryMonitor) and a
//! [`VirtualClock`](unveil_core::clock::VirtualClock). Events go to both a
//! [`PrettyPrintSink`](unveil_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](unveil_debug::recorder::RecorderSink), then a Chrome trace
//! JSON file is exported.

use std::fs::File;
use std::io::BufWriter;

use kurbo::Rect;

use unveil_core::backend::StylePresenter;
use unveil_core::clock::{TaskScheduler, VirtualClock};
use unveil_core::monitor::GeometryMonitor;
use unveil_core::reveal::{RevealController, RevealPreset, RevealTask, StyleChange};
use unveil_core::time::{Duration, HostTime};
use unveil_core::trace::{
    EntryIgnoredEvent, InitializeEvent, RevealFiredEvent, RevealScheduledEvent, TraceSink,
    Tracer, VisibilityBatchEvent,
};

use unveil_debug::pretty::PrettyPrintSink;
use unveil_debug::recorder::RecorderSink;

const VIEWPORT_W: f64 = 1280.0;
const VIEWPORT_H: f64 = 800.0;
const SCROLL_STEP: f64 = 200.0;
const STEP_INTERVAL: Duration = Duration::from_millis(250);
const SECTION_COUNT: usize = 4;
const CARDS_PER_ROW: usize = 3;
const ROWS_PER_SECTION: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Section,
    Card,
}

/// Document-space layout: each section holds a grid of cards.
fn layout() -> Vec<(Kind, Rect)> {
    let mut blocks = Vec::new();
    let mut y = 120.0;
    for _ in 0..SECTION_COUNT {
        let section_h = 80.0 + ROWS_PER_SECTION as f64 * 320.0;
        blocks.push((Kind::Section, Rect::new(0.0, y, VIEWPORT_W, y + section_h)));
        for row in 0..ROWS_PER_SECTION {
            let top = y + 80.0 + row as f64 * 320.0;
            for col in 0..CARDS_PER_ROW {
                let left = 40.0 + col as f64 * 410.0;
                blocks.push((Kind::Card, Rect::new(left, top, left + 380.0, top + 280.0)));
            }
        }
        y += section_h + 60.0;
    }
    blocks
}

/// Inline opacity per block, as a browser would hold it.
struct Page {
    opacity: Vec<f64>,
}

impl StylePresenter<usize> for Page {
    fn apply(&mut self, element: &usize, change: &StyleChange<'_>) {
        self.opacity[*element] = change.opacity();
    }
}

/// Forwards every event to both sinks.
struct Tee<'a> {
    pretty: &'a mut PrettyPrintSink,
    recorder: &'a mut RecorderSink,
}

impl TraceSink for Tee<'_> {
    fn on_initialize(&mut self, e: &InitializeEvent) {
        self.pretty.on_initialize(e);
        self.recorder.on_initialize(e);
    }

    fn on_visibility_batch(&mut self, e: &VisibilityBatchEvent) {
        self.pretty.on_visibility_batch(e);
        self.recorder.on_visibility_batch(e);
    }

    fn on_reveal_scheduled(&mut self, e: &RevealScheduledEvent) {
        self.pretty.on_reveal_scheduled(e);
        self.recorder.on_reveal_scheduled(e);
    }

    fn on_reveal_fired(&mut self, e: &RevealFiredEvent) {
        self.pretty.on_reveal_fired(e);
        self.recorder.on_reveal_fired(e);
    }

    fn on_entry_ignored(&mut self, e: &EntryIgnoredEvent) {
        self.pretty.on_entry_ignored(e);
        self.recorder.on_entry_ignored(e);
    }
}

/// Routes one controller's tasks into the shared clock.
struct Lane<'a> {
    clock: &'a mut VirtualClock<(usize, RevealTask)>,
    lane: usize,
}

impl TaskScheduler<RevealTask> for Lane<'_> {
    fn schedule(&mut self, delay: Duration, task: RevealTask) {
        self.clock.schedule(delay, (self.lane, task));
    }
}

fn main() {
    let blocks = layout();
    let page_height = blocks.iter().map(|(_, r)| r.y1).fold(0.0, f64::max) + 200.0;

    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    let mut recorder = RecorderSink::new();
    let mut tee = Tee {
        pretty: &mut pretty,
        recorder: &mut recorder,
    };
    let mut tracer = Tracer::new(&mut tee);

    // -- controllers -------------------------------------------------------
    let mut page = Page {
        opacity: vec![1.0; blocks.len()],
    };
    let mut clock = VirtualClock::starting_at(HostTime::from_millis(16));
    let presets = [
        (RevealPreset::sections(), Kind::Section),
        (RevealPreset::cards(), Kind::Card),
    ];
    let mut lanes: Vec<(RevealController<usize>, GeometryMonitor<usize>)> = presets
        .iter()
        .map(|(preset, kind)| {
            let mut monitor =
                GeometryMonitor::new(preset.options.root_margin, preset.options.threshold);
            let elements = (0..blocks.len()).filter(|&i| blocks[i].0 == *kind);
            let controller = RevealController::initialize(
                preset,
                elements,
                clock.now(),
                &mut page,
                Some(&mut monitor),
                &mut tracer,
            );
            (controller, monitor)
        })
        .collect();

    // -- simulated scroll --------------------------------------------------
    let mut scroll_y = 0.0;
    loop {
        let now = clock.now();
        let viewport = Rect::new(0.0, scroll_y, VIEWPORT_W, scroll_y + VIEWPORT_H);

        for (lane, (controller, monitor)) in lanes.iter_mut().enumerate() {
            let batch = monitor.check(viewport, |&i| blocks[i].1);
            if !batch.is_empty() {
                controller.on_visibility(
                    &batch,
                    now,
                    monitor,
                    &mut Lane {
                        clock: &mut clock,
                        lane,
                    },
                    &mut tracer,
                );
            }
        }

        for fired in clock.advance(STEP_INTERVAL) {
            let (lane, task) = fired.task;
            lanes[lane].0.fire(task, fired.at, &mut page, &mut tracer);
        }

        if scroll_y + VIEWPORT_H >= page_height && clock.pending() == 0 {
            break;
        }
        scroll_y = (scroll_y + SCROLL_STEP).min(page_height - VIEWPORT_H);
    }
    drop(tracer);

    for (controller, _) in &lanes {
        println!(
            "{}: {}/{} revealed",
            controller.name(),
            controller.revealed_count(),
            controller.len()
        );
    }
    let visible = page.opacity.iter().filter(|&&o| o == 1.0).count();
    println!("{visible}/{} blocks at full opacity", blocks.len());

    // -- export Chrome trace -----------------------------------------------
    let path = "reveal_trace.json";
    let file = File::create(path).expect("failed to create reveal_trace.json");
    let mut writer = BufWriter::new(file);
    unveil_debug::chrome::export(recorder.as_bytes(), &mut writer)
        .expect("failed to write Chrome trace");

    println!("Wrote {path}");
}
