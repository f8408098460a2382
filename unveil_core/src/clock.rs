// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delayed task scheduling.
//!
//! [`TaskScheduler`] is the seam between the reveal controller and whatever
//! runs its delayed work. The browser backend implements it with
//! `setTimeout`; [`VirtualClock`] implements it with an explicit, manually
//! advanced clock so tests and simulations are deterministic.
//!
//! ```text
//!   controller ──schedule(delay, task)──► VirtualClock
//!                                              │ advance_to(t)
//!                                              ▼
//!   controller ◄──────── Fired { at, task } ───┘
//! ```

use alloc::vec::Vec;

use crate::time::{Duration, HostTime};

/// Runs a task once after a delay.
///
/// Scheduling never blocks and cannot fail. Implementations that are torn down
/// (page navigation) may drop pending tasks without running them.
pub trait TaskScheduler<T> {
    /// Arranges for `task` to run `delay` after the scheduler's current time.
    fn schedule(&mut self, delay: Duration, task: T);
}

/// A task released by a [`VirtualClock`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fired<T> {
    /// The virtual time the task was due.
    pub at: HostTime,
    /// The scheduled task.
    pub task: T,
}

#[derive(Clone, Debug)]
struct Scheduled<T> {
    due: HostTime,
    task: T,
}

/// A manually advanced clock that releases scheduled tasks in due order.
///
/// Tasks due at the same instant are released in the order they were
/// scheduled. Time never moves backwards: advancing to an earlier time is a
/// no-op.
#[derive(Clone, Debug)]
pub struct VirtualClock<T> {
    now: HostTime,
    /// Sorted by due time; ties keep insertion order.
    queue: Vec<Scheduled<T>>,
}

impl<T> Default for VirtualClock<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> VirtualClock<T> {
    /// Creates a clock at [`HostTime::ZERO`] with nothing scheduled.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(HostTime::ZERO)
    }

    /// Creates a clock at the given time with nothing scheduled.
    #[must_use]
    pub const fn starting_at(now: HostTime) -> Self {
        Self {
            now,
            queue: Vec::new(),
        }
    }

    /// Returns the current virtual time.
    #[must_use]
    pub fn now(&self) -> HostTime {
        self.now
    }

    /// Returns the number of tasks not yet released.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Returns the due time of the earliest pending task.
    #[must_use]
    pub fn next_due(&self) -> Option<HostTime> {
        self.queue.first().map(|s| s.due)
    }

    /// Releases the earliest task due at or before `until`, moving the clock
    /// to that task's due time.
    ///
    /// Use this when released tasks may schedule further work that must be
    /// ordered against the remaining queue.
    pub fn pop_due(&mut self, until: HostTime) -> Option<Fired<T>> {
        if self.queue.first()?.due > until {
            return None;
        }
        let Scheduled { due, task } = self.queue.remove(0);
        if due > self.now {
            self.now = due;
        }
        Some(Fired { at: due, task })
    }

    /// Moves the clock to `until` and releases every task due by then.
    pub fn advance_to(&mut self, until: HostTime) -> Vec<Fired<T>> {
        let mut fired = Vec::new();
        while let Some(f) = self.pop_due(until) {
            fired.push(f);
        }
        if until > self.now {
            self.now = until;
        }
        fired
    }

    /// Moves the clock forward by `by` and releases every task due by then.
    pub fn advance(&mut self, by: Duration) -> Vec<Fired<T>> {
        self.advance_to(self.now.saturating_add(by))
    }
}

impl<T> TaskScheduler<T> for VirtualClock<T> {
    fn schedule(&mut self, delay: Duration, task: T) {
        let due = self.now.saturating_add(delay);
        let at = self.queue.partition_point(|s| s.due <= due);
        self.queue.insert(at, Scheduled { due, task });
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn releases_in_due_order() {
        let mut clock = VirtualClock::new();
        clock.schedule(Duration::from_millis(200), 'c');
        clock.schedule(Duration::ZERO, 'a');
        clock.schedule(Duration::from_millis(100), 'b');
        assert_eq!(clock.pending(), 3);

        let fired = clock.advance(Duration::from_millis(250));
        let order: Vec<char> = fired.iter().map(|f| f.task).collect();
        assert_eq!(order, vec!['a', 'b', 'c']);
        assert_eq!(fired[1].at, HostTime::from_millis(100));
        assert_eq!(clock.now(), HostTime::from_millis(250));
    }

    #[test]
    fn ties_keep_scheduling_order() {
        let mut clock = VirtualClock::new();
        clock.schedule(Duration::from_millis(50), 1);
        clock.schedule(Duration::from_millis(50), 2);
        clock.schedule(Duration::from_millis(50), 3);
        let order: Vec<i32> = clock
            .advance(Duration::from_millis(50))
            .into_iter()
            .map(|f| f.task)
            .collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn nothing_fires_early() {
        let mut clock = VirtualClock::new();
        clock.schedule(Duration::from_millis(100), ());
        assert!(clock.advance(Duration::from_millis(99)).is_empty());
        assert_eq!(clock.next_due(), Some(HostTime::from_millis(100)));
        assert_eq!(clock.advance(Duration::from_millis(1)).len(), 1);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn time_never_moves_backwards() {
        let mut clock: VirtualClock<()> = VirtualClock::starting_at(HostTime::from_millis(10));
        assert!(clock.advance_to(HostTime::from_millis(5)).is_empty());
        assert_eq!(clock.now(), HostTime::from_millis(10));
    }

    #[test]
    fn pop_due_steps_the_clock() {
        let mut clock = VirtualClock::new();
        clock.schedule(Duration::from_millis(30), 'x');
        clock.schedule(Duration::from_millis(60), 'y');
        let first = clock.pop_due(HostTime::from_millis(100)).unwrap();
        assert_eq!(first.task, 'x');
        assert_eq!(clock.now(), HostTime::from_millis(30), "clock moves to due time");

        // Work scheduled from inside a released task is relative to its due time.
        clock.schedule(Duration::from_millis(10), 'z');
        let rest: Vec<char> = clock
            .advance_to(HostTime::from_millis(100))
            .into_iter()
            .map(|f| f.task)
            .collect();
        assert_eq!(rest, vec!['z', 'y']);
    }
}
