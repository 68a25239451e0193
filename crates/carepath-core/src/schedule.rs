//! Virtual-time scheduler for scripted demo delays.
//!
//! The prototype paced its flows with raw timers ("processing...", "the
//! report arrives in two seconds"). Here a delay is an explicit task on a
//! virtual clock: it can be cancelled, and nothing fires until the owner
//! advances time, so tests step through delays deterministically.

use std::time::Duration;

/// Login "connecting to the insurance platform" pause.
pub const LOGIN_PROCESSING: Duration = Duration::from_millis(1500);
/// Time the specialist takes to produce the joint-diagnosis report.
pub const REPORT_ANALYSIS: Duration = Duration::from_millis(2000);
/// Records hand-down to the community clinic.
pub const RECORD_TRANSFER: Duration = Duration::from_millis(1500);
/// Community scanner detecting a patient code.
pub const SCAN_DETECTION: Duration = Duration::from_millis(1000);
/// Family member's remote booking.
pub const FAMILY_BOOKING: Duration = Duration::from_millis(1500);

/// Handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Debug, Clone)]
struct Entry<T> {
    id: TaskId,
    due: Duration,
    payload: T,
}

/// Delayed tasks on a virtual clock starting at zero.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of tasks not yet fired or cancelled.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn is_idle(&self) -> bool {
        self.entries.is_empty()
    }

    /// Schedule `payload` to fire `delay` after the current virtual time.
    pub fn schedule(&mut self, delay: Duration, payload: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            due: self.now + delay,
            payload,
        });
        id
    }

    /// Cancel a task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Cancel every task whose payload matches; returns how many were dropped.
    pub fn cancel_where(&mut self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !predicate(&entry.payload));
        before - self.entries.len()
    }

    /// Drop every pending task. The clock keeps its value.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Due time of the earliest pending task.
    pub fn next_due(&self) -> Option<Duration> {
        self.entries.iter().map(|entry| entry.due).min()
    }

    /// Fire the earliest task due at or before `deadline`, moving the clock
    /// to its due time. Ties fire in scheduling order.
    pub fn fire_next(&mut self, deadline: Duration) -> Option<T> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= deadline)
            .min_by_key(|(_, entry)| (entry.due, entry.id))
            .map(|(index, _)| index)?;
        let entry = self.entries.remove(index);
        self.now = self.now.max(entry.due);
        Some(entry.payload)
    }

    /// Advance the clock by `by`, returning fired payloads in due order.
    pub fn advance(&mut self, by: Duration) -> Vec<T> {
        let deadline = self.now + by;
        let mut fired = Vec::new();
        while let Some(payload) = self.fire_next(deadline) {
            fired.push(payload);
        }
        self.now = deadline;
        fired
    }
}
