//! One-shot timer system for Horizon Autocomplete.
//!
//! Timers never fire on their own. The host event loop asks
//! [`TimerManager::time_until_next`] how long it may sleep and calls
//! [`TimerManager::process_expired`] when it wakes; every expired timer is
//! reported once and then forgotten.
//!
//! All entry points have an `*_at` variant taking the current [`Instant`]
//! explicitly, so that callers with their own clock (and tests) can drive
//! time deterministically.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use slotmap::{SlotMap, new_key_type};

use crate::error::TimerError;

new_key_type! {
    /// A unique identifier for a timer.
    pub struct TimerId;
}

/// An entry in the timer queue (min-heap by fire time).
#[derive(Debug, Clone, Copy)]
struct TimerQueueEntry {
    id: TimerId,
    fire_time: Instant,
}

impl PartialEq for TimerQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_time == other.fire_time
    }
}

impl Eq for TimerQueueEntry {}

impl PartialOrd for TimerQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default).
        other.fire_time.cmp(&self.fire_time)
    }
}

/// Manages pending one-shot timers.
#[derive(Debug, Default)]
pub struct TimerManager {
    /// Fire time of every pending timer.
    timers: SlotMap<TimerId, Instant>,
    /// Priority queue of pending timer fires. May hold stale entries for
    /// stopped timers; those are skipped lazily.
    queue: BinaryHeap<TimerQueueEntry>,
}

impl TimerManager {
    /// Create a new timer manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a one-shot timer that fires `duration` from now.
    pub fn start_one_shot(&mut self, duration: Duration) -> Result<TimerId, TimerError> {
        self.start_one_shot_at(Instant::now(), duration)
    }

    /// Start a one-shot timer that fires `duration` after `now`.
    ///
    /// Fails with [`TimerError::DeadlineOverflow`] when `now + duration` is
    /// not representable; no timer is started in that case.
    pub fn start_one_shot_at(
        &mut self,
        now: Instant,
        duration: Duration,
    ) -> Result<TimerId, TimerError> {
        let fire_time = now
            .checked_add(duration)
            .ok_or(TimerError::DeadlineOverflow { duration })?;
        let id = self.timers.insert(fire_time);
        self.queue.push(TimerQueueEntry { id, fire_time });
        tracing::trace!(
            target: "horizon_autocomplete_core::timer",
            ?id,
            ?duration,
            "timer started"
        );
        Ok(id)
    }

    /// Stop and remove a timer.
    pub fn stop(&mut self, id: TimerId) -> Result<(), TimerError> {
        self.timers
            .remove(id)
            .map(|_| ())
            .ok_or(TimerError::InvalidTimerId)
    }

    /// Stop every pending timer.
    pub fn stop_all(&mut self) {
        self.timers.clear();
        self.queue.clear();
    }

    /// Check if a timer is still pending.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Get the number of pending timers.
    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    /// Get the duration until the next timer fires, if any.
    pub fn time_until_next(&mut self) -> Option<Duration> {
        self.time_until_next_at(Instant::now())
    }

    /// Get the duration from `now` until the next timer fires, if any.
    ///
    /// Returns `Duration::ZERO` for overdue timers and `None` when nothing
    /// is pending.
    pub fn time_until_next_at(&mut self, now: Instant) -> Option<Duration> {
        self.discard_stale();
        self.queue
            .peek()
            .map(|entry| entry.fire_time.saturating_duration_since(now))
    }

    /// Remove and return every timer that has expired by now.
    pub fn process_expired(&mut self) -> Vec<TimerId> {
        self.process_expired_at(Instant::now())
    }

    /// Remove and return every timer that has expired by `now`, earliest first.
    #[tracing::instrument(skip(self), target = "horizon_autocomplete_core::timer", level = "trace")]
    pub fn process_expired_at(&mut self, now: Instant) -> Vec<TimerId> {
        let mut fired = Vec::new();

        while let Some(entry) = self.queue.peek().copied() {
            if entry.fire_time > now {
                break;
            }
            self.queue.pop();

            // Skip entries for timers stopped after they were queued.
            if self.timers.remove(entry.id).is_none() {
                continue;
            }

            tracing::trace!(
                target: "horizon_autocomplete_core::timer",
                id = ?entry.id,
                "timer fired"
            );
            fired.push(entry.id);
        }

        fired
    }

    fn discard_stale(&mut self) {
        while let Some(entry) = self.queue.peek() {
            if self.timers.contains_key(entry.id) {
                break;
            }
            self.queue.pop();
        }
    }
}
