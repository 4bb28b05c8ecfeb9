//! Deterministic timer queue keyed by virtual milliseconds.
//!
//! DESIGN
//! ======
//! Every delayed behavior (staggered reveals, counter frames, notification
//! dismissal, deferred layout) is a queue entry rather than a browser timer.
//! The host owns the clock: it passes `now` into [`TimerQueue::pop_due`] and
//! arms a single real timeout for [`TimerQueue::next_deadline`]. Tests drive
//! time explicitly.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::collections::{BTreeSet, HashMap};

/// Milliseconds on the host clock.
pub type Millis = u64;

/// Cancellation token returned by [`TimerQueue::schedule`] and [`TimerQueue::schedule_every`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Entry<T> {
    due: Millis,
    period: Option<Millis>,
    payload: T,
}

/// Pending one-shot and repeating timers, fired in `(due, scheduling order)`.
#[derive(Debug)]
pub struct TimerQueue<T> {
    next_id: u64,
    /// Firing order. Keys are `(due, id)`; ids grow monotonically so ties fire FIFO.
    order: BTreeSet<(Millis, TimerId)>,
    entries: HashMap<TimerId, Entry<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self { next_id: 0, order: BTreeSet::new(), entries: HashMap::new() }
    }
}

impl<T: Clone> TimerQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `payload` once at `due`.
    pub fn schedule(&mut self, due: Millis, payload: T) -> TimerId {
        self.insert(due, None, payload)
    }

    /// Fire `payload` every `period` ms starting at `now + period` until cancelled.
    ///
    /// A zero period is clamped to 1ms so catch-up loops terminate.
    pub fn schedule_every(&mut self, now: Millis, period: Millis, payload: T) -> TimerId {
        let period = period.max(1);
        self.insert(now + period, Some(period), payload)
    }

    /// Drop a pending timer. Returns whether it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.entries.remove(&id) {
            Some(entry) => {
                self.order.remove(&(entry.due, id));
                true
            }
            None => false,
        }
    }

    /// Remove and return the earliest timer due at or before `now`.
    ///
    /// Repeating timers are re-armed one period later before being returned,
    /// so a late tick replays every missed period in order.
    pub fn pop_due(&mut self, now: Millis) -> Option<(TimerId, T)> {
        let &(due, id) = self.order.first()?;
        if due > now {
            return None;
        }
        self.order.remove(&(due, id));
        let entry = self.entries.remove(&id)?;
        match entry.period {
            Some(period) => {
                let payload = entry.payload.clone();
                let next = due + period;
                self.order.insert((next, id));
                self.entries.insert(id, Entry { due: next, period: Some(period), payload: entry.payload });
                Some((id, payload))
            }
            None => Some((id, entry.payload)),
        }
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.order.first().map(|&(due, _)| due)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, due: Millis, period: Option<Millis>, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.order.insert((due, id));
        self.entries.insert(id, Entry { due, period, payload });
        id
    }
}
