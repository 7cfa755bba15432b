use std::fmt::Debug;
use std::time::Duration;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a scheduled task.
    pub struct TaskId;
}

/// Shortest allowed repeat interval; keeps a long `advance` bounded.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone)]
struct Task<K> {
    key: K,
    due: Duration,
    interval: Option<Duration>,
    seq: u64,
}

/// A task that came due during an advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired<K> {
    pub id: TaskId,
    pub key: K,
    /// Virtual time the task was due at.
    pub at: Duration,
}

/// Virtual-time task queue with cancellable, purpose-keyed tasks.
///
/// Keys name what a task is for. At most one task per key exists: scheduling
/// a key that is already pending replaces the old task, so timers coalesce
/// instead of stacking.
///
/// Fired tasks are handed back as values. The owner reacts to each one after
/// the scheduler call returns, which keeps every state mutation serialized on
/// the caller's stack instead of inside a callback:
///
/// ```ignore
/// let deadline = scheduler.now() + dt;
/// while let Some(fired) = scheduler.pop_due(deadline) {
///     self.handle(fired);            // may schedule or cancel tasks
/// }
/// scheduler.advance_to(deadline);
/// ```
///
/// Tasks due at the same instant fire in scheduling order.
#[derive(Debug)]
pub struct Scheduler<K> {
    now: Duration,
    tasks: SlotMap<TaskId, Task<K>>,
    next_seq: u64,
}

impl<K> Default for Scheduler<K> {
    fn default() -> Self {
        Self { now: Duration::ZERO, tasks: SlotMap::with_key(), next_seq: 0 }
    }
}

impl<K: Copy + Eq + Debug> Scheduler<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[inline]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of pending tasks.
    #[inline]
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    // ── scheduling ────────────────────────────────────────────────────────

    /// Schedules `key` to fire once, `delay` from now. Replaces a pending `key`.
    pub fn schedule_once(&mut self, key: K, delay: Duration) -> TaskId {
        self.insert(key, self.now + delay, None)
    }

    /// Schedules `key` to fire every `interval`, first one `interval` from now.
    /// Replaces a pending `key`.
    pub fn schedule_repeating(&mut self, key: K, interval: Duration) -> TaskId {
        let interval = interval.max(MIN_INTERVAL);
        self.insert(key, self.now + interval, Some(interval))
    }

    fn insert(&mut self, key: K, due: Duration, interval: Option<Duration>) -> TaskId {
        if self.cancel_key(key) {
            log::trace!("replacing pending task {key:?}");
        }
        let seq = self.bump_seq();
        self.tasks.insert(Task { key, due, interval, seq })
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        seq
    }

    // ── cancellation ──────────────────────────────────────────────────────

    /// Cancels a task by handle. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        self.tasks.remove(id).is_some()
    }

    /// Cancels the pending task for `key`, if any.
    pub fn cancel_key(&mut self, key: K) -> bool {
        let found = self.tasks.iter().find(|(_, t)| t.key == key).map(|(id, _)| id);
        match found {
            Some(id) => self.cancel(id),
            None => false,
        }
    }

    // ── queries ───────────────────────────────────────────────────────────

    /// `true` while a task for `key` is pending.
    pub fn is_scheduled(&self, key: K) -> bool {
        self.tasks.values().any(|t| t.key == key)
    }

    /// Time left until `key` next fires.
    pub fn time_until(&self, key: K) -> Option<Duration> {
        self.tasks
            .values()
            .find(|t| t.key == key)
            .map(|t| t.due.saturating_sub(self.now))
    }

    // ── advancing ─────────────────────────────────────────────────────────

    /// Fires the earliest task due at or before `deadline`.
    ///
    /// Moves `now` to the task's due time. One-shot tasks are removed;
    /// repeating tasks are re-armed one interval later.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<Fired<K>> {
        let (id, due) = self
            .tasks
            .iter()
            .filter(|(_, t)| t.due <= deadline)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(id, t)| (id, t.due))?;

        self.now = self.now.max(due);

        let seq = self.bump_seq();
        let task = self.tasks.get_mut(id)?;
        let key = task.key;
        match task.interval {
            Some(interval) => {
                task.due += interval;
                task.seq = seq;
            }
            None => {
                self.tasks.remove(id);
            }
        }

        Some(Fired { id, key, at: due })
    }

    /// Moves `now` forward to `deadline`. Never moves backwards.
    pub fn advance_to(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }

    /// Advances by `dt` and returns every task that fired, in order.
    ///
    /// Tasks scheduled by the caller in response only see later advances; use
    /// [`pop_due`](Self::pop_due) when reactions must interleave.
    pub fn advance(&mut self, dt: Duration) -> Vec<Fired<K>> {
        let deadline = self.now + dt;
        let mut fired = Vec::new();
        while let Some(f) = self.pop_due(deadline) {
            fired.push(f);
        }
        self.advance_to(deadline);
        fired
    }
}
