//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record (`id`, `title`, `done`).
//! - Provide replacement helpers used by toggle/edit use-cases.
//! - Generate timestamp-seeded, strictly increasing identifiers.
//!
//! # Invariants
//! - `done` starts as `false`.
//! - Ids produced by one `TaskIdGenerator` are strictly increasing, even
//!   when the wall clock stalls or moves backwards.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Stable identifier for one task.
///
/// Serialized as a bare integer to match the UI-facing shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// One to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// User-supplied text. Non-empty is expected but not enforced here.
    pub title: String,
    pub done: bool,
}

impl Task {
    /// Creates a pending task.
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
        }
    }

    /// Returns a copy with `done` flipped.
    pub fn toggled(&self) -> Self {
        Self {
            done: !self.done,
            ..self.clone()
        }
    }

    /// Returns a copy carrying `title`; `id` and `done` are preserved.
    pub fn retitled(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }
}

/// Identifier source for new tasks.
///
/// Ids are seeded from wall-clock milliseconds so they stay readable as
/// creation times, but each id is at least `last + 1`.
#[derive(Debug, Default)]
pub struct TaskIdGenerator {
    last: u64,
}

impl TaskIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id using the system clock.
    pub fn next_id(&mut self) -> TaskId {
        self.next_id_at(now_epoch_ms())
    }

    /// Returns the next id for a caller-provided clock reading.
    pub fn next_id_at(&mut self, now_ms: u64) -> TaskId {
        let next = now_ms.max(self.last.saturating_add(1));
        self.last = next;
        TaskId(next)
    }

    /// Last id handed out, if any.
    pub fn last_issued(&self) -> Option<TaskId> {
        (self.last != 0).then_some(TaskId(self.last))
    }
}

fn now_epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{TaskId, TaskIdGenerator};

    #[test]
    fn generator_never_repeats_within_same_millisecond() {
        let mut ids = TaskIdGenerator::new();
        let first = ids.next_id_at(1_700_000_000_000);
        let second = ids.next_id_at(1_700_000_000_000);
        assert_eq!(first, TaskId::new(1_700_000_000_000));
        assert_eq!(second, TaskId::new(1_700_000_000_001));
    }

    #[test]
    fn generator_survives_clock_going_backwards() {
        let mut ids = TaskIdGenerator::new();
        let first = ids.next_id_at(5_000);
        let second = ids.next_id_at(1_000);
        assert!(second > first);
    }

    #[test]
    fn generator_follows_clock_when_it_moves_ahead() {
        let mut ids = TaskIdGenerator::new();
        ids.next_id_at(10);
        assert_eq!(ids.next_id_at(500), TaskId::new(500));
        assert_eq!(ids.last_issued(), Some(TaskId::new(500)));
    }
}
