//! Task store use-case service.
//!
//! # Responsibility
//! - Own the canonical task sequence for one screen.
//! - Apply add/toggle/remove/edit rules and hand out immutable snapshots.
//!
//! # Invariants
//! - Add rejects an exact title match and leaves the sequence untouched.
//! - Edit applies no duplicate check.
//! - Toggle/edit/remove on an unknown id are silent no-ops.
//! - Remove only mutates after the confirmer answers `Decision::Confirm`.
//! - Log lines carry ids and outcomes only, never titles.

use crate::model::task::{Task, TaskId, TaskIdGenerator};
use crate::repo::task_repo::TaskRepository;
use crate::service::confirm::{Confirmer, Decision, REMOVE_TASK_PROMPT};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// User-facing blocking notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: &'static str,
}

/// Notice shown when an add is rejected for a repeated title.
pub const DUPLICATE_TITLE_NOTICE: Notice = Notice {
    title: "Task already exists",
    message: "You cannot add a task with the same name",
};

/// Business-rule rejection raised by the task store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskServiceError {
    /// Another task already carries this exact title.
    DuplicateTitle(String),
}

impl TaskServiceError {
    /// Notice the UI should show for this rejection.
    pub fn notice(&self) -> Notice {
        match self {
            Self::DuplicateTitle(_) => DUPLICATE_TITLE_NOTICE,
        }
    }
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateTitle(title) => write!(f, "task title already exists: `{title}`"),
        }
    }
}

impl Error for TaskServiceError {}

/// Result of a remove request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    Declined,
    /// Confirmed, but no task carried the id.
    NotFound,
}

/// Screen-level state container over a repository implementation.
pub struct TaskService<R: TaskRepository> {
    repo: R,
    ids: TaskIdGenerator,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self::with_id_generator(repo, TaskIdGenerator::new())
    }

    /// Creates a service with an explicit id source.
    pub fn with_id_generator(repo: R, ids: TaskIdGenerator) -> Self {
        Self { repo, ids }
    }

    /// Appends a new pending task.
    ///
    /// # Errors
    /// - `DuplicateTitle` when any existing task has exactly `title`.
    pub fn add_task(&mut self, title: impl Into<String>) -> Result<TaskId, TaskServiceError> {
        let title = title.into();
        if self.repo.find_by_title(title.as_str()).is_some() {
            warn!("event=task_add module=task_service status=rejected reason=duplicate_title");
            return Err(TaskServiceError::DuplicateTitle(title));
        }

        let id = self.ids.next_id();
        self.repo.insert(Task::new(id, title));
        info!(
            "event=task_add module=task_service status=ok id={} count={}",
            id,
            self.repo.count()
        );
        Ok(id)
    }

    /// Flips `done` on the matching task. Returns whether a task changed.
    pub fn toggle_task_done(&mut self, id: TaskId) -> bool {
        let Some(task) = self.repo.get(id) else {
            debug!("event=task_toggle module=task_service status=noop id={id}");
            return false;
        };
        let toggled = task.toggled();
        let done = toggled.done;
        let changed = self.repo.replace(toggled);
        info!("event=task_toggle module=task_service status=ok id={id} done={done}");
        changed
    }

    /// Asks `confirmer` and removes the matching task on confirmation.
    ///
    /// The prompt is shown before the lookup, so a stale id still prompts
    /// and then resolves to `NotFound`.
    pub fn remove_task(&mut self, id: TaskId, confirmer: &mut impl Confirmer) -> RemoveOutcome {
        if confirmer.confirm(&REMOVE_TASK_PROMPT) == Decision::Decline {
            debug!("event=task_remove module=task_service status=declined id={id}");
            return RemoveOutcome::Declined;
        }

        match self.repo.remove(id) {
            Some(_) => {
                info!(
                    "event=task_remove module=task_service status=ok id={} count={}",
                    id,
                    self.repo.count()
                );
                RemoveOutcome::Removed
            }
            None => {
                debug!("event=task_remove module=task_service status=noop id={id}");
                RemoveOutcome::NotFound
            }
        }
    }

    /// Replaces the title of the matching task. Returns whether a task changed.
    ///
    /// Unlike `add_task`, no duplicate-title check is applied.
    pub fn edit_task(&mut self, id: TaskId, new_title: impl Into<String>) -> bool {
        let Some(task) = self.repo.get(id) else {
            debug!("event=task_edit module=task_service status=noop id={id}");
            return false;
        };
        let changed = self.repo.replace(task.retitled(new_title));
        info!("event=task_edit module=task_service status=ok id={id}");
        changed
    }

    /// Immutable snapshot of the sequence in insertion order.
    pub fn tasks(&self) -> Vec<Task> {
        self.repo.list()
    }

    pub fn get_task(&self, id: TaskId) -> Option<Task> {
        self.repo.get(id)
    }

    pub fn task_count(&self) -> usize {
        self.repo.count()
    }
}
