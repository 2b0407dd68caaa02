//! Task storage contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the ordered task sequence behind a small storage contract.
//! - Keep lookup/replace/remove mechanics out of use-case code.
//!
//! # Invariants
//! - `list()` returns tasks in insertion order.
//! - Replacement keeps the task at its original position.
//! - Missing ids are reported as `false`/`None`, never as errors.

use crate::model::task::{Task, TaskId};

/// Storage interface for the task sequence.
pub trait TaskRepository {
    /// Appends a task to the end of the sequence.
    fn insert(&mut self, task: Task);
    /// Replaces the task with the same id in place. Returns `false` when absent.
    fn replace(&mut self, task: Task) -> bool;
    fn remove(&mut self, id: TaskId) -> Option<Task>;
    fn get(&self, id: TaskId) -> Option<Task>;
    /// Exact, case-sensitive title lookup.
    fn find_by_title(&self, title: &str) -> Option<Task>;
    fn list(&self) -> Vec<Task>;
    fn count(&self) -> usize;
}

/// `Vec`-backed repository; state lives for the process lifetime only.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Vec<Task>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn insert(&mut self, task: Task) {
        self.tasks.push(task);
    }

    fn replace(&mut self, task: Task) -> bool {
        match self.position(task.id) {
            Some(index) => {
                self.tasks[index] = task;
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, id: TaskId) -> Option<Task> {
        self.position(id).map(|index| self.tasks.remove(index))
    }

    fn get(&self, id: TaskId) -> Option<Task> {
        self.tasks.iter().find(|task| task.id == id).cloned()
    }

    fn find_by_title(&self, title: &str) -> Option<Task> {
        self.tasks.iter().find(|task| task.title == title).cloned()
    }

    fn list(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    fn count(&self) -> usize {
        self.tasks.len()
    }
}
