//! Home screen composition: header, add-task input and task rows.
//!
//! # Responsibility
//! - Own the task store and the row-scoped UI state keyed by `TaskId`.
//! - Translate user presses into store mutations and re-derive rows.
//!
//! # Invariants
//! - After every mutation, rows match the store snapshot one-to-one.
//! - Rendering order equals store insertion order.

use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::{InMemoryTaskRepository, TaskRepository};
use crate::service::confirm::Confirmer;
use crate::service::task_service::{Notice, RemoveOutcome, TaskService};
use crate::ui::row::{RowIntent, RowView, TaskRow};
use std::collections::HashMap;

/// Header content derived from the task sequence length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub tasks_counter: usize,
}

impl Header {
    pub fn label(&self) -> String {
        match self.tasks_counter {
            1 => "1 task".to_string(),
            count => format!("{count} tasks"),
        }
    }
}

/// Full renderable snapshot of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
    pub header: Header,
    pub rows: Vec<RowView>,
}

/// Screen-level state container.
pub struct HomeScreen<R: TaskRepository = InMemoryTaskRepository> {
    store: TaskService<R>,
    rows: HashMap<TaskId, TaskRow>,
}

impl HomeScreen<InMemoryTaskRepository> {
    /// Empty screen over in-memory state.
    pub fn in_memory() -> Self {
        Self::new(TaskService::new(InMemoryTaskRepository::new()))
    }
}

impl<R: TaskRepository> HomeScreen<R> {
    pub fn new(store: TaskService<R>) -> Self {
        let mut screen = Self {
            store,
            rows: HashMap::new(),
        };
        screen.refresh_rows();
        screen
    }

    pub fn store(&self) -> &TaskService<R> {
        &self.store
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.store.tasks()
    }

    pub fn header(&self) -> Header {
        Header {
            tasks_counter: self.store.task_count(),
        }
    }

    pub fn render(&self) -> ScreenView {
        let rows = self
            .store
            .tasks()
            .iter()
            .enumerate()
            .filter_map(|(index, task)| self.rows.get(&task.id).map(|row| row.view(index)))
            .collect();
        ScreenView {
            header: self.header(),
            rows,
        }
    }

    /// Id of the task rendered at `index` (zero-based).
    pub fn task_id_at(&self, index: usize) -> Option<TaskId> {
        self.store.tasks().get(index).map(|task| task.id)
    }

    pub fn row(&self, id: TaskId) -> Option<&TaskRow> {
        self.rows.get(&id)
    }

    /// Add-task surface.
    ///
    /// # Errors
    /// - Returns the notice to display when the store rejects the title.
    pub fn submit_new_task(&mut self, title: impl Into<String>) -> Result<TaskId, Notice> {
        let result = self.store.add_task(title).map_err(|err| err.notice());
        self.refresh_rows();
        result
    }

    /// Completion marker press.
    pub fn press_marker(&mut self, id: TaskId) -> bool {
        match self.rows.get(&id).map(TaskRow::press_marker) {
            Some(intent) => self.apply(intent),
            None => false,
        }
    }

    /// Edit-slot press: pen enters edit mode, cancel icon leaves it.
    pub fn press_edit_control(&mut self, id: TaskId) -> bool {
        self.with_row(id, TaskRow::press_edit_control)
    }

    pub fn start_editing(&mut self, id: TaskId) -> bool {
        self.with_row(id, TaskRow::start_editing)
    }

    pub fn cancel_editing(&mut self, id: TaskId) -> bool {
        self.with_row(id, TaskRow::cancel_editing)
    }

    /// Text change while editing. Returns `false` if the row is not editable.
    pub fn set_pending_title(&mut self, id: TaskId, title: impl Into<String>) -> bool {
        self.rows
            .get_mut(&id)
            .is_some_and(|row| row.set_pending_title(title))
    }

    /// Text submit while editing; applies the edit to the store.
    pub fn submit_editing(&mut self, id: TaskId) -> bool {
        match self.rows.get_mut(&id).and_then(TaskRow::submit_editing) {
            Some(intent) => self.apply(intent),
            None => false,
        }
    }

    /// Delete press. Returns `None` when the control is disabled or the row
    /// is unknown; otherwise the confirmed/declined outcome.
    pub fn press_delete(
        &mut self,
        id: TaskId,
        confirmer: &mut impl Confirmer,
    ) -> Option<RemoveOutcome> {
        let Some(RowIntent::Remove(id)) = self.rows.get(&id).and_then(TaskRow::press_delete)
        else {
            return None;
        };
        let outcome = self.store.remove_task(id, confirmer);
        self.refresh_rows();
        Some(outcome)
    }

    fn apply(&mut self, intent: RowIntent) -> bool {
        let changed = match intent {
            RowIntent::ToggleDone(id) => self.store.toggle_task_done(id),
            RowIntent::Edit { id, title } => self.store.edit_task(id, title),
            // Removal needs a confirmer; see `press_delete`.
            RowIntent::Remove(_) => false,
        };
        self.refresh_rows();
        changed
    }

    fn with_row(&mut self, id: TaskId, f: impl FnOnce(&mut TaskRow)) -> bool {
        match self.rows.get_mut(&id) {
            Some(row) => {
                f(row);
                true
            }
            None => false,
        }
    }

    fn refresh_rows(&mut self) {
        let snapshot = self.store.tasks();
        self.rows
            .retain(|id, _| snapshot.iter().any(|task| task.id == *id));
        for task in &snapshot {
            self.rows
                .entry(task.id)
                .and_modify(|row| row.sync(task))
                .or_insert_with(|| TaskRow::new(task.clone()));
        }
    }
}
