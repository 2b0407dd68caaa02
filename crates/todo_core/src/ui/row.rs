//! Per-row edit-in-place state machine.
//!
//! # Invariants
//! - Initial mode is `Viewing`.
//! - Cancel restores the task title and emits no intent.
//! - Delete is disabled while `Editing`.

use crate::model::task::{Task, TaskId};

/// Row interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMode {
    Viewing,
    Editing,
}

/// Mutation a row asks the store to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowIntent {
    ToggleDone(TaskId),
    Edit { id: TaskId, title: String },
    Remove(TaskId),
}

/// Completion marker shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Pending,
    /// Filled marker with a check icon.
    Done,
}

/// Control rendered in the edit slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditControl {
    Pen,
    Cancel,
}

/// Renderable snapshot of one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub index: usize,
    pub task_id: TaskId,
    pub marker: Marker,
    pub title: String,
    pub title_editable: bool,
    pub edit_control: EditControl,
    pub delete_enabled: bool,
}

impl RowView {
    pub fn button_test_id(&self) -> String {
        format!("button-{}", self.index)
    }

    pub fn marker_test_id(&self) -> String {
        format!("marker-{}", self.index)
    }

    pub fn trash_test_id(&self) -> String {
        format!("trash-{}", self.index)
    }
}

/// UI state for one list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    task: Task,
    mode: RowMode,
    pending_title: String,
}

impl TaskRow {
    pub fn new(task: Task) -> Self {
        let pending_title = task.title.clone();
        Self {
            task,
            mode: RowMode::Viewing,
            pending_title,
        }
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn mode(&self) -> RowMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == RowMode::Editing
    }

    pub fn pending_title(&self) -> &str {
        &self.pending_title
    }

    pub fn start_editing(&mut self) {
        self.mode = RowMode::Editing;
    }

    /// Updates the pending title. Ignored unless the row is editing.
    pub fn set_pending_title(&mut self, title: impl Into<String>) -> bool {
        if !self.is_editing() {
            return false;
        }
        self.pending_title = title.into();
        true
    }

    pub fn cancel_editing(&mut self) {
        self.pending_title = self.task.title.clone();
        self.mode = RowMode::Viewing;
    }

    /// Leaves edit mode and returns the edit intent for the store.
    ///
    /// Returns `None` when the row is not editing.
    pub fn submit_editing(&mut self) -> Option<RowIntent> {
        if !self.is_editing() {
            return None;
        }
        self.mode = RowMode::Viewing;
        Some(RowIntent::Edit {
            id: self.task.id,
            title: self.pending_title.clone(),
        })
    }

    /// Pen starts editing; the cancel icon in the same slot cancels.
    pub fn press_edit_control(&mut self) {
        match self.mode {
            RowMode::Viewing => self.start_editing(),
            RowMode::Editing => self.cancel_editing(),
        }
    }

    pub fn press_marker(&self) -> RowIntent {
        RowIntent::ToggleDone(self.task.id)
    }

    /// Returns `None` while editing (control disabled).
    pub fn press_delete(&self) -> Option<RowIntent> {
        (!self.is_editing()).then_some(RowIntent::Remove(self.task.id))
    }

    /// Adopts the latest store copy of this task.
    ///
    /// A pending title being typed is kept while editing.
    pub fn sync(&mut self, task: &Task) {
        self.task = task.clone();
        if !self.is_editing() {
            self.pending_title = task.title.clone();
        }
    }

    pub fn view(&self, index: usize) -> RowView {
        let editing = self.is_editing();
        RowView {
            index,
            task_id: self.task.id,
            marker: if self.task.done {
                Marker::Done
            } else {
                Marker::Pending
            },
            title: self.pending_title.clone(),
            title_editable: editing,
            edit_control: if editing {
                EditControl::Cancel
            } else {
                EditControl::Pen
            },
            delete_enabled: !editing,
        }
    }
}
