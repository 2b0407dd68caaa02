//! Mobile UI bridge for `todo_core`.

pub mod api;
