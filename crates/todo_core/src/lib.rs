//! Core domain logic for the to-do list app.
//! This crate is the single source of truth for task invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod ui;

pub use config::{AppConfig, ConfigError, LogLevel};
pub use logging::{init_logging, init_logging_with, logging_status, LoggingError};
pub use model::task::{Task, TaskId, TaskIdGenerator};
pub use repo::task_repo::{InMemoryTaskRepository, TaskRepository};
pub use service::confirm::{ConfirmPrompt, Confirmer, Decision, FixedDecision, REMOVE_TASK_PROMPT};
pub use service::task_service::{
    Notice, RemoveOutcome, TaskService, TaskServiceError, DUPLICATE_TITLE_NOTICE,
};
pub use ui::row::{EditControl, Marker, RowIntent, RowMode, RowView, TaskRow};
pub use ui::screen::{Header, HomeScreen, ScreenView};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
