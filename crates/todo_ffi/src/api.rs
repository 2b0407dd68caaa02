//! FFI use-case API for mobile UI calls.
//!
//! # Responsibility
//! - Expose task store operations to Dart via FRB.
//! - Translate core outcomes into flat, UI-friendly envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - One process-wide task store; state is discarded on restart.
//! - Ids cross the boundary as `i64`; negative ids never match a task.

use log::warn;
use std::sync::{Mutex, OnceLock};
use todo_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    init_logging_with, ping as ping_inner, AppConfig, Decision, FixedDecision,
    InMemoryTaskRepository, RemoveOutcome, Task, TaskId, TaskService, REMOVE_TASK_PROMPT,
};

static TASK_STORE: OnceLock<Mutex<TaskService<InMemoryTaskRepository>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - `level`: `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory for rolling logs.
/// - Idempotent for the same `level + log_dir`; conflicting calls fail.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Initializes logging from `TODO_LOG_LEVEL` / `TODO_LOG_DIR`.
///
/// Same return convention as `init_logging`.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging_from_env() -> String {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => return err.to_string(),
    };
    match init_logging_with(config.log_level, &config.log_dir) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One task as rendered by the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: i64,
    pub title: String,
    pub done: bool,
}

/// Confirmation dialog texts for task removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPromptItem {
    pub title: String,
    pub message: String,
    pub decline_label: String,
    pub confirm_label: String,
}

/// Action response envelope for task mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Whether the request was accepted (business rejections set `false`).
    pub ok: bool,
    /// Whether the task list changed.
    pub changed: bool,
    /// Created or targeted task id.
    pub task_id: Option<i64>,
    /// Title of the blocking notice to show, for rejections only.
    pub notice_title: Option<String>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl TaskActionResponse {
    fn applied(task_id: i64, changed: bool, message: impl Into<String>) -> Self {
        Self {
            ok: true,
            changed,
            task_id: Some(task_id),
            notice_title: None,
            message: message.into(),
        }
    }

    fn rejected(notice_title: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            changed: false,
            task_id: None,
            notice_title: notice_title.map(str::to_string),
            message: message.into(),
        }
    }
}

/// Current task list in insertion order.
///
/// Returns an empty list if the store is unavailable.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_list() -> Vec<TaskItem> {
    with_store(|store| store.tasks())
        .map(|tasks| tasks.into_iter().map(to_task_item).collect())
        .unwrap_or_default()
}

/// Header counter value.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_counter() -> u32 {
    with_store(|store| store.task_count())
        .map(|count| u32::try_from(count).unwrap_or(u32::MAX))
        .unwrap_or(0)
}

/// Adds a task from the input surface.
///
/// # FFI contract
/// - Title is trimmed; an empty title is rejected here.
/// - Duplicate titles return `ok = false` plus the notice to display.
#[flutter_rust_bridge::frb(sync)]
pub fn task_add(title: String) -> TaskActionResponse {
    let title = title.trim().to_string();
    if title.is_empty() {
        return TaskActionResponse::rejected(None, "Task title cannot be empty.");
    }

    match with_store(|store| store.add_task(title)) {
        Ok(Ok(id)) => TaskActionResponse::applied(to_ffi_id(id), true, "Task added."),
        Ok(Err(err)) => {
            let notice = err.notice();
            TaskActionResponse::rejected(Some(notice.title), notice.message)
        }
        Err(message) => TaskActionResponse::rejected(None, message),
    }
}

/// Flips completion of one task. Unknown ids are a no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn task_toggle_done(id: i64) -> TaskActionResponse {
    let Some(task_id) = from_ffi_id(id) else {
        return TaskActionResponse::applied(id, false, "No matching task.");
    };
    match with_store(|store| store.toggle_task_done(task_id)) {
        Ok(changed) => {
            TaskActionResponse::applied(id, changed, changed_message(changed, "Task updated."))
        }
        Err(message) => TaskActionResponse::rejected(None, message),
    }
}

/// Replaces the title of one task. Unknown ids are a no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn task_edit(id: i64, title: String) -> TaskActionResponse {
    let Some(task_id) = from_ffi_id(id) else {
        return TaskActionResponse::applied(id, false, "No matching task.");
    };
    match with_store(|store| store.edit_task(task_id, title)) {
        Ok(changed) => {
            TaskActionResponse::applied(id, changed, changed_message(changed, "Task renamed."))
        }
        Err(message) => TaskActionResponse::rejected(None, message),
    }
}

/// Removes one task after the UI collected the user's decision.
///
/// # FFI contract
/// - Call after showing `remove_prompt()`; pass `confirmed = true` for "Yes".
/// - Declined or unknown ids leave the list unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn task_remove(id: i64, confirmed: bool) -> TaskActionResponse {
    let mut confirmer = FixedDecision(Decision::from_confirmed(confirmed));
    let task_id = from_ffi_id(id);
    let result = with_store(|store| match task_id {
        Some(task_id) => store.remove_task(task_id, &mut confirmer),
        None if confirmed => RemoveOutcome::NotFound,
        None => RemoveOutcome::Declined,
    });
    match result {
        Ok(RemoveOutcome::Removed) => TaskActionResponse::applied(id, true, "Task removed."),
        Ok(RemoveOutcome::Declined) => TaskActionResponse::applied(id, false, "Removal cancelled."),
        Ok(RemoveOutcome::NotFound) => TaskActionResponse::applied(id, false, "No matching task."),
        Err(message) => TaskActionResponse::rejected(None, message),
    }
}

/// Dialog texts to show before calling `task_remove`.
#[flutter_rust_bridge::frb(sync)]
pub fn remove_prompt() -> ConfirmPromptItem {
    ConfirmPromptItem {
        title: REMOVE_TASK_PROMPT.title.to_string(),
        message: REMOVE_TASK_PROMPT.message.to_string(),
        decline_label: REMOVE_TASK_PROMPT.decline_label.to_string(),
        confirm_label: REMOVE_TASK_PROMPT.confirm_label.to_string(),
    }
}

fn with_store<T>(
    f: impl FnOnce(&mut TaskService<InMemoryTaskRepository>) -> T,
) -> Result<T, String> {
    let store = TASK_STORE
        .get_or_init(|| Mutex::new(TaskService::new(InMemoryTaskRepository::new())));
    let mut guard = store.lock().map_err(|_| {
        warn!("event=store_lock module=ffi status=error reason=poisoned");
        "task store unavailable".to_string()
    })?;
    Ok(f(&mut *guard))
}

fn changed_message(changed: bool, applied: &'static str) -> &'static str {
    if changed {
        applied
    } else {
        "No matching task."
    }
}

fn to_task_item(task: Task) -> TaskItem {
    TaskItem {
        id: to_ffi_id(task.id),
        title: task.title,
        done: task.done,
    }
}

fn to_ffi_id(id: TaskId) -> i64 {
    i64::try_from(id.get()).unwrap_or(i64::MAX)
}

fn from_ffi_id(id: i64) -> Option<TaskId> {
    u64::try_from(id).ok().map(TaskId::new)
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, ping, remove_prompt, task_add, task_edit, task_remove,
        task_toggle_done, tasks_counter, tasks_list,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/todo-logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn add_rejects_blank_and_duplicate_titles() {
        let blank = task_add("   ".to_string());
        assert!(!blank.ok);
        assert_eq!(blank.notice_title, None);

        let title = unique_token("dup");
        assert!(task_add(title.clone()).ok);
        let duplicate = task_add(format!("  {title} "));
        assert!(!duplicate.ok);
        assert_eq!(duplicate.notice_title.as_deref(), Some("Task already exists"));
    }

    #[test]
    fn add_toggle_edit_remove_roundtrip() {
        let title = unique_token("flow");
        let created = task_add(title.clone());
        assert!(created.ok, "{}", created.message);
        let id = created.task_id.expect("add should return task_id");
        assert!(tasks_counter() >= 1);

        assert!(task_toggle_done(id).changed);
        let renamed = format!("{title}-renamed");
        assert!(task_edit(id, renamed.clone()).changed);

        let item = tasks_list()
            .into_iter()
            .find(|item| item.id == id)
            .expect("task should be listed");
        assert_eq!(item.title, renamed);
        assert!(item.done);

        let declined = task_remove(id, false);
        assert!(declined.ok && !declined.changed);
        assert!(tasks_list().iter().any(|item| item.id == id));

        let removed = task_remove(id, true);
        assert!(removed.changed);
        assert!(!tasks_list().iter().any(|item| item.id == id));
    }

    #[test]
    fn unknown_and_negative_ids_are_noops() {
        for id in [-1_i64, 1] {
            let toggled = task_toggle_done(id);
            assert!(toggled.ok && !toggled.changed);
            assert!(!task_edit(id, "x".to_string()).changed);
            assert!(!task_remove(id, true).changed);
        }
    }

    #[test]
    fn remove_prompt_exposes_dialog_texts() {
        let prompt = remove_prompt();
        assert_eq!(prompt.title, "Remove item");
        assert_eq!(prompt.decline_label, "No");
        assert_eq!(prompt.confirm_label, "Yes");
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
