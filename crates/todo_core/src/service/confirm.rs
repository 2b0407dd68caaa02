//! Blocking confirmation contract for destructive actions.
//!
//! # Responsibility
//! - Describe the two-choice prompt shown before a task is removed.
//! - Let callers (terminal, mobile bridge, tests) answer it synchronously.

/// Answer to a confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirm,
    Decline,
}

impl Decision {
    pub fn from_confirmed(confirmed: bool) -> Self {
        if confirmed {
            Self::Confirm
        } else {
            Self::Decline
        }
    }
}

/// Two-choice prompt content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: &'static str,
    pub message: &'static str,
    pub decline_label: &'static str,
    pub confirm_label: &'static str,
}

/// Prompt shown before removing one task.
pub const REMOVE_TASK_PROMPT: ConfirmPrompt = ConfirmPrompt {
    title: "Remove item",
    message: "Are you sure you want to remove this item?",
    decline_label: "No",
    confirm_label: "Yes",
};

/// Blocking decision point in the interaction flow.
pub trait Confirmer {
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Decision;
}

/// Confirmer that always answers with a preset decision.
///
/// Used when the decision was already collected elsewhere (e.g. a dialog
/// rendered by the mobile UI before calling into core).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDecision(pub Decision);

impl Confirmer for FixedDecision {
    fn confirm(&mut self, _prompt: &ConfirmPrompt) -> Decision {
        self.0
    }
}
