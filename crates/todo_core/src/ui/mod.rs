//! Presentation layer view models.
//!
//! # Responsibility
//! - Hold transient per-row UI state (edit mode, pending title).
//! - Derive renderable screen snapshots from store state.
//! - Route user intents back to the task store.
//!
//! # Invariants
//! - Rows hold no business data; the store snapshot wins on every refresh.
//! - Edit mode is row-scoped and never written into the task sequence.

pub mod row;
pub mod screen;
