//! Core use-case services.
//!
//! # Responsibility
//! - Apply task store business rules on top of repository contracts.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod confirm;
pub mod task_service;
