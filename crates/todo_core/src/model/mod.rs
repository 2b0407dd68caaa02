//! Domain model for the to-do list.
//!
//! # Responsibility
//! - Define the task record rendered by every list row.
//! - Own identifier generation for newly created tasks.
//!
//! # Invariants
//! - Every task is identified by a `TaskId` that is never reused in-process.
//! - Mutation happens by replacement; identity is carried by `TaskId`.

pub mod task;
