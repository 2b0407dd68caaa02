//! Repository layer abstractions.
//!
//! # Responsibility
//! - Define the task sequence storage contract used by the store service.
//! - Keep collection mechanics out of business-rule code.
//!
//! # Invariants
//! - Repositories do not apply business rules (duplicate titles,
//!   confirmation); those live in `service`.

pub mod task_repo;
