//! Domain model for student roster data.
//!
//! # Responsibility
//! - Define the in-memory draft shape and the persisted row shape.
//! - Keep store-assigned fields (`id`, `enrolled_at`) out of drafts.
//!
//! # Invariants
//! - A draft `Student` never carries an id or enrollment timestamp; those
//!   exist only on values read back from the store.

pub mod student;
