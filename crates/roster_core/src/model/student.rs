//! Student domain model.
//!
//! # Responsibility
//! - Define the draft record callers build in memory and the full row
//!   shape the store hands back.
//!
//! # Invariants
//! - `id` is store-assigned, immutable once assigned, and never reused.
//! - `enrolled_at` is store-assigned at insertion; callers never supply it.
//! - `email` uniqueness is a store constraint, not checked in memory.

use serde::{Deserialize, Serialize};

/// Store-assigned student identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type StudentId = i64;

/// In-memory draft of a student, before (or independent of) persistence.
///
/// Bounded lengths and email uniqueness are enforced by the schema, not
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub email: String,
    pub course_name: String,
}

impl Student {
    /// Creates a draft from the three caller-supplied fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        course_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            course_name: course_name.into(),
        }
    }
}

/// Full persisted row, including the store-assigned fields.
///
/// Only produced by reading rows back from the store; never constructed
/// ahead of an insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    /// Store-formatted UTC text, e.g. `2026-08-26 12:00:00`.
    pub enrolled_at: String,
    pub course_name: String,
}

impl StudentRecord {
    /// Projects the row back to its draft shape, dropping store-assigned
    /// fields.
    pub fn draft(&self) -> Student {
        Student {
            name: self.name.clone(),
            email: self.email.clone(),
            course_name: self.course_name.clone(),
        }
    }
}

/// Receipt for a successful insert: the two values the store assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: StudentId,
    pub enrolled_at: String,
}
