//! Student use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for callers of the core crate.
//! - Delegate persistence to repository implementations.
//! - Emit one structured log event per operation outcome.
//!
//! # Invariants
//! - Service APIs never bypass repository contracts.
//! - Logging is observational only; every result reaches the caller
//!   unchanged, including not-found and duplicate-email outcomes.

use crate::model::student::{Enrollment, Student, StudentId, StudentRecord};
use crate::repo::student_repo::{RepoResult, StudentRepository};
use log::{error, info};

/// Use-case service wrapper for student CRUD operations.
pub struct StudentService<R: StudentRepository> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Builds a draft from the three caller-supplied fields and persists it.
    pub fn enroll(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        course_name: impl Into<String>,
    ) -> RepoResult<Enrollment> {
        self.insert(&Student::new(name, email, course_name))
    }

    /// Persists a draft through the repository.
    pub fn insert(&self, student: &Student) -> RepoResult<Enrollment> {
        match self.repo.insert(student) {
            Ok(enrollment) => {
                info!(
                    "event=student_insert module=service status=ok id={} enrolled_at={}",
                    enrollment.id, enrollment.enrolled_at
                );
                Ok(enrollment)
            }
            Err(err) => {
                error!("event=student_insert module=service status=error error={err}");
                Err(err)
            }
        }
    }

    /// Gets one student by id; `Ok(None)` means no row matched.
    pub fn find_by_id(&self, id: StudentId) -> RepoResult<Option<Student>> {
        match self.repo.find_by_id(id) {
            Ok(Some(student)) => {
                info!("event=student_find module=service status=ok id={id}");
                Ok(Some(student))
            }
            Ok(None) => {
                info!("event=student_find module=service status=not_found id={id}");
                Ok(None)
            }
            Err(err) => {
                error!("event=student_find module=service status=error id={id} error={err}");
                Err(err)
            }
        }
    }

    /// Lists all persisted rows in insertion order.
    pub fn list_all(&self) -> RepoResult<Vec<StudentRecord>> {
        match self.repo.list_all() {
            Ok(records) => {
                info!(
                    "event=student_list module=service status=ok count={}",
                    records.len()
                );
                Ok(records)
            }
            Err(err) => {
                error!("event=student_list module=service status=error error={err}");
                Err(err)
            }
        }
    }

    /// Replaces the mutable fields of one row and returns the updated row.
    pub fn update(&self, id: StudentId, new_values: &Student) -> RepoResult<StudentRecord> {
        match self.repo.update(id, new_values) {
            Ok(record) => {
                info!("event=student_update module=service status=ok id={id}");
                Ok(record)
            }
            Err(err) => {
                error!("event=student_update module=service status=error id={id} error={err}");
                Err(err)
            }
        }
    }

    /// Removes one row and returns its last persisted state.
    pub fn delete_by_id(&self, id: StudentId) -> RepoResult<StudentRecord> {
        match self.repo.delete_by_id(id) {
            Ok(record) => {
                info!("event=student_delete module=service status=ok id={id}");
                Ok(record)
            }
            Err(err) => {
                error!("event=student_delete module=service status=error id={id} error={err}");
                Err(err)
            }
        }
    }
}
