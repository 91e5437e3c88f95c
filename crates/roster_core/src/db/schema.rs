//! Destructive schema setup for the `students` table.
//!
//! # Responsibility
//! - Drop any prior `students` table and recreate it from scratch.
//!
//! # Invariants
//! - `id` is assigned by the store, monotonically increasing and never
//!   reused (AUTOINCREMENT).
//! - `email` uniqueness is enforced here, not in application code.
//! - `enrolled_at` is assigned by the store at row insertion.

use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::time::Instant;

/// Name of the single table managed by this crate.
pub const STUDENTS_TABLE: &str = "students";

const RESET_SQL: &str = "DROP TABLE IF EXISTS students;
CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL CHECK (length(name) <= 100),
    email TEXT NOT NULL UNIQUE CHECK (length(email) <= 100),
    enrolled_at TEXT NOT NULL DEFAULT (datetime('now')),
    course_name TEXT NOT NULL CHECK (length(course_name) <= 100)
);";

/// Drops the `students` table if present and recreates it empty.
///
/// Destructive by design: all previously persisted rows are lost. Intended
/// as a fixture/demo reset, not a production migration path.
///
/// # Errors
/// - Propagates store-level failures (e.g. permission denied) unchanged.
pub fn reset_schema(conn: &Connection) -> DbResult<()> {
    let started_at = Instant::now();
    info!("event=schema_reset module=db status=start table={STUDENTS_TABLE}");

    match conn.execute_batch(RESET_SQL) {
        Ok(()) => {
            info!(
                "event=schema_reset module=db status=ok table={STUDENTS_TABLE} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=schema_reset module=db status=error table={STUDENTS_TABLE} duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err.into())
        }
    }
}
