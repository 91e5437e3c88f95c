//! Student repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `students` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Not-found, duplicate-email and transport failures map to distinct
//!   `RepoError` variants; no outcome is collapsed into a log line.
//! - The backing connection must already carry the `students` schema;
//!   `try_new` rejects connections that do not.

use crate::db::schema::STUDENTS_TABLE;
use crate::db::DbError;
use crate::model::student::{Enrollment, Student, StudentId, StudentRecord};
use rusqlite::{params, Connection, Row};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

const RECORD_SELECT_SQL: &str = "SELECT
    id,
    name,
    email,
    enrolled_at,
    course_name
FROM students";

const REQUIRED_COLUMNS: &[&str] = &["id", "name", "email", "enrolled_at", "course_name"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for student persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(StudentId),
    /// Unique-email constraint violation; carries the store's message.
    DuplicateEmail(String),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "student not found: {id}"),
            Self::DuplicateEmail(message) => {
                write!(f, "email already enrolled: {message}")
            }
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing; run schema setup first")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        // SQLite reports unique-email violations as a constraint failure
        // naming the column; classify those so callers see a semantic error
        // instead of a transport one.
        if let rusqlite::Error::SqliteFailure(code, Some(message)) = &value {
            if code.code == rusqlite::ErrorCode::ConstraintViolation
                && message.contains("students.email")
            {
                return Self::DuplicateEmail(message.clone());
            }
        }
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for student CRUD operations.
///
/// Implementations other than SQLite (e.g. an in-memory fake) plug in here
/// for tests and alternative stores.
pub trait StudentRepository {
    /// Persists a draft and returns the store-assigned id and enrollment
    /// timestamp.
    fn insert(&self, student: &Student) -> RepoResult<Enrollment>;
    /// Looks up one student by id, returning the draft shape (without the
    /// store-assigned fields). `Ok(None)` means the id matched zero rows.
    fn find_by_id(&self, id: StudentId) -> RepoResult<Option<Student>>;
    /// Returns all persisted rows in insertion order.
    fn list_all(&self) -> RepoResult<Vec<StudentRecord>>;
    /// Replaces name/email/course of the row with this id and returns the
    /// updated row. `id` itself is immutable.
    fn update(&self, id: StudentId, new_values: &Student) -> RepoResult<StudentRecord>;
    /// Removes the row with this id and returns its last persisted state.
    fn delete_by_id(&self, id: StudentId) -> RepoResult<StudentRecord>;
}

/// SQLite-backed student repository over an injected connection.
pub struct SqliteStudentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStudentRepository<'conn> {
    /// Wraps a connection after verifying the `students` schema is present.
    ///
    /// # Errors
    /// - `MissingRequiredTable` when the table does not exist.
    /// - `MissingRequiredColumn` when the table lacks an expected column.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        verify_students_schema(conn)?;
        Ok(Self { conn })
    }
}

impl StudentRepository for SqliteStudentRepository<'_> {
    fn insert(&self, student: &Student) -> RepoResult<Enrollment> {
        let mut stmt = self.conn.prepare(
            "INSERT INTO students (name, email, course_name)
             VALUES (?1, ?2, ?3)
             RETURNING id, enrolled_at;",
        )?;

        let mut rows = stmt.query(params![
            student.name.as_str(),
            student.email.as_str(),
            student.course_name.as_str(),
        ])?;

        match rows.next()? {
            Some(row) => Ok(Enrollment {
                id: row.get(0)?,
                enrolled_at: row.get(1)?,
            }),
            // RETURNING always yields the inserted row; reaching here means
            // the store broke its contract.
            None => Err(RepoError::Db(DbError::Sqlite(
                rusqlite::Error::QueryReturnedNoRows,
            ))),
        }
    }

    fn find_by_id(&self, id: StudentId) -> RepoResult<Option<Student>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, email, course_name
             FROM students
             WHERE id = ?1;",
        )?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(Student {
                name: row.get(0)?,
                email: row.get(1)?,
                course_name: row.get(2)?,
            }));
        }

        Ok(None)
    }

    fn list_all(&self) -> RepoResult<Vec<StudentRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RECORD_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_student_record(row)?);
        }

        Ok(records)
    }

    fn update(&self, id: StudentId, new_values: &Student) -> RepoResult<StudentRecord> {
        let mut stmt = self.conn.prepare(
            "UPDATE students
             SET name = ?1, email = ?2, course_name = ?3
             WHERE id = ?4
             RETURNING id, name, email, enrolled_at, course_name;",
        )?;

        let mut rows = stmt.query(params![
            new_values.name.as_str(),
            new_values.email.as_str(),
            new_values.course_name.as_str(),
            id,
        ])?;

        match rows.next()? {
            Some(row) => Ok(parse_student_record(row)?),
            None => Err(RepoError::NotFound(id)),
        }
    }

    fn delete_by_id(&self, id: StudentId) -> RepoResult<StudentRecord> {
        let mut stmt = self.conn.prepare(
            "DELETE FROM students
             WHERE id = ?1
             RETURNING id, name, email, enrolled_at, course_name;",
        )?;

        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => Ok(parse_student_record(row)?),
            None => Err(RepoError::NotFound(id)),
        }
    }
}

fn parse_student_record(row: &Row<'_>) -> RepoResult<StudentRecord> {
    Ok(StudentRecord {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        enrolled_at: row.get("enrolled_at")?,
        course_name: row.get("course_name")?,
    })
}

fn verify_students_schema(conn: &Connection) -> RepoResult<()> {
    let table_exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [STUDENTS_TABLE],
        |row| row.get(0),
    )?;
    if table_exists == 0 {
        return Err(RepoError::MissingRequiredTable(STUDENTS_TABLE));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let mut rows = stmt.query([STUDENTS_TABLE])?;
    let mut present = HashSet::new();
    while let Some(row) = rows.next()? {
        present.insert(row.get::<_, String>(0)?);
    }

    for column in REQUIRED_COLUMNS.iter().copied() {
        if !present.contains(column) {
            return Err(RepoError::MissingRequiredColumn {
                table: STUDENTS_TABLE,
                column,
            });
        }
    }

    Ok(())
}
