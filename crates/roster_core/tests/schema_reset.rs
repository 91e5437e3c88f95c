use roster_core::{
    open_db, open_db_in_memory, reset_schema, RepoError, SqliteStudentRepository, Student,
    StudentRepository, STUDENTS_TABLE,
};
use rusqlite::Connection;

#[test]
fn reset_schema_creates_the_students_table() {
    let conn = open_db_in_memory().unwrap();
    reset_schema(&conn).unwrap();

    assert_table_exists(&conn, STUDENTS_TABLE);
}

#[test]
fn reset_schema_drops_all_prior_rows() {
    let conn = open_db_in_memory().unwrap();
    reset_schema(&conn).unwrap();

    {
        let repo = SqliteStudentRepository::try_new(&conn).unwrap();
        repo.insert(&Student::new("Ana Ruiz", "ana.ruiz@example.com", "Física"))
            .unwrap();
        assert_eq!(repo.list_all().unwrap().len(), 1);
    }

    reset_schema(&conn).unwrap();

    let repo = SqliteStudentRepository::try_new(&conn).unwrap();
    assert_eq!(repo.list_all().unwrap().len(), 0);
}

#[test]
fn reset_schema_works_against_a_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.db");

    let conn_first = open_db(&path).unwrap();
    reset_schema(&conn_first).unwrap();
    {
        let repo = SqliteStudentRepository::try_new(&conn_first).unwrap();
        repo.insert(&Student::new("Ana Ruiz", "ana.ruiz@example.com", "Física"))
            .unwrap();
    }
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    let repo = SqliteStudentRepository::try_new(&conn_second).unwrap();
    let rows = repo.list_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].email, "ana.ruiz@example.com");
}

#[test]
fn repository_rejects_connection_without_students_table() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteStudentRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable(STUDENTS_TABLE))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE students (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE
        );",
    )
    .unwrap();

    let result = SqliteStudentRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "students",
            column: "enrolled_at"
        })
    ));
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
