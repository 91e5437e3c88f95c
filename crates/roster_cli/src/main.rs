//! Sequential demonstration driver for the roster core.
//!
//! # Responsibility
//! - Exercise the full lifecycle against a real database file: schema
//!   reset, seed inserts, lookup, update, listing, deletion.
//! - Keep output deterministic and human-readable.

use roster_core::{
    default_log_level, init_logging, open_db, reset_schema, RepoError, SqliteStudentRepository,
    Student, StudentRepository, StudentService,
};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("roster demo failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    // File logging is diagnostic only; the demo keeps going without it.
    let log_dir = std::env::temp_dir().join("roster-logs");
    if let Err(message) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("logging disabled: {message}");
    }

    let db_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "roster.db".to_string());

    println!("opening database at {db_path}");
    let conn = open_db(&db_path)?;

    println!("resetting the students table (all prior rows are dropped)");
    reset_schema(&conn)?;

    let service = StudentService::new(SqliteStudentRepository::try_new(&conn)?);

    let maria = Student::new("María García", "maria.garcia@example.com", "Matemáticas");
    let pedro = Student::new(
        "Pedro Fernández",
        "pedro.fernandez@example.com",
        "Ciencias",
    );

    let first = service.insert(&maria)?;
    println!(
        "enrolled {} with id {} at {}",
        maria.name, first.id, first.enrolled_at
    );
    let second = service.insert(&pedro)?;
    println!(
        "enrolled {} with id {} at {}",
        pedro.name, second.id, second.enrolled_at
    );

    match service.find_by_id(first.id)? {
        Some(student) => println!(
            "found student {}: {} <{}> taking {}",
            first.id, student.name, student.email, student.course_name
        ),
        None => println!("no student with id {}", first.id),
    }

    let replacement = Student::new("Juan Pérez", "juan.perez@example.com", "Historia");
    match service.update(first.id, &replacement) {
        Ok(record) => println!(
            "updated student {}: now {} <{}> taking {}",
            record.id, record.name, record.email, record.course_name
        ),
        Err(RepoError::NotFound(id)) => println!("no student with id {id} to update"),
        Err(err) => return Err(err.into()),
    }

    print_roster(&service)?;

    match service.delete_by_id(second.id) {
        Ok(record) => println!("deleted student {} ({})", record.id, record.name),
        Err(RepoError::NotFound(id)) => println!("no student with id {id} to delete"),
        Err(err) => return Err(err.into()),
    }

    print_roster(&service)?;

    Ok(())
}

fn print_roster<R: StudentRepository>(service: &StudentService<R>) -> Result<(), RepoError> {
    let records = service.list_all()?;
    println!("roster ({} students):", records.len());
    for record in &records {
        println!(
            "  #{} {} <{}> {} enrolled_at={}",
            record.id, record.name, record.email, record.course_name, record.enrolled_at
        );
    }
    Ok(())
}
