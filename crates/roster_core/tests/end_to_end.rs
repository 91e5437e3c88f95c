use roster_core::{
    open_db_in_memory, reset_schema, SqliteStudentRepository, Student, StudentService,
};

// Full demo lifecycle: seed two students, look one up, replace its values,
// delete the other, and check the surviving roster.
#[test]
fn demo_flow_ends_with_single_updated_student() {
    let conn = open_db_in_memory().unwrap();
    reset_schema(&conn).unwrap();
    let service = StudentService::new(SqliteStudentRepository::try_new(&conn).unwrap());

    let maria = Student::new("María García", "maria.garcia@example.com", "Matemáticas");
    let pedro = Student::new(
        "Pedro Fernández",
        "pedro.fernandez@example.com",
        "Ciencias",
    );

    let first = service.insert(&maria).unwrap();
    let second = service.insert(&pedro).unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);

    let found = service.find_by_id(1).unwrap().unwrap();
    assert_eq!(found, maria);

    let juan = Student::new("Juan Pérez", "juan.perez@example.com", "Historia");
    let updated = service.update(1, &juan).unwrap();
    assert_eq!(updated.id, 1);
    assert_eq!(updated.name, "Juan Pérez");
    assert_eq!(updated.email, "juan.perez@example.com");
    assert_eq!(updated.course_name, "Historia");
    assert_eq!(updated.enrolled_at, first.enrolled_at);

    let before_delete = service.list_all().unwrap();
    assert_eq!(before_delete.len(), 2);

    let deleted = service.delete_by_id(2).unwrap();
    assert_eq!(deleted.name, "Pedro Fernández");

    let roster = service.list_all().unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].id, 1);
    assert_eq!(roster[0].name, "Juan Pérez");
    assert_eq!(roster[0].draft(), juan);
}
