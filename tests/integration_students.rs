mod common;

use common::{student_dto, test_state, update_dto};
use gradebook::modules::students::service::StudentService;
use gradebook_config::RosterConfig;
use gradebook_core::errors::ErrorKind;
use gradebook_models::students::Gender;
use gradebook_models::StudentId;

#[test]
fn test_create_student_assigns_id_and_reg_no() {
    let state = test_state();

    let alice = StudentService::create_student(&state, student_dto("Alice", Gender::Female, 80))
        .unwrap();

    assert!(alice.reg_no.starts_with("STU"));
    assert_eq!(alice.name, "Alice");
    assert_eq!(alice.grade, 80);
    assert_eq!(StudentService::get_students(&state).len(), 1);
}

#[test]
fn test_empty_roster_average_is_zero() {
    let state = test_state();
    assert_eq!(StudentService::average_grade(&state), 0.0);
}

#[test]
fn test_roster_scenario_chain() {
    let state = test_state();

    // add Alice(80), add Bob(60): ascending order puts Bob first
    StudentService::create_student(&state, student_dto("Alice", Gender::Female, 80)).unwrap();
    let bob =
        StudentService::create_student(&state, student_dto("Bob", Gender::Male, 60)).unwrap();

    let students = StudentService::get_students(&state);
    let names: Vec<&str> = students.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Alice"]);
    assert_eq!(StudentService::average_grade(&state), 70.0);

    // toggle: descending, average untouched
    assert!(!StudentService::toggle_sort_order(&state));
    let students = StudentService::get_students(&state);
    let names: Vec<&str> = students.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
    assert_eq!(StudentService::average_grade(&state), 70.0);

    // delete Bob
    StudentService::delete_student(&state, bob.id).unwrap();
    let students = StudentService::get_students(&state);
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].name, "Alice");
    assert_eq!(StudentService::average_grade(&state), 80.0);

    // edit Alice to grade 90
    let alice_id = students[0].id;
    StudentService::update_student(&state, alice_id, update_dto("Alice", Gender::Female, 90))
        .unwrap();
    let students = StudentService::get_students(&state);
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].grade, 90);
    assert_eq!(StudentService::average_grade(&state), 90.0);
}

#[test]
fn test_update_preserves_id_and_reg_no() {
    let state = test_state();
    let alice = StudentService::create_student(&state, student_dto("Alice", Gender::Female, 80))
        .unwrap();

    let updated = StudentService::update_student(
        &state,
        alice.id,
        update_dto("Alicia", Gender::Other, 95),
    )
    .unwrap();

    assert_eq!(updated.id, alice.id);
    assert_eq!(updated.reg_no, alice.reg_no);
    assert_eq!(updated.name, "Alicia");
    assert_eq!(updated.gender, Gender::Other);
    assert_eq!(updated.grade, 95);
    assert_eq!(StudentService::get_students(&state).len(), 1);
}

#[test]
fn test_delete_unknown_id_leaves_roster_untouched() {
    let state = test_state();
    StudentService::create_student(&state, student_dto("Alice", Gender::Female, 80)).unwrap();
    StudentService::create_student(&state, student_dto("Bob", Gender::Male, 60)).unwrap();
    let before = StudentService::get_students(&state);

    let err = StudentService::delete_student(&state, StudentId::new()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    assert_eq!(StudentService::get_students(&state), before);
    assert_eq!(StudentService::average_grade(&state), 70.0);
}

#[test]
fn test_update_unknown_id_leaves_roster_untouched() {
    let state = test_state();
    StudentService::create_student(&state, student_dto("Alice", Gender::Female, 80)).unwrap();
    let before = StudentService::get_students(&state);

    let err = StudentService::update_student(
        &state,
        StudentId::new(),
        update_dto("Ghost", Gender::Other, 0),
    )
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    assert_eq!(StudentService::get_students(&state), before);
    assert_eq!(StudentService::average_grade(&state), 80.0);
}

#[test]
fn test_create_student_rejects_empty_name() {
    let state = test_state();
    let mut dto = student_dto("Alice", Gender::Female, 80);
    dto.name = "".to_string();

    let err = StudentService::create_student(&state, dto).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unprocessable);
    assert!(StudentService::get_students(&state).is_empty());
}

#[test]
fn test_update_student_rejects_empty_email() {
    let state = test_state();
    let alice = StudentService::create_student(&state, student_dto("Alice", Gender::Female, 80))
        .unwrap();

    let mut dto = update_dto("Alice", Gender::Female, 90);
    dto.email = "".to_string();
    let err = StudentService::update_student(&state, alice.id, dto).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unprocessable);

    // Rejected edit changes nothing
    assert_eq!(StudentService::get_students(&state)[0].grade, 80);
}

#[test]
fn test_roster_stays_sorted_after_every_add() {
    let state = test_state();
    for (name, grade) in [("A", 50), ("B", 90), ("C", 10), ("D", 70)] {
        StudentService::create_student(&state, student_dto(name, Gender::Other, grade)).unwrap();
        let grades: Vec<i32> = StudentService::get_students(&state)
            .iter()
            .map(|s| s.grade)
            .collect();
        let mut sorted = grades.clone();
        sorted.sort();
        assert_eq!(grades, sorted);
    }
}

#[test]
fn test_descending_initial_direction_from_config() {
    let state = common::test_state_with_config(RosterConfig {
        sort_ascending: false,
        ..RosterConfig::default()
    });

    StudentService::create_student(&state, student_dto("Alice", Gender::Female, 80)).unwrap();
    StudentService::create_student(&state, student_dto("Bob", Gender::Male, 60)).unwrap();

    let grades: Vec<i32> = StudentService::get_students(&state)
        .iter()
        .map(|s| s.grade)
        .collect();
    assert_eq!(grades, vec![80, 60]);
}

#[test]
fn test_get_student_by_id() {
    let state = test_state();
    let alice = StudentService::create_student(&state, student_dto("Alice", Gender::Female, 80))
        .unwrap();

    let found = StudentService::get_student_by_id(&state, alice.id).unwrap();
    assert_eq!(found, alice);

    let err = StudentService::get_student_by_id(&state, StudentId::new()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[test]
fn test_form_boundary_feeds_create() {
    use gradebook_models::students::StudentForm;

    let state = test_state();
    let form = StudentForm {
        name: "Alice".to_string(),
        gender: "Female".to_string(),
        grade: "80".to_string(),
        phone: "111".to_string(),
        email: "a@x.com".to_string(),
    };

    let dto = form.parse().unwrap();
    let alice = StudentService::create_student(&state, dto).unwrap();
    assert_eq!(alice.gender, Gender::Female);
    assert_eq!(alice.grade, 80);
    assert_eq!(alice.phone, "111");
}

#[test]
fn test_duplicate_reg_numbers_are_tolerated() {
    // The generator is not collision-checked; identical codes must coexist.
    use gradebook_core::regno::RegNoGenerator;
    use std::sync::Arc;

    struct FixedRegNo;
    impl RegNoGenerator for FixedRegNo {
        fn generate(&self) -> String {
            "STU1234".to_string()
        }
    }

    let mut state = test_state();
    state.reg_no_gen = Arc::new(FixedRegNo);

    let a = StudentService::create_student(&state, student_dto("Alice", Gender::Female, 80))
        .unwrap();
    let b =
        StudentService::create_student(&state, student_dto("Bob", Gender::Male, 60)).unwrap();

    assert_eq!(a.reg_no, b.reg_no);
    assert_ne!(a.id, b.id);
    assert_eq!(StudentService::get_students(&state).len(), 2);
}
