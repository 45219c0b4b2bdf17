use std::sync::Arc;

use fake::faker::internet::en::SafeEmail;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use gradebook::state::AppState;
use gradebook_config::RosterConfig;
use gradebook_core::regno::SequentialRegNo;
use gradebook_models::students::{CreateStudentDto, Gender, UpdateStudentDto};

/// Build an `AppState` with a deterministic registration number generator.
pub fn test_state() -> AppState {
    test_state_with_config(RosterConfig::default())
}

#[allow(dead_code)]
pub fn test_state_with_config(config: RosterConfig) -> AppState {
    dotenvy::dotenv().ok();
    gradebook::logging::init_logging();
    let mut state = AppState::with_config(config);
    state.reg_no_gen = Arc::new(SequentialRegNo::new(state.config.reg_no_prefix.clone()));
    state
}

pub fn student_dto(name: &str, gender: Gender, grade: i32) -> CreateStudentDto {
    CreateStudentDto {
        name: name.to_string(),
        gender,
        grade,
        phone: PhoneNumber().fake(),
        email: SafeEmail().fake(),
    }
}

#[allow(dead_code)]
pub fn update_dto(name: &str, gender: Gender, grade: i32) -> UpdateStudentDto {
    UpdateStudentDto {
        name: name.to_string(),
        gender,
        grade,
        phone: PhoneNumber().fake(),
        email: SafeEmail().fake(),
    }
}
