use crate::events::RosterEvent;
use crate::modules::students::model::{CreateStudentDto, Student, StudentId, UpdateStudentDto};
use crate::state::AppState;
use crate::validator::validate_dto;
use gradebook_core::errors::AppError;
use tracing::{info, instrument};

pub struct StudentService;

impl StudentService {
    /// Add a student to the roster.
    ///
    /// Generates a fresh id and registration number, appends the record, and
    /// lets the roster recompute its average and re-sort. Always succeeds on
    /// a valid DTO; the registration number is not checked for collisions.
    #[instrument(skip(state, dto))]
    pub fn create_student(state: &AppState, dto: CreateStudentDto) -> Result<Student, AppError> {
        validate_dto(&dto)?;
        state
            .grade_policy
            .check(dto.grade)
            .map_err(AppError::unprocessable)?;

        let student = Student {
            id: StudentId::new(),
            reg_no: state.reg_no_gen.generate(),
            name: dto.name,
            gender: dto.gender,
            grade: dto.grade,
            phone: dto.phone,
            email: dto.email,
        };

        let average_grade = {
            let mut roster = state.lock_roster();
            roster.insert(student.clone());
            roster.average_grade()
        };

        info!(id = %student.id, reg_no = %student.reg_no, "Student added");
        state.publish(RosterEvent::StudentAdded {
            id: student.id,
            average_grade,
        });
        Ok(student)
    }

    /// Snapshot of the roster in its current order.
    #[instrument(skip(state))]
    pub fn get_students(state: &AppState) -> Vec<Student> {
        state.lock_roster().students().to_vec()
    }

    #[instrument(skip(state))]
    pub fn get_student_by_id(state: &AppState, id: StudentId) -> Result<Student, AppError> {
        state
            .lock_roster()
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))
    }

    /// Replace the five mutable fields of an existing student.
    ///
    /// `id` and `reg_no` are never touched. An unmatched id surfaces as
    /// `NotFound` and leaves the roster exactly as it was.
    #[instrument(skip(state, dto))]
    pub fn update_student(
        state: &AppState,
        id: StudentId,
        dto: UpdateStudentDto,
    ) -> Result<Student, AppError> {
        validate_dto(&dto)?;
        state
            .grade_policy
            .check(dto.grade)
            .map_err(AppError::unprocessable)?;

        let (updated, average_grade) = {
            let mut roster = state.lock_roster();
            let updated = roster
                .update(id, &dto)
                .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;
            (updated, roster.average_grade())
        };

        info!(id = %id, "Student updated");
        state.publish(RosterEvent::StudentUpdated { id, average_grade });
        Ok(updated)
    }

    /// Remove a student. An unmatched id surfaces as `NotFound`; the roster
    /// is untouched either way on a miss.
    #[instrument(skip(state))]
    pub fn delete_student(state: &AppState, id: StudentId) -> Result<(), AppError> {
        let average_grade = {
            let mut roster = state.lock_roster();
            if !roster.remove(id) {
                return Err(AppError::not_found(anyhow::anyhow!("Student not found")));
            }
            roster.average_grade()
        };

        info!(id = %id, "Student removed");
        state.publish(RosterEvent::StudentRemoved { id, average_grade });
        Ok(())
    }

    /// Current average grade; 0.0 for an empty roster.
    #[instrument(skip(state))]
    pub fn average_grade(state: &AppState) -> f64 {
        state.lock_roster().average_grade()
    }

    /// Flip the sort direction and re-sort. Returns the new direction.
    #[instrument(skip(state))]
    pub fn toggle_sort_order(state: &AppState) -> bool {
        let ascending = state.lock_roster().toggle_sort_order();
        info!(ascending, "Sort order toggled");
        state.publish(RosterEvent::SortOrderChanged { ascending });
        ascending
    }
}
