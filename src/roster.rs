//! The record manager: the authoritative in-memory student collection.
//!
//! `Roster` owns the ordered list of students, the derived average grade, and
//! the sort direction flag. The average is recomputed eagerly after every
//! structural mutation rather than on read, and the list is re-sorted by
//! grade after add and edit. Removal preserves the relative order of the
//! remaining records, so delete skips the re-sort.
//!
//! All operations are total: an unmatched id is a no-op at this layer, never
//! a corrupted collection. The service above decides whether absence is an
//! error.

use gradebook_models::students::{Student, UpdateStudentDto};
use gradebook_models::StudentId;

#[derive(Debug)]
pub struct Roster {
    students: Vec<Student>,
    average_grade: f64,
    sort_ascending: bool,
}

impl Roster {
    pub fn new(sort_ascending: bool) -> Self {
        Self {
            students: Vec::new(),
            average_grade: 0.0,
            sort_ascending,
        }
    }

    /// Current ordered sequence, read-only.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Arithmetic mean of all grades; exactly 0.0 when the roster is empty.
    pub fn average_grade(&self) -> f64 {
        self.average_grade
    }

    pub fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Append a student, then recompute the average and re-sort.
    pub fn insert(&mut self, student: Student) {
        self.students.push(student);
        self.recompute_average();
        self.sort_students();
    }

    /// Overwrite the five mutable fields of the student with this id, leaving
    /// `id` and `reg_no` untouched, then recompute the average and re-sort.
    ///
    /// Returns the updated record, or `None` if no record matches. A miss
    /// leaves the roster untouched.
    pub fn update(&mut self, id: StudentId, dto: &UpdateStudentDto) -> Option<Student> {
        let student = self.students.iter_mut().find(|s| s.id == id)?;
        student.name = dto.name.clone();
        student.gender = dto.gender;
        student.grade = dto.grade;
        student.phone = dto.phone.clone();
        student.email = dto.email.clone();
        let updated = student.clone();
        self.recompute_average();
        self.sort_students();
        Some(updated)
    }

    /// Remove every record with this id and recompute the average.
    ///
    /// Removal does not disturb the relative order of the remaining records,
    /// so no re-sort happens here. Returns whether anything was removed.
    pub fn remove(&mut self, id: StudentId) -> bool {
        let before = self.students.len();
        self.students.retain(|s| s.id != id);
        if self.students.len() == before {
            return false;
        }
        self.recompute_average();
        true
    }

    /// Flip the sort direction, re-sort, and return the new direction.
    /// The average is untouched.
    pub fn toggle_sort_order(&mut self) -> bool {
        self.sort_ascending = !self.sort_ascending;
        self.sort_students();
        self.sort_ascending
    }

    fn recompute_average(&mut self) {
        if self.students.is_empty() {
            self.average_grade = 0.0;
            return;
        }
        let total: i64 = self.students.iter().map(|s| s.grade as i64).sum();
        self.average_grade = total as f64 / self.students.len() as f64;
    }

    // Stable sort by grade, no secondary key: ties keep their prior order.
    fn sort_students(&mut self) {
        if self.sort_ascending {
            self.students.sort_by(|a, b| a.grade.cmp(&b.grade));
        } else {
            self.students.sort_by(|a, b| b.grade.cmp(&a.grade));
        }
    }
}
