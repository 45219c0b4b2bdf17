//! Student domain models and DTOs.
//!
//! This module contains the student entity, the gender enumeration, the
//! create/update request DTOs with their validation rules, and the raw form
//! boundary (`StudentForm`) that turns untyped field text into a typed DTO.

use crate::ids::StudentId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Student gender.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        };
        f.write_str(name)
    }
}

impl FromStr for Gender {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            s if s.eq_ignore_ascii_case("male") => Ok(Self::Male),
            s if s.eq_ignore_ascii_case("female") => Ok(Self::Female),
            s if s.eq_ignore_ascii_case("other") => Ok(Self::Other),
            other => Err(FormError::InvalidGender(other.to_string())),
        }
    }
}

/// A student on the roster.
///
/// `id` and `reg_no` are assigned at creation and never change; the remaining
/// five fields are replaced wholesale by an update. The registration number
/// is display-only and carries no uniqueness guarantee.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub reg_no: String,
    pub name: String,
    pub gender: Gender,
    pub grade: i32,
    pub phone: String,
    pub email: String,
}

/// DTO for adding a new student.
///
/// `name`, `phone`, and `email` must be non-empty. Nothing further is
/// enforced here: email format and grade range are deliberately unchecked,
/// matching the source system.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub gender: Gender,
    pub grade: i32,
    #[validate(length(min = 1, message = "phone must not be empty"))]
    pub phone: String,
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: String,
}

/// DTO for editing an existing student.
///
/// Edits are whole-record replacements: all five mutable fields are required
/// and the record's `id` and `reg_no` are left untouched.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub gender: Gender,
    pub grade: i32,
    #[validate(length(min = 1, message = "phone must not be empty"))]
    pub phone: String,
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: String,
}

/// A rejected form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A required field was left empty.
    MissingField(&'static str),
    /// The grade text did not parse as an integer.
    InvalidGrade(String),
    /// The gender text matched none of the known variants.
    InvalidGender(String),
}

impl std::error::Error for FormError {}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{} is required", field),
            Self::InvalidGrade(text) => write!(f, "grade '{}' is not an integer", text),
            Self::InvalidGender(text) => write!(f, "unknown gender '{}'", text),
        }
    }
}

/// Raw, untyped form input as the presentation layer collects it.
///
/// The source system silently withheld submission while any field was
/// invalid; here the same checks reject with a reason instead. `parse` is
/// the only way form text becomes a [`CreateStudentDto`].
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StudentForm {
    pub name: String,
    pub gender: String,
    pub grade: String,
    pub phone: String,
    pub email: String,
}

impl StudentForm {
    pub fn parse(&self) -> Result<CreateStudentDto, FormError> {
        let name = Self::required("name", &self.name)?;
        let phone = Self::required("phone", &self.phone)?;
        let email = Self::required("email", &self.email)?;
        let gender = self.gender.parse::<Gender>()?;
        let grade = self
            .grade
            .trim()
            .parse::<i32>()
            .map_err(|_| FormError::InvalidGrade(self.grade.clone()))?;

        Ok(CreateStudentDto {
            name,
            gender,
            grade,
            phone,
            email,
        })
    }

    fn required(field: &'static str, value: &str) -> Result<String, FormError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Err(FormError::MissingField(field))
        } else {
            Ok(trimmed.to_string())
        }
    }
}
