//! # Gradebook Models
//!
//! Domain models and DTOs for the gradebook roster.
//!
//! # Modules
//!
//! - [`ids`]: Strongly-typed ID newtypes
//! - [`students`]: Student entity, gender, and request DTOs
//!
//! # Example
//!
//! ```ignore
//! use gradebook_models::students::{CreateStudentDto, Gender, StudentForm};
//!
//! let form = StudentForm {
//!     name: "Alice".into(),
//!     gender: "Female".into(),
//!     grade: "80".into(),
//!     phone: "111".into(),
//!     email: "a@x.com".into(),
//! };
//! let dto: CreateStudentDto = form.parse()?;
//! ```

pub mod ids;
pub mod students;

// Re-export commonly used types at crate root for convenience
pub use ids::StudentId;
pub use students::{CreateStudentDto, FormError, Gender, Student, StudentForm, UpdateStudentDto};
