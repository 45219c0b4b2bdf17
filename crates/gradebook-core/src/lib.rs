//! # Gradebook Core
//!
//! Foundational types for the gradebook roster:
//!
//! - [`errors`]: Application error type with domain error kinds
//! - [`regno`]: Registration number generators
//! - [`grade`]: Grade acceptance policies
//!
//! # Example
//!
//! ```ignore
//! use gradebook_core::errors::AppError;
//! use gradebook_core::regno::{RegNoGenerator, RandomRegNo};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Student not found"));
//!
//! let generator = RandomRegNo::new("STU");
//! let reg_no = generator.generate();
//! ```

pub mod errors;
pub mod grade;
pub mod regno;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorKind};
pub use grade::{GradeError, GradePolicy, Unbounded};
pub use regno::{RandomRegNo, RegNoGenerator, SequentialRegNo};
