//! Grade acceptance policies.
//!
//! The roster itself places no bound on grades: any `i32`, including negative
//! or very large values, is accepted. That matches the source system and is
//! preserved until domain constraints are specified. The policy trait is the
//! single place a bound would be added; the service checks every incoming
//! grade against the configured policy before it reaches the roster.

use std::fmt;

/// A grade rejected by the active policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeError {
    pub grade: i32,
    pub min: i32,
    pub max: i32,
}

impl std::error::Error for GradeError {}

impl fmt::Display for GradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "grade {} is outside the accepted range {}..={}",
            self.grade, self.min, self.max
        )
    }
}

pub trait GradePolicy {
    fn check(&self, grade: i32) -> Result<(), GradeError>;
}

/// Accepts every integer. The default policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbounded;

impl GradePolicy for Unbounded {
    fn check(&self, _grade: i32) -> Result<(), GradeError> {
        Ok(())
    }
}

/// Accepts grades within an inclusive range, e.g. `Bounded::new(0, 100)`.
#[derive(Debug, Clone, Copy)]
pub struct Bounded {
    min: i32,
    max: i32,
}

impl Bounded {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

impl GradePolicy for Bounded {
    fn check(&self, grade: i32) -> Result<(), GradeError> {
        if (self.min..=self.max).contains(&grade) {
            Ok(())
        } else {
            Err(GradeError {
                grade,
                min: self.min,
                max: self.max,
            })
        }
    }
}
