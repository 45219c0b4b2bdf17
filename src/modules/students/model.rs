//! Student data models and DTOs.
//!
//! This module re-exports student models from the `gradebook-models` crate
//! and provides any service-specific types.

// Re-export all student models from the shared crate
pub use gradebook_models::ids::StudentId;
pub use gradebook_models::students::*;
