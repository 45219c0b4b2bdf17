//! # Gradebook Config
//!
//! Configuration types for the gradebook roster, loaded from environment
//! variables.
//!
//! # Example
//!
//! ```ignore
//! use gradebook_config::RosterConfig;
//!
//! let config = RosterConfig::from_env();
//! assert_eq!(config.reg_no_prefix, "STU");
//! ```

pub mod roster;

// Re-export commonly used types at crate root
pub use roster::RosterConfig;
