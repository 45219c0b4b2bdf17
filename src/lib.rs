//! # Gradebook
//!
//! An in-memory student roster with a derived average grade and change
//! notifications. The roster supports adding, editing, and deleting student
//! records, keeps the list sorted by grade in a toggleable direction, and
//! recomputes the class average after every mutation.
//!
//! State lives only in process memory: there is no persistence, no multi-user
//! story, and no transport. A presentation layer (form UI, HTTP handler,
//! whatever) is expected to sit in front of [`modules::students::service`],
//! render the roster snapshot after each call, and listen on the event
//! channel for changes.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── gradebook-core/      # Errors, reg-no generators, grade policies
//! ├── gradebook-config/    # Environment-driven configuration
//! └── gradebook-models/    # Student entity, DTOs, form parsing
//! src/
//! ├── events.rs            # Roster change notifications
//! ├── logging.rs           # Console logging setup
//! ├── modules/
//! │   └── students/        # Student service (model re-exports + operations)
//! ├── roster.rs            # The record manager itself
//! ├── state.rs             # Shared application state
//! └── validator.rs         # DTO validation helper
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use gradebook::modules::students::service::StudentService;
//! use gradebook::state::init_app_state;
//! use gradebook_models::students::StudentForm;
//!
//! let state = init_app_state();
//! let mut changes = state.subscribe();
//!
//! let form = StudentForm {
//!     name: "Alice".into(),
//!     gender: "Female".into(),
//!     grade: "80".into(),
//!     phone: "111".into(),
//!     email: "a@x.com".into(),
//! };
//! let dto = form.parse()?;
//! let alice = StudentService::create_student(&state, dto)?;
//!
//! assert_eq!(StudentService::average_grade(&state), 80.0);
//! ```

pub mod events;
pub mod logging;
pub mod modules;
pub mod roster;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use gradebook_config;
pub use gradebook_core;
pub use gradebook_models;
