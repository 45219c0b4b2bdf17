//! Roster change notifications.
//!
//! The source system exposed the roster as reactively-observed view-model
//! state; here that becomes an explicit broadcast channel. Every mutation
//! publishes one event carrying the affected id and the freshly recomputed
//! average, enough for a subscriber to decide to re-read the roster.

use gradebook_models::StudentId;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RosterEvent {
    StudentAdded {
        id: StudentId,
        average_grade: f64,
    },
    StudentUpdated {
        id: StudentId,
        average_grade: f64,
    },
    StudentRemoved {
        id: StudentId,
        average_grade: f64,
    },
    SortOrderChanged {
        ascending: bool,
    },
}
