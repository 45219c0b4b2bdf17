use std::env;

#[derive(Clone, Debug)]
pub struct RosterConfig {
    /// Prefix for generated registration numbers.
    pub reg_no_prefix: String,
    /// Initial sort direction by grade.
    pub sort_ascending: bool,
    /// Buffer size of the roster event channel.
    pub event_capacity: usize,
}

impl RosterConfig {
    pub fn from_env() -> Self {
        Self {
            reg_no_prefix: env::var("REG_NO_PREFIX").unwrap_or_else(|_| "STU".to_string()),
            sort_ascending: env::var("SORT_ASCENDING")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
            event_capacity: env::var("ROSTER_EVENT_CAPACITY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(64),
        }
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            reg_no_prefix: "STU".to_string(),
            sort_ascending: true,
            event_capacity: 64,
        }
    }
}
