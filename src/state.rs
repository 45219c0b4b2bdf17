use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use gradebook_config::RosterConfig;
use gradebook_core::grade::{GradePolicy, Unbounded};
use gradebook_core::regno::{RandomRegNo, RegNoGenerator};
use tokio::sync::broadcast;

use crate::events::RosterEvent;
use crate::roster::Roster;

/// Shared application state.
///
/// The roster sits behind a single mutex: add, edit, and delete each
/// read-then-write the derived average and the list order, so every mutating
/// operation must run as one uninterrupted unit of work. Cloning the state
/// clones handles, not the roster.
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<Mutex<Roster>>,
    pub config: RosterConfig,
    pub reg_no_gen: Arc<dyn RegNoGenerator + Send + Sync>,
    pub grade_policy: Arc<dyn GradePolicy + Send + Sync>,
    pub events: broadcast::Sender<RosterEvent>,
}

impl AppState {
    pub fn with_config(config: RosterConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity);
        Self {
            roster: Arc::new(Mutex::new(Roster::new(config.sort_ascending))),
            reg_no_gen: Arc::new(RandomRegNo::new(config.reg_no_prefix.clone())),
            grade_policy: Arc::new(Unbounded),
            config,
            events,
        }
    }

    /// Acquire the roster lock.
    ///
    /// A poisoned lock is recovered rather than propagated: roster operations
    /// do not leave the collection half-mutated across a panic boundary.
    pub fn lock_roster(&self) -> MutexGuard<'_, Roster> {
        self.roster.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Subscribe to roster change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<RosterEvent> {
        self.events.subscribe()
    }

    /// Publish a change notification. Dropped silently when nobody listens.
    pub fn publish(&self, event: RosterEvent) {
        let _ = self.events.send(event);
    }
}

pub fn init_app_state() -> AppState {
    AppState::with_config(RosterConfig::from_env())
}
