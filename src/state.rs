//! Per-session conversation state
//!
//! Each session remembers the most recently mentioned location so follow-up
//! turns need not repeat it. State is keyed by an opaque session id and
//! owned by the bot value — never a process-wide global, so concurrent
//! sessions cannot corrupt each other's context.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::models::Location;

/// Memory of one conversation session
#[derive(Debug, Default, Clone)]
pub struct ConversationState {
    last_location: Option<Location>,
}

impl ConversationState {
    /// The stored location, if any turn has mentioned one
    #[must_use]
    pub fn last_location(&self) -> Option<&Location> {
        self.last_location.as_ref()
    }

    /// Record a freshly resolved location, overwriting any prior value.
    /// This is the only mutation point; state is never cleared.
    pub fn remember(&mut self, location: Location) {
        self.last_location = Some(location);
    }

    /// Pick the location for this turn: freshly resolved input wins,
    /// otherwise the remembered one. A resolved location is stored as a
    /// side effect.
    pub fn effective_location(&mut self, resolved: Option<Location>) -> Option<Location> {
        if let Some(location) = resolved {
            self.remember(location);
        }
        self.last_location.clone()
    }
}

/// Session-keyed store of conversation states
///
/// Lookups create the session on first use. Writes to the same session are
/// last-write-wins; the lock is held only for the state update, never across
/// a fetch.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, ConversationState>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the effective location for one turn of the given session,
    /// updating the session's memory when `resolved` is present
    pub fn effective_location(
        &self,
        session_id: &str,
        resolved: Option<Location>,
    ) -> Option<Location> {
        // A poisoned lock still holds a valid map; a turn must not crash
        let mut sessions = self
            .sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        sessions
            .entry(session_id.to_string())
            .or_default()
            .effective_location(resolved)
    }

    /// Peek at a session's remembered location without mutating anything
    #[must_use]
    pub fn last_location(&self, session_id: &str) -> Option<Location> {
        let sessions = self
            .sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        sessions
            .get(session_id)
            .and_then(|state| state.last_location.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_starts_empty() {
        let state = ConversationState::default();
        assert!(state.last_location().is_none());
    }

    #[test]
    fn test_resolved_location_is_remembered() {
        let mut state = ConversationState::default();
        let effective = state.effective_location(Some(Location::new("paris")));
        assert_eq!(effective, Some(Location::new("paris")));
        assert_eq!(state.last_location(), Some(&Location::new("paris")));
    }

    #[test]
    fn test_followup_reuses_remembered_location() {
        let mut state = ConversationState::default();
        state.effective_location(Some(Location::new("paris")));
        let effective = state.effective_location(None);
        assert_eq!(effective, Some(Location::new("paris")));
    }

    #[test]
    fn test_new_location_overwrites_prior() {
        let mut state = ConversationState::default();
        state.effective_location(Some(Location::new("paris")));
        let effective = state.effective_location(Some(Location::new("oslo")));
        assert_eq!(effective, Some(Location::new("oslo")));
    }

    #[test]
    fn test_no_location_anywhere_is_absent() {
        let mut state = ConversationState::default();
        assert!(state.effective_location(None).is_none());
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = SessionStore::new();
        store.effective_location("alice", Some(Location::new("paris")));
        store.effective_location("bob", Some(Location::new("lagos")));

        assert_eq!(store.last_location("alice"), Some(Location::new("Paris")));
        assert_eq!(store.last_location("bob"), Some(Location::new("Lagos")));
        assert_eq!(store.last_location("carol"), None);
    }
}
