//! Turn pipeline
//!
//! Orchestrates one user message into one reply: intent detection and
//! location resolution run over the raw text, session state picks the
//! effective location, the provider is queried when one exists, and the
//! composer renders the reply. A turn never fails; every error degrades to
//! a fixed safe message.

use tracing::{debug, info};

use crate::composer;
use crate::intent::{self, Intent};
use crate::resolver::LocationResolver;
use crate::state::SessionStore;
use crate::weather::WeatherProvider;

/// The conversational core, shared across sessions
///
/// Resolver and provider sit behind traits so front ends and tests can
/// swap them; session memory lives in the bot value, keyed per session.
pub struct WeatherBot {
    resolver: Box<dyn LocationResolver>,
    provider: Box<dyn WeatherProvider>,
    sessions: SessionStore,
}

impl WeatherBot {
    #[must_use]
    pub fn new(resolver: Box<dyn LocationResolver>, provider: Box<dyn WeatherProvider>) -> Self {
        Self {
            resolver,
            provider,
            sessions: SessionStore::new(),
        }
    }

    /// Process one user message and produce the reply for it
    ///
    /// The provider call is the only await point, bounded by the client
    /// timeout. No fetch happens without an effective location.
    pub async fn handle_turn(&self, session_id: &str, text: &str) -> String {
        let intents = intent::classify(text);
        debug!("Session {}: intents {:?}", session_id, intents);

        // Exit short-circuits before resolution and never touches state
        if intents.contains(&Intent::Exit) {
            return composer::GOODBYE.to_string();
        }

        let resolved = self.resolver.resolve(text);
        let new_location_this_turn = resolved.is_some();
        let effective = self.sessions.effective_location(session_id, resolved);

        let fetch = match &effective {
            Some(location) => {
                info!("Session {}: looking up weather for {}", session_id, location);
                Some(self.provider.current(location).await)
            }
            None => {
                debug!("Session {}: no effective location", session_id);
                None
            }
        };

        composer::compose(
            &intents,
            fetch.as_ref().map(|outcome| outcome.as_ref()),
            new_location_this_turn,
        )
    }
}
