//! In-memory cache of upcoming events keyed by location

use std::collections::HashMap;

use tracing::{info, warn};

use super::{EventProvider, UpcomingEventStore};
use crate::core::models::EventDetails;
use crate::error::ProviderResult;

pub struct UpcomingEventCache<P: EventProvider> {
    provider: P,
    entries: HashMap<(String, String), Vec<EventDetails>>,
}

impl<P: EventProvider> UpcomingEventCache<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            entries: HashMap::new(),
        }
    }

    fn key(city: &str, state: &str) -> (String, String) {
        (city.trim().to_lowercase(), state.trim().to_uppercase())
    }
}

impl<P: EventProvider> UpcomingEventStore for UpcomingEventCache<P> {
    fn get_upcoming_events(&self, city: &str, state: &str) -> Vec<EventDetails> {
        self.entries
            .get(&Self::key(city, state))
            .cloned()
            .unwrap_or_default()
    }

    fn reload_upcoming_events(&mut self, city: &str, state: &str) -> ProviderResult<()> {
        match self.provider.fetch_events(city, state) {
            Ok(events) => {
                info!(city, state, count = events.len(), "Reloaded upcoming events");
                self.entries.insert(Self::key(city, state), events);
                Ok(())
            }
            Err(err) => {
                warn!(city, state, error = %err, "Keeping previous upcoming events");
                Err(err)
            }
        }
    }

    fn all_cached_events(&self) -> Vec<EventDetails> {
        let mut keys: Vec<&(String, String)> = self.entries.keys().collect();
        keys.sort();
        keys.into_iter()
            .flat_map(|k| self.entries[k].iter().cloned())
            .collect()
    }
}
