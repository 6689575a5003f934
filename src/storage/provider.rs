//! Upcoming event providers
//!
//! The discovery screen never talks to a provider directly; it goes through
//! the [`UpcomingEventCache`](super::UpcomingEventCache).

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::core::models::EventDetails;
use crate::error::{ProviderError, ProviderResult};

/// Source of upcoming concerts for a location
pub trait EventProvider {
    fn fetch_events(&self, city: &str, state: &str) -> ProviderResult<Vec<EventDetails>>;
}

fn check_location(city: &str, state: &str) -> ProviderResult<()> {
    if city.trim().is_empty() || state.trim().len() != 2 {
        return Err(ProviderError::InvalidLocation {
            city: city.to_string(),
            state: state.to_string(),
        });
    }
    Ok(())
}

fn in_location(details: &EventDetails, city: &str, state: &str) -> bool {
    details.event.venue.city.eq_ignore_ascii_case(city.trim())
        && details.event.venue.state.eq_ignore_ascii_case(state.trim())
}

/// Reads a JSON array of [`EventDetails`] from a local feed file
#[derive(Debug, Clone)]
pub struct JsonFeedProvider {
    path: PathBuf,
}

impl JsonFeedProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EventProvider for JsonFeedProvider {
    fn fetch_events(&self, city: &str, state: &str) -> ProviderResult<Vec<EventDetails>> {
        check_location(city, state)?;
        if !self.path.exists() {
            return Err(ProviderError::FeedUnavailable(format!(
                "{} does not exist",
                self.path.display()
            )));
        }
        let content = fs::read_to_string(&self.path)?;
        let all: Vec<EventDetails> = serde_json::from_str(&content)?;
        let events: Vec<EventDetails> = all
            .into_iter()
            .filter(|d| in_location(d, city, state))
            .collect();
        debug!(city, state, count = events.len(), "Fetched events from feed");
        Ok(events)
    }
}

/// Provider over a fixed list, used when no feed is configured
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    events: Vec<EventDetails>,
}

impl StaticProvider {
    pub fn new(events: Vec<EventDetails>) -> Self {
        Self { events }
    }
}

impl EventProvider for StaticProvider {
    fn fetch_events(&self, city: &str, state: &str) -> ProviderResult<Vec<EventDetails>> {
        check_location(city, state)?;
        Ok(self
            .events
            .iter()
            .filter(|d| in_location(d, city, state))
            .cloned()
            .collect())
    }
}
