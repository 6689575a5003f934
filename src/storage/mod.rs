//! 存储与数据源
//!
//! The screens only see the traits in this module. Implementations:
//! - [`JsonEventStore`]: saved events, optionally persisted to a JSON file
//! - [`UpcomingEventCache`]: in-memory cache in front of an [`EventProvider`]
//! - [`FuzzySearch`]: fuzzy name matching over both stores

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;

use crate::core::models::{Artist, Event, EventDetails, EventType, Venue};
use crate::error::{ProviderResult, StoreResult};

pub mod provider;
pub mod saved;
pub mod search;
pub mod upcoming;

pub use provider::{EventProvider, JsonFeedProvider, StaticProvider};
pub use saved::JsonEventStore;
pub use search::FuzzySearch;
pub use upcoming::UpcomingEventCache;

/// Single-threaded shared handle; the UI loop is the only user
pub type Shared<T> = Rc<RefCell<T>>;

pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Concerts the user attended or plans to attend
pub trait SavedEventStore {
    /// The day past and future are split on
    fn today(&self) -> NaiveDate;

    /// Save `event` as a past or future event.
    ///
    /// Past events may not be dated after today, future events not before it.
    /// An event dated today stays under the type it was saved as.
    fn add_event_as(&mut self, event: Event, event_type: EventType) -> StoreResult<()>;

    /// Save `event` under the type its date implies
    fn add_event(&mut self, event: Event) -> StoreResult<()> {
        let event_type = EventType::of(event.date, self.today());
        self.add_event_as(event, event_type)
    }

    fn delete_event(&mut self, event: &Event) -> StoreResult<()>;

    /// Events dated before today, plus today's events saved as past
    fn get_past_events(&self) -> Vec<Event>;

    /// Events dated after today, plus today's events saved as future
    fn get_future_events(&self) -> Vec<Event>;

    fn get_all_events(&self) -> Vec<Event> {
        let mut events = self.get_past_events();
        events.extend(self.get_future_events());
        events
    }
}

/// Upcoming concerts in a city, as fetched from the provider
pub trait UpcomingEventStore {
    /// Cached events for the location; empty until the location has been reloaded
    fn get_upcoming_events(&self, city: &str, state: &str) -> Vec<EventDetails>;

    /// Fetch fresh events for the location from the provider
    fn reload_upcoming_events(&mut self, city: &str, state: &str) -> ProviderResult<()>;

    /// Every cached event across all locations
    fn all_cached_events(&self) -> Vec<EventDetails>;
}

/// Fuzzy lookups used by the editors and the discovery screen.
///
/// `max_count` applies to the single call only.
pub trait Search {
    fn fuzzy_artist_matches_by_name(&self, name: &str, max_count: Option<usize>) -> Vec<Artist>;

    fn fuzzy_venue_matches_by_name(&self, name: &str, max_count: Option<usize>) -> Vec<Venue>;

    fn fuzzy_event_details_matches_by_artist(
        &self,
        name: &str,
        city: &str,
        state: &str,
        max_count: Option<usize>,
    ) -> Vec<EventDetails>;

    fn fuzzy_event_details_matches_by_venue(
        &self,
        name: &str,
        city: &str,
        state: &str,
        max_count: Option<usize>,
    ) -> Vec<EventDetails>;
}
