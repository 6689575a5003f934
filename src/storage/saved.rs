//! Saved events, kept in memory and mirrored to a JSON file

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::SavedEventStore;
use crate::core::models::{Event, EventType};
use crate::error::{StoreError, StoreResult};

/// A saved event and the type it was saved as
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct SavedRecord {
    #[serde(flatten)]
    event: Event,
    /// Absent in hand-written files; such events are classified by date alone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved_as: Option<EventType>,
}

impl SavedRecord {
    /// Dates other than today decide on their own
    fn event_type(&self, today: NaiveDate) -> EventType {
        match self.saved_as {
            Some(saved_as) if self.event.date == today => saved_as,
            _ => EventType::of(self.event.date, today),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct JsonEventStore {
    events: Vec<SavedRecord>,
    path: Option<PathBuf>,
    /// Fixed "today" for classification; `None` uses the local clock
    today: Option<NaiveDate>,
}

impl JsonEventStore {
    /// Store that never touches the filesystem
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open the store backed by `path`, loading existing events if the file exists
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let events = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            Vec::new()
        };
        info!(path = %path.display(), count = events.len(), "Loaded saved events");
        Ok(Self {
            events,
            path: Some(path),
            today: None,
        })
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn events_of(&self, event_type: EventType) -> Vec<Event> {
        let today = self.today();
        self.events
            .iter()
            .filter(|r| r.event_type(today) == event_type)
            .map(|r| r.event.clone())
            .collect()
    }

    fn persist(&self) -> StoreResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.events)?;
        fs::write(path, content)?;
        debug!(path = %path.display(), count = self.events.len(), "Persisted saved events");
        Ok(())
    }
}

impl SavedEventStore for JsonEventStore {
    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn add_event_as(&mut self, event: Event, event_type: EventType) -> StoreResult<()> {
        if let Some(reason) = event.incomplete_reason() {
            return Err(StoreError::IncompleteEvent(reason));
        }
        if !event_type.admits(event.date, self.today()) {
            return Err(StoreError::DateOutsideType {
                date: event.date,
                event_type,
            });
        }
        if self.events.iter().any(|r| r.event == event) {
            return Err(StoreError::DuplicateEvent);
        }
        self.events.push(SavedRecord {
            event,
            saved_as: Some(event_type),
        });
        if let Err(err) = self.persist() {
            self.events.pop();
            return Err(err);
        }
        Ok(())
    }

    fn delete_event(&mut self, event: &Event) -> StoreResult<()> {
        let idx = self
            .events
            .iter()
            .position(|r| &r.event == event)
            .ok_or(StoreError::EventNotFound)?;
        let removed = self.events.remove(idx);
        if let Err(err) = self.persist() {
            self.events.insert(idx, removed);
            return Err(err);
        }
        Ok(())
    }

    fn get_past_events(&self) -> Vec<Event> {
        self.events_of(EventType::Past)
    }

    fn get_future_events(&self) -> Vec<Event> {
        self.events_of(EventType::Future)
    }

    fn get_all_events(&self) -> Vec<Event> {
        self.events.iter().map(|r| r.event.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Artist, Venue};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn date(m: u32, d: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(name: &str, when: NaiveDate) -> Event {
        Event::new(
            when,
            Venue::new("V", "Atlanta", "GA"),
            Artist::new(name, "rock"),
        )
    }

    #[test]
    fn test_past_and_future_split() {
        let mut store = JsonEventStore::in_memory().with_today(date(6, 1, 2024));
        store.add_event(event("Old", date(1, 2, 2020))).unwrap();
        store.add_event(event("Today", date(6, 1, 2024))).unwrap();
        store.add_event(event("Soon", date(7, 4, 2024))).unwrap();

        let past: Vec<String> = store.get_past_events().into_iter().map(|e| e.main_act.name).collect();
        let future: Vec<String> = store
            .get_future_events()
            .into_iter()
            .map(|e| e.main_act.name)
            .collect();
        assert_eq!(past, vec!["Old"]);
        assert_eq!(future, vec!["Today", "Soon"]);
    }

    #[test]
    fn test_rejects_duplicate_and_incomplete() {
        let mut store = JsonEventStore::in_memory();
        let e = event("X", date(1, 2, 2020));
        store.add_event(e.clone()).unwrap();
        assert!(matches!(store.add_event(e), Err(StoreError::DuplicateEvent)));

        let incomplete = Event::new(date(1, 2, 2020), Venue::default(), Artist::new("X", "rock"));
        assert!(matches!(
            store.add_event(incomplete),
            Err(StoreError::IncompleteEvent(_))
        ));
    }

    #[test]
    fn test_event_dated_today_keeps_its_type() {
        let today = date(6, 1, 2024);
        let mut store = JsonEventStore::in_memory().with_today(today);
        store
            .add_event_as(event("Tonight", today).with_purchased(true), EventType::Past)
            .unwrap();
        store
            .add_event_as(event("Later Tonight", today), EventType::Future)
            .unwrap();

        assert_eq!(
            store.get_past_events(),
            vec![event("Tonight", today).with_purchased(true)]
        );
        assert_eq!(store.get_future_events(), vec![event("Later Tonight", today)]);

        // the next day both are behind us
        let store = store.with_today(date(6, 2, 2024));
        assert_eq!(store.get_past_events().len(), 2);
        assert!(store.get_future_events().is_empty());
    }

    #[test]
    fn test_rejects_date_outside_type() {
        let today = date(6, 1, 2024);
        let mut store = JsonEventStore::in_memory().with_today(today);
        assert!(matches!(
            store.add_event_as(event("Stale", date(5, 31, 2024)), EventType::Future),
            Err(StoreError::DateOutsideType { event_type: EventType::Future, .. })
        ));
        assert!(matches!(
            store.add_event_as(event("Soon", date(6, 2, 2024)), EventType::Past),
            Err(StoreError::DateOutsideType { event_type: EventType::Past, .. })
        ));
        assert!(store.get_all_events().is_empty());
    }

    #[test]
    fn test_saved_type_survives_reopen() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("events.json");
        let today = date(6, 1, 2024);

        let mut store = JsonEventStore::open(&path).unwrap().with_today(today);
        store
            .add_event_as(event("Tonight", today), EventType::Past)
            .unwrap();

        let reopened = JsonEventStore::open(&path).unwrap().with_today(today);
        assert_eq!(reopened.get_past_events(), vec![event("Tonight", today)]);
        assert!(reopened.get_future_events().is_empty());
    }

    #[test]
    fn test_untyped_file_is_classified_by_date() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("events.json");
        let today = date(6, 1, 2024);
        let untyped = serde_json::to_string(&vec![event("Tonight", today)]).unwrap();
        fs::write(&path, untyped).unwrap();

        let store = JsonEventStore::open(&path).unwrap().with_today(today);
        assert!(store.get_past_events().is_empty());
        assert_eq!(store.get_future_events(), vec![event("Tonight", today)]);
    }

    #[test]
    fn test_delete_unknown_event() {
        let mut store = JsonEventStore::in_memory();
        assert!(matches!(
            store.delete_event(&event("X", date(1, 2, 2020))),
            Err(StoreError::EventNotFound)
        ));
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("events.json");

        let mut store = JsonEventStore::open(&path).unwrap();
        store.add_event(event("A", date(1, 2, 2020))).unwrap();
        store.add_event(event("B", date(3, 4, 2021))).unwrap();
        store.delete_event(&event("A", date(1, 2, 2020))).unwrap();

        let reopened = JsonEventStore::open(&path).unwrap();
        assert_eq!(reopened.get_all_events(), vec![event("B", date(3, 4, 2021))]);
    }
}
