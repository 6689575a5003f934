//! 统一数据模型定义
//!
//! Concerts are stored as [`Event`]s; the upcoming-events feed wraps them in
//! [`EventDetails`] with marketplace metadata.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A performer. Both fields are required before an artist can be saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
    pub genre: String,
}

impl Artist {
    pub fn new(name: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            genre: genre.into(),
        }
    }

    /// Names of the fields that are still blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.genre.trim().is_empty() {
            missing.push("genre");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Where a concert takes place
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    pub city: String,
    /// Two-letter state code, upper-case
    pub state: String,
}

impl Venue {
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            state: state.into(),
        }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.city.trim().is_empty() {
            missing.push("city");
        }
        if self.state.trim().is_empty() {
            missing.push("state");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Whether an event is in the past (attended) or in the future (planned)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Past,
    Future,
}

impl EventType {
    /// Classify a date relative to `today`; today counts as the future
    pub fn of(date: NaiveDate, today: NaiveDate) -> Self {
        if date < today {
            EventType::Past
        } else {
            EventType::Future
        }
    }

    /// Whether an event of this type may carry `date`; today fits both
    pub fn admits(self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            EventType::Past => date <= today,
            EventType::Future => date >= today,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Past => write!(f, "Past"),
            EventType::Future => write!(f, "Future"),
        }
    }
}

/// A concert
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    pub date: NaiveDate,
    pub venue: Venue,
    pub main_act: Artist,
    #[serde(default)]
    pub openers: Vec<Artist>,
    #[serde(default)]
    pub purchased: bool,
}

impl Event {
    pub fn new(date: NaiveDate, venue: Venue, main_act: Artist) -> Self {
        Self {
            date,
            venue,
            main_act,
            openers: Vec::new(),
            purchased: false,
        }
    }

    pub fn with_openers(mut self, openers: Vec<Artist>) -> Self {
        self.openers = openers;
        self
    }

    pub fn with_purchased(mut self, purchased: bool) -> Self {
        self.purchased = purchased;
        self
    }

    /// Describe what still prevents the event from being stored, if anything
    pub fn incomplete_reason(&self) -> Option<String> {
        let mut problems = Vec::new();
        let act = self.main_act.missing_fields();
        if !act.is_empty() {
            problems.push(format!("main act {}", act.join("/")));
        }
        let venue = self.venue.missing_fields();
        if !venue.is_empty() {
            problems.push(format!("venue {}", venue.join("/")));
        }
        if let Some(idx) = self.openers.iter().position(|o| !o.is_complete()) {
            problems.push(format!("opener #{}", idx + 1));
        }
        if problems.is_empty() {
            None
        } else {
            Some(problems.join(", "))
        }
    }

    /// Chronological order, ties broken by main act then venue name
    pub fn chronological(a: &Event, b: &Event) -> Ordering {
        a.date
            .cmp(&b.date)
            .then_with(|| a.main_act.name.cmp(&b.main_act.name))
            .then_with(|| a.venue.name.cmp(&b.venue.name))
    }
}

/// An event as listed by the upcoming-events provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDetails {
    pub event: Event,
    /// Marketplace listing name
    pub name: String,
    #[serde(default)]
    pub genre: String,
    /// Lowest listed ticket price, when the marketplace publishes one
    #[serde(default)]
    pub price: Option<f64>,
}

impl EventDetails {
    pub fn new(event: Event, name: impl Into<String>) -> Self {
        Self {
            event,
            name: name.into(),
            genre: String::new(),
            price: None,
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn chronological(a: &EventDetails, b: &EventDetails) -> Ordering {
        Event::chronological(&a.event, &b.event).then_with(|| a.name.cmp(&b.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(m: u32, d: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_artist_missing_fields() {
        assert_eq!(Artist::default().missing_fields(), vec!["name", "genre"]);
        assert_eq!(Artist::new("X", " ").missing_fields(), vec!["genre"]);
        assert!(Artist::new("X", "rock").is_complete());
    }

    #[test]
    fn test_venue_missing_fields() {
        assert_eq!(
            Venue::new("V", "", "GA").missing_fields(),
            vec!["city"]
        );
        assert!(Venue::new("V", "Atlanta", "GA").is_complete());
    }

    #[test]
    fn test_event_type_of() {
        let today = date(6, 15, 2024);
        assert_eq!(EventType::of(date(6, 14, 2024), today), EventType::Past);
        assert_eq!(EventType::of(today, today), EventType::Future);
        assert_eq!(EventType::of(date(1, 1, 2025), today), EventType::Future);
    }

    #[test]
    fn test_event_type_admits() {
        let today = date(6, 15, 2024);
        assert!(EventType::Past.admits(today, today));
        assert!(EventType::Future.admits(today, today));
        assert!(!EventType::Past.admits(date(6, 16, 2024), today));
        assert!(!EventType::Future.admits(date(6, 14, 2024), today));
    }

    #[test]
    fn test_incomplete_reason() {
        let event = Event::new(date(1, 2, 2020), Venue::default(), Artist::new("X", "rock"));
        assert_eq!(
            event.incomplete_reason().as_deref(),
            Some("venue name/city/state")
        );

        let complete = Event::new(
            date(1, 2, 2020),
            Venue::new("V", "Atlanta", "GA"),
            Artist::new("X", "rock"),
        );
        assert_eq!(complete.incomplete_reason(), None);

        let bad_opener = complete.with_openers(vec![Artist::new("O", "")]);
        assert_eq!(bad_opener.incomplete_reason().as_deref(), Some("opener #1"));
    }

    #[test]
    fn test_chronological_order() {
        let venue = Venue::new("V", "Atlanta", "GA");
        let mut events = vec![
            Event::new(date(3, 1, 2021), venue.clone(), Artist::new("B", "rock")),
            Event::new(date(1, 1, 2021), venue.clone(), Artist::new("C", "rock")),
            Event::new(date(3, 1, 2021), venue, Artist::new("A", "rock")),
        ];
        events.sort_by(Event::chronological);
        let names: Vec<&str> = events.iter().map(|e| e.main_act.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_event_json_defaults() {
        let json = r#"{
            "date": "2020-01-02",
            "venue": {"name": "V", "city": "Atlanta", "state": "GA"},
            "main_act": {"name": "X", "genre": "rock"}
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(event.openers.is_empty());
        assert!(!event.purchased);
    }
}
