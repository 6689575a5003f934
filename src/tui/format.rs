//! Shared formatting conventions for screens

use chrono::NaiveDate;

use crate::common::constants::dates::DATE_FORMAT;
use crate::core::models::{Artist, Event, EventDetails, Venue};

/// Placeholder shown for a blank field
pub const UNSET: &str = "<unset>";

/// Numbered option line: single-digit indices get a leading space so labels align past 10
pub fn option_label(index: usize, label: &str) -> String {
    if index < 10 {
        format!(" [{}] {}", index, label)
    } else {
        format!("[{}] {}", index, label)
    }
}

/// `mm/dd/yyyy`, always zero padded
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_artist(artist: &Artist) -> String {
    if artist.genre.is_empty() {
        artist.name.clone()
    } else {
        format!("{} ({})", artist.name, artist.genre)
    }
}

pub fn format_venue(venue: &Venue) -> String {
    format!("{} - {}, {}", venue.name, venue.city, venue.state)
}

pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("${:.2}", p),
        None => "TBA".to_string(),
    }
}

/// One-line summary: date, main act, venue, openers
pub fn format_event(event: &Event) -> String {
    let mut line = format!(
        "{} | {} | {}",
        format_date(event.date),
        format_artist(&event.main_act),
        format_venue(&event.venue)
    );
    if !event.openers.is_empty() {
        let openers: Vec<&str> = event.openers.iter().map(|o| o.name.as_str()).collect();
        line.push_str(&format!(" | w/ {}", openers.join(", ")));
    }
    line
}

pub fn format_event_details(details: &EventDetails) -> String {
    format!(
        "{} | {} | {} | {} | {}",
        format_date(details.event.date),
        details.name,
        format_artist(&details.event.main_act),
        format_venue(&details.event.venue),
        format_price(details.price)
    )
}

pub fn format_artists(artists: &[Artist]) -> Vec<String> {
    artists.iter().map(format_artist).collect()
}

pub fn format_venues(venues: &[Venue]) -> Vec<String> {
    venues.iter().map(format_venue).collect()
}

pub fn format_events(events: &[Event]) -> Vec<String> {
    events.iter().map(format_event).collect()
}

pub fn format_event_details_list(details: &[EventDetails]) -> Vec<String> {
    details.iter().map(format_event_details).collect()
}

/// `Label: value`, with blank values shown as [`UNSET`]
pub fn format_field(label: &str, value: &str) -> String {
    if value.trim().is_empty() {
        format!("{}: {}", label, UNSET)
    } else {
        format!("{}: {}", label, value)
    }
}

/// 1-based page label; an empty list still shows one page
pub fn page_label(page: usize, page_count: usize) -> String {
    format!("Page {}/{}", page + 1, page_count.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn sample_event() -> Event {
        Event::new(
            NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
            Venue::new("V", "Atlanta", "GA"),
            Artist::new("X", "rock"),
        )
    }

    #[test_case(1, " [1] Back" ; "single digit padded")]
    #[test_case(9, " [9] Back" ; "last single digit")]
    #[test_case(10, "[10] Back" ; "double digit")]
    fn test_option_label(index: usize, expected: &str) {
        assert_eq!(option_label(index, "Back"), expected);
    }

    #[test]
    fn test_format_date_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 4).unwrap();
        assert_eq!(format_date(date), "03/04/2021");
    }

    #[test]
    fn test_format_event() {
        assert_eq!(format_event(&sample_event()), "01/02/2020 | X (rock) | V - Atlanta, GA");
        let with_openers = sample_event()
            .with_openers(vec![Artist::new("A", "pop"), Artist::new("B", "pop")]);
        assert_eq!(
            format_event(&with_openers),
            "01/02/2020 | X (rock) | V - Atlanta, GA | w/ A, B"
        );
    }

    #[test]
    fn test_format_event_details() {
        let details = EventDetails::new(sample_event(), "X Tour").with_price(45.0);
        assert_eq!(
            format_event_details(&details),
            "01/02/2020 | X Tour | X (rock) | V - Atlanta, GA | $45.00"
        );
        let no_price = EventDetails::new(sample_event(), "X Tour");
        assert!(format_event_details(&no_price).ends_with("| TBA"));
    }

    #[test]
    fn test_format_field_and_page_label() {
        assert_eq!(format_field("Name", ""), "Name: <unset>");
        assert_eq!(format_field("Name", "X"), "Name: X");
        assert_eq!(page_label(0, 3), "Page 1/3");
        assert_eq!(page_label(0, 0), "Page 1/1");
    }
}
