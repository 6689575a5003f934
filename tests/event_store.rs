use chrono::NaiveDate;
use gigbook::error::StoreError;
use gigbook::storage::{JsonEventStore, SavedEventStore};
use gigbook::{Artist, Event, Venue};
use tempfile::TempDir;

fn event(y: i32, m: u32, d: u32, act: &str) -> Event {
    Event::new(
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date"),
        Venue::new("Variety Playhouse", "Atlanta", "GA"),
        Artist::new(act, "indie"),
    )
    .with_openers(vec![Artist::new("Opener", "folk")])
}

#[test]
fn events_survive_reopening() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("nested").join("events.json");
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date");

    let mut store = JsonEventStore::open(&path).expect("open").with_today(today);
    store.add_event(event(2020, 1, 2, "Past")).expect("add past");
    store.add_event(event(2030, 1, 2, "Future")).expect("add future");
    store.add_event(event(2024, 6, 15, "Tonight")).expect("add today");
    assert!(path.exists());

    let reopened = JsonEventStore::open(&path).expect("reopen").with_today(today);
    assert_eq!(reopened.get_past_events().len(), 1);
    // today's show counts as upcoming
    assert_eq!(reopened.get_future_events().len(), 2);
    assert_eq!(reopened.get_all_events().len(), 3);
    assert_eq!(reopened.get_past_events()[0].openers.len(), 1);
}

#[test]
fn deleting_is_persisted() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("events.json");

    let mut store = JsonEventStore::open(&path).expect("open");
    let past = event(2020, 1, 2, "Past");
    store.add_event(past.clone()).expect("add");
    store.delete_event(&past).expect("delete");

    let reopened = JsonEventStore::open(&path).expect("reopen");
    assert!(reopened.get_all_events().is_empty());
    assert!(matches!(
        JsonEventStore::open(&path)
            .expect("reopen")
            .delete_event(&past),
        Err(StoreError::EventNotFound)
    ));
}

#[test]
fn corrupt_file_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("events.json");
    std::fs::write(&path, "{ not json").expect("write");
    assert!(matches!(
        JsonEventStore::open(&path),
        Err(StoreError::Serde(_))
    ));
}
