//! Event editor
//!
//! Builds a new past or future event. The main act, the venue and each new
//! opener are edited in the artist/venue editors through shared slots; the
//! opener selector hands back the opener to remove.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use tracing::{info, warn};

use super::{AcceptsContext, DisplaysData, Screen, ScreenId, Transition};
use crate::common::constants::limits::MAX_OPENERS;
use crate::common::messages::text::{NO_OPENERS, OPENER_LIMIT, PURCHASE_LOCKED};
use crate::common::messages::{actions::CANCEL, failure, missing_fields, Operation};
use crate::core::models::{Artist, Event, EventType, Venue};
use crate::error::NavResult;
use crate::storage::{SavedEventStore, Shared};
use crate::tui::context::{ContextValue, ScreenContext};
use crate::tui::format::{format_artist, format_date, format_field, format_venue};
use crate::tui::io::Console;
use crate::tui::validators;

const TITLE: &str = "Event Editor";

/// Screens the editor hands work to
#[derive(Debug, Clone, Copy)]
pub struct EventEditorLinks {
    pub artist_editor: ScreenId,
    pub venue_editor: ScreenId,
    pub opener_selector: ScreenId,
}

pub struct EventEditorScreen {
    id: ScreenId,
    links: EventEditorLinks,
    store: Shared<dyn SavedEventStore>,
    event_type: EventType,
    main_act: Rc<RefCell<Artist>>,
    venue: Rc<RefCell<Venue>>,
    /// Slot handed to the artist editor by "Add Opener", collected on return
    pending_opener: Option<Rc<RefCell<Artist>>>,
    openers: Vec<Artist>,
    date: Option<NaiveDate>,
    purchased: bool,
}

impl EventEditorScreen {
    pub fn new(id: ScreenId, links: EventEditorLinks, store: Shared<dyn SavedEventStore>) -> Self {
        Self {
            id,
            links,
            store,
            event_type: EventType::Future,
            main_act: Rc::default(),
            venue: Rc::default(),
            pending_opener: None,
            openers: Vec::new(),
            date: None,
            purchased: false,
        }
    }

    fn start(&mut self, event_type: EventType) {
        self.event_type = event_type;
        self.main_act = Rc::default();
        self.venue = Rc::default();
        self.pending_opener = None;
        self.openers.clear();
        self.date = None;
        self.purchased = false;
    }

    pub fn openers(&self) -> &[Artist] {
        &self.openers
    }

    /// Dates are checked against the store's day so a saved date always fits
    fn set_date(&mut self, console: &mut dyn Console) -> NavResult<()> {
        let today = self.store.borrow().today();
        let input = match self.event_type {
            EventType::Past => console.prompt_text(
                "Enter the event date (mm/dd/yyyy), today or earlier:",
                &|input: &str| validators::past_date_as_of(input, today),
            )?,
            EventType::Future => console.prompt_text(
                "Enter the event date (mm/dd/yyyy), today or later:",
                &|input: &str| validators::future_date_as_of(input, today),
            )?,
        };
        self.date = validators::parse_date(&input);
        Ok(())
    }

    fn add_opener(&mut self, console: &mut dyn Console) -> Transition {
        if self.openers.len() >= MAX_OPENERS {
            console.display_error(OPENER_LIMIT);
            return Transition::stay();
        }
        let slot: Rc<RefCell<Artist>> = Rc::default();
        self.pending_opener = Some(slot.clone());
        Transition::to_with(
            self.links.artist_editor,
            ScreenContext::new(self.id, vec![slot.into_prop()]),
        )
    }

    fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.main_act.borrow().is_complete() {
            missing.push("main act");
        }
        if !self.venue.borrow().is_complete() {
            missing.push("venue");
        }
        if self.date.is_none() {
            missing.push("date");
        }
        missing
    }

    fn save(&mut self, console: &mut dyn Console) -> Transition {
        let missing = self.missing();
        let date = match self.date {
            Some(date) if missing.is_empty() => date,
            _ => {
                console.display_error(&missing_fields("Event", &missing));
                return Transition::stay();
            }
        };

        let purchased = match self.event_type {
            EventType::Past => true,
            EventType::Future => self.purchased,
        };
        let event = Event::new(date, self.venue.borrow().clone(), self.main_act.borrow().clone())
            .with_openers(self.openers.clone())
            .with_purchased(purchased);

        let result = self.store.borrow_mut().add_event_as(event, self.event_type);
        match result {
            Ok(()) => {
                info!(date = %format_date(date), event_type = %self.event_type, "Event saved");
                Transition::back()
            }
            Err(err) => {
                warn!(error = %err, "Saving event failed");
                console.display_error(&failure(Operation::SaveEvent, &err));
                Transition::stay()
            }
        }
    }
}

impl Screen for EventEditorScreen {
    fn title(&self) -> &str {
        TITLE
    }

    fn actions(&self) -> Vec<String> {
        vec![
            "Set Main Act".to_string(),
            "Set Venue".to_string(),
            "Set Date".to_string(),
            "Add Opener".to_string(),
            "Remove Opener".to_string(),
            "Toggle Purchased".to_string(),
            "Save Event".to_string(),
            CANCEL.to_string(),
        ]
    }

    fn advance(&mut self, choice: usize, console: &mut dyn Console) -> NavResult<Transition> {
        let transition = match choice {
            1 => Transition::to_with(
                self.links.artist_editor,
                ScreenContext::new(self.id, vec![self.main_act.clone().into_prop()]),
            ),
            2 => Transition::to_with(
                self.links.venue_editor,
                ScreenContext::new(self.id, vec![self.venue.clone().into_prop()]),
            ),
            3 => {
                self.set_date(console)?;
                Transition::stay()
            }
            4 => self.add_opener(console),
            5 if self.openers.is_empty() => {
                console.display_error(NO_OPENERS);
                Transition::stay()
            }
            5 => Transition::to_with(
                self.links.opener_selector,
                ScreenContext::new(self.id, vec![self.openers.clone().into_prop()]),
            ),
            6 => {
                match self.event_type {
                    EventType::Past => console.display_error(PURCHASE_LOCKED),
                    EventType::Future => self.purchased = !self.purchased,
                }
                Transition::stay()
            }
            7 => self.save(console),
            _ => Transition::back(),
        };
        Ok(transition)
    }

    fn data_view(&mut self) -> Option<&mut dyn DisplaysData> {
        Some(self)
    }

    fn context_sink(&mut self) -> Option<&mut dyn AcceptsContext> {
        Some(self)
    }
}

impl DisplaysData for EventEditorScreen {
    fn display_data(&mut self, console: &mut dyn Console) {
        let main_act = format_artist(&self.main_act.borrow());
        let venue = {
            let venue = self.venue.borrow();
            if venue.is_complete() {
                format_venue(&venue)
            } else {
                String::new()
            }
        };
        let date = self.date.map(format_date).unwrap_or_default();
        let openers: Vec<&str> = self.openers.iter().map(|o| o.name.as_str()).collect();
        let purchased = match self.event_type {
            EventType::Past => true,
            EventType::Future => self.purchased,
        };

        console.display_line(&format_field("Type", &self.event_type.to_string()));
        console.display_line(&format_field("Main Act", &main_act));
        console.display_line(&format_field("Venue", &venue));
        console.display_line(&format_field("Date", &date));
        console.display_line(&format_field("Openers", &openers.join(", ")));
        console.display_line(&format_field(
            "Purchased",
            if purchased { "yes" } else { "no" },
        ));
    }
}

impl AcceptsContext for EventEditorScreen {
    fn accept_context(&mut self, context: ScreenContext) -> NavResult<()> {
        if context.is_selector_result() {
            let removed: Artist = context.prop(0, TITLE)?;
            if let Some(idx) = self.openers.iter().position(|o| *o == removed) {
                self.openers.remove(idx);
            }
        } else if !context.is_empty() {
            let event_type: EventType = context.prop(0, TITLE)?;
            self.start(event_type);
        } else if let Some(slot) = self.pending_opener.take() {
            let opener = slot.borrow().clone();
            if opener.is_complete() {
                self.openers.push(opener);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{shared, JsonEventStore};
    use crate::tui::io::ScriptedConsole;
    use crate::tui::screens::{Next, ScreenRegistry};
    use pretty_assertions::assert_eq;

    struct Fixture {
        editor: EventEditorScreen,
        links: EventEditorLinks,
        store: Shared<JsonEventStore>,
        parent: ScreenId,
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn fixture(event_type: EventType) -> Fixture {
        let mut registry = ScreenRegistry::new();
        let id = registry.reserve();
        let parent = registry.reserve();
        let links = EventEditorLinks {
            artist_editor: registry.reserve(),
            venue_editor: registry.reserve(),
            opener_selector: registry.reserve(),
        };
        let store = shared(JsonEventStore::in_memory().with_today(today()));
        let mut editor = EventEditorScreen::new(id, links, store.clone());
        editor
            .accept_context(ScreenContext::new(parent, vec![event_type.into_prop()]))
            .unwrap();
        Fixture {
            editor,
            links,
            store,
            parent,
        }
    }

    /// Fill the slots the way the child editors would
    fn populate(f: &mut Fixture, console: &mut ScriptedConsole, date: &str) {
        let t = f.editor.advance(1, console).unwrap();
        assert_eq!(t.next, Next::To(f.links.artist_editor));
        let slot: Rc<RefCell<Artist>> = t.context.unwrap().prop(0, "test").unwrap();
        *slot.borrow_mut() = Artist::new("X", "rock");
        f.editor
            .accept_context(ScreenContext::returning_to(f.links.artist_editor))
            .unwrap();

        let t = f.editor.advance(2, console).unwrap();
        let slot: Rc<RefCell<Venue>> = t.context.unwrap().prop(0, "test").unwrap();
        *slot.borrow_mut() = Venue::new("V", "Atlanta", "GA");
        f.editor
            .accept_context(ScreenContext::returning_to(f.links.venue_editor))
            .unwrap();

        console.push_input(date);
        f.editor.advance(3, console).unwrap();
    }

    fn add_opener(f: &mut Fixture, name: &str) {
        let t = f.editor.advance(4, &mut ScriptedConsole::default()).unwrap();
        let slot: Rc<RefCell<Artist>> = t.context.unwrap().prop(0, "test").unwrap();
        *slot.borrow_mut() = Artist::new(name, "punk");
        f.editor
            .accept_context(ScreenContext::returning_to(f.links.artist_editor))
            .unwrap();
    }

    #[test]
    fn test_past_save_forces_purchased() {
        let mut f = fixture(EventType::Past);
        let mut console = ScriptedConsole::default();
        populate(&mut f, &mut console, "01/02/2020");

        let t = f.editor.advance(7, &mut console).unwrap();
        assert_eq!(t.next, Next::Back);
        let saved = f.store.borrow().get_past_events();
        assert_eq!(saved.len(), 1);
        assert!(saved[0].purchased);
        assert_eq!(saved[0].main_act, Artist::new("X", "rock"));
        assert_eq!(saved[0].venue, Venue::new("V", "Atlanta", "GA"));
    }

    #[test]
    fn test_future_save_keeps_purchased_flag() {
        let mut f = fixture(EventType::Future);
        let mut console = ScriptedConsole::default();
        populate(&mut f, &mut console, "01/02/2099");
        f.editor.advance(7, &mut console).unwrap();
        assert!(!f.store.borrow().get_future_events()[0].purchased);

        let mut f = fixture(EventType::Future);
        populate(&mut f, &mut console, "01/02/2099");
        f.editor.advance(6, &mut console).unwrap();
        f.editor.advance(7, &mut console).unwrap();
        assert!(f.store.borrow().get_future_events()[0].purchased);
    }

    #[test]
    fn test_past_event_cannot_toggle_purchased() {
        let mut f = fixture(EventType::Past);
        let mut console = ScriptedConsole::default();
        f.editor.advance(6, &mut console).unwrap();
        assert!(console.contains(PURCHASE_LOCKED));
    }

    #[test]
    fn test_date_validator_follows_event_type() {
        let mut f = fixture(EventType::Past);
        let mut console = ScriptedConsole::new(["01/02/2099", "01/02/2020"]);
        f.editor.advance(3, &mut console).unwrap();
        assert!(console.contains("Date must be today or in the past"));
        assert_eq!(f.editor.date, NaiveDate::from_ymd_opt(2020, 1, 2));
    }

    #[test]
    fn test_dates_are_checked_against_the_store_day() {
        let mut f = fixture(EventType::Future);
        let mut console = ScriptedConsole::new(["06/14/2024", "06/15/2024"]);
        f.editor.advance(3, &mut console).unwrap();
        assert_eq!(console.count("Date must be today or in the future"), 1);
        assert_eq!(f.editor.date, Some(today()));
    }

    #[test]
    fn test_past_event_dated_today_is_saved_as_past() {
        let mut f = fixture(EventType::Past);
        let mut console = ScriptedConsole::default();
        populate(&mut f, &mut console, "06/15/2024");

        let t = f.editor.advance(7, &mut console).unwrap();
        assert_eq!(t.next, Next::Back);
        let store = f.store.borrow();
        assert_eq!(store.get_past_events().len(), 1);
        assert!(store.get_past_events()[0].purchased);
        assert!(store.get_future_events().is_empty());
    }

    #[test]
    fn test_future_event_dated_today_is_saved_as_future() {
        let mut f = fixture(EventType::Future);
        let mut console = ScriptedConsole::default();
        populate(&mut f, &mut console, "06/15/2024");
        f.editor.advance(7, &mut console).unwrap();

        let store = f.store.borrow();
        assert_eq!(store.get_future_events().len(), 1);
        assert!(store.get_past_events().is_empty());
    }

    #[test]
    fn test_incomplete_event_is_refused() {
        let mut f = fixture(EventType::Past);
        let mut console = ScriptedConsole::default();
        let t = f.editor.advance(7, &mut console).unwrap();
        assert_eq!(t.next, Next::Stay);
        assert!(console.contains("Event is missing: main act, venue, date"));
        assert!(f.store.borrow().get_all_events().is_empty());
    }

    #[test]
    fn test_duplicate_save_reports_failure_and_stays() {
        let mut f = fixture(EventType::Past);
        let mut console = ScriptedConsole::default();
        populate(&mut f, &mut console, "01/02/2020");
        f.editor.advance(7, &mut console).unwrap();

        let t = f.editor.advance(7, &mut console).unwrap();
        assert_eq!(t.next, Next::Stay);
        assert!(console.transcript().contains("Failed to save event:"));
    }

    #[test]
    fn test_opener_limit() {
        let mut f = fixture(EventType::Future);
        for i in 0..MAX_OPENERS {
            add_opener(&mut f, &format!("Opener {}", i));
        }
        assert_eq!(f.editor.openers().len(), MAX_OPENERS);

        let mut console = ScriptedConsole::default();
        let t = f.editor.advance(4, &mut console).unwrap();
        assert_eq!(t.next, Next::Stay);
        assert!(console.contains(OPENER_LIMIT));
        assert_eq!(f.editor.openers().len(), MAX_OPENERS);
    }

    #[test]
    fn test_cancelled_opener_is_dropped() {
        let mut f = fixture(EventType::Future);
        f.editor.advance(4, &mut ScriptedConsole::default()).unwrap();
        f.editor
            .accept_context(ScreenContext::returning_to(f.links.artist_editor))
            .unwrap();
        assert!(f.editor.openers().is_empty());
    }

    #[test]
    fn test_remove_opener_through_selector() {
        let mut f = fixture(EventType::Future);
        add_opener(&mut f, "A");
        add_opener(&mut f, "B");

        let t = f.editor.advance(5, &mut ScriptedConsole::default()).unwrap();
        assert_eq!(t.next, Next::To(f.links.opener_selector));
        assert_eq!(t.context.unwrap().prop::<Vec<Artist>>(0, "test").unwrap().len(), 2);

        f.editor
            .accept_context(ScreenContext::selector_result(
                f.parent,
                Artist::new("A", "punk").into_prop(),
            ))
            .unwrap();
        assert_eq!(f.editor.openers(), &[Artist::new("B", "punk")]);
    }

    #[test]
    fn test_remove_without_openers() {
        let mut f = fixture(EventType::Future);
        let mut console = ScriptedConsole::default();
        let t = f.editor.advance(5, &mut console).unwrap();
        assert_eq!(t.next, Next::Stay);
        assert!(console.contains(NO_OPENERS));
    }

    #[test]
    fn test_new_visit_starts_fresh() {
        let mut f = fixture(EventType::Past);
        let mut console = ScriptedConsole::default();
        populate(&mut f, &mut console, "01/02/2020");
        f.editor
            .accept_context(ScreenContext::new(f.parent, vec![EventType::Future.into_prop()]))
            .unwrap();

        console.clear_output();
        f.editor.display_data(&mut console);
        assert_eq!(
            console.lines(),
            &[
                "Type: Future",
                "Main Act: <unset>",
                "Venue: <unset>",
                "Date: <unset>",
                "Openers: <unset>",
                "Purchased: no",
            ]
        );
    }
}
