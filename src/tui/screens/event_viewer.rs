//! Saved events viewer, one instance per event type

use tracing::{debug, info, warn};

use super::{AcceptsContext, DisplaysData, Refreshes, Screen, ScreenId, Transition};
use crate::common::messages::actions::BACK;
use crate::common::messages::text::NO_DATA;
use crate::common::messages::{failure, Operation};
use crate::core::models::{Event, EventType};
use crate::error::NavResult;
use crate::storage::{SavedEventStore, Shared};
use crate::tui::context::{ContextValue, ScreenContext};
use crate::tui::format::format_event;
use crate::tui::io::Console;
use crate::tui::pagination::{Paginator, PAGE_ACTIONS};

#[derive(Debug, Clone, Copy)]
pub struct EventViewerLinks {
    pub editor: ScreenId,
    pub delete_selector: ScreenId,
}

pub struct EventViewerScreen {
    id: ScreenId,
    title: String,
    event_type: EventType,
    links: EventViewerLinks,
    store: Shared<dyn SavedEventStore>,
    events: Paginator<Event>,
    /// Chosen in the delete selector, removed on the next refresh
    pending_delete: Option<Event>,
}

impl EventViewerScreen {
    pub fn new(
        id: ScreenId,
        event_type: EventType,
        links: EventViewerLinks,
        store: Shared<dyn SavedEventStore>,
    ) -> Self {
        Self {
            id,
            title: format!("{} Events", event_type),
            event_type,
            links,
            store,
            events: Paginator::new(Event::chronological),
            pending_delete: None,
        }
    }

    pub fn events(&self) -> &Paginator<Event> {
        &self.events
    }

    fn load(&self) -> Vec<Event> {
        let store = self.store.borrow();
        match self.event_type {
            EventType::Past => store.get_past_events(),
            EventType::Future => store.get_future_events(),
        }
    }
}

impl Screen for EventViewerScreen {
    fn title(&self) -> &str {
        &self.title
    }

    fn actions(&self) -> Vec<String> {
        let mut actions = self.events.actions();
        actions.extend([
            "Add Event".to_string(),
            "Delete Event".to_string(),
            BACK.to_string(),
        ]);
        actions
    }

    fn advance(&mut self, choice: usize, console: &mut dyn Console) -> NavResult<Transition> {
        if choice <= PAGE_ACTIONS {
            self.events.handle(choice, console)?;
            return Ok(Transition::stay());
        }
        match choice - PAGE_ACTIONS {
            1 => Ok(Transition::to_with(
                self.links.editor,
                ScreenContext::new(self.id, vec![self.event_type.into_prop()]),
            )),
            2 if self.events.is_empty() => {
                console.display_line(NO_DATA);
                Ok(Transition::stay())
            }
            2 => Ok(Transition::to_with(
                self.links.delete_selector,
                ScreenContext::new(self.id, vec![self.events.current_page().to_vec().into_prop()]),
            )),
            _ => Ok(Transition::back()),
        }
    }

    fn data_view(&mut self) -> Option<&mut dyn DisplaysData> {
        Some(self)
    }

    fn refresher(&mut self) -> Option<&mut dyn Refreshes> {
        Some(self)
    }

    fn context_sink(&mut self) -> Option<&mut dyn AcceptsContext> {
        Some(self)
    }
}

impl DisplaysData for EventViewerScreen {
    fn display_data(&mut self, console: &mut dyn Console) {
        self.events.display(console, format_event);
    }
}

impl Refreshes for EventViewerScreen {
    fn refresh(&mut self, console: &mut dyn Console) {
        if let Some(event) = self.pending_delete.take() {
            let result = self.store.borrow_mut().delete_event(&event);
            match result {
                Ok(()) => info!(date = %event.date, main_act = %event.main_act.name, "Event deleted"),
                Err(err) => {
                    warn!(error = %err, "Deleting event failed");
                    console.display_error(&failure(Operation::DeleteEvent, &err));
                }
            }
        }
        let events = self.load();
        debug!(event_type = %self.event_type, count = events.len(), "Loaded saved events");
        self.events.set_items(events);
    }
}

impl AcceptsContext for EventViewerScreen {
    fn accept_context(&mut self, context: ScreenContext) -> NavResult<()> {
        if context.is_selector_result() {
            self.pending_delete = Some(context.prop(0, &self.title)?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Artist, Venue};
    use crate::storage::{shared, JsonEventStore};
    use crate::tui::io::ScriptedConsole;
    use crate::tui::screens::{Next, ScreenRegistry};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn event(day: u32, act: &str) -> Event {
        Event::new(
            NaiveDate::from_ymd_opt(2020, 1, day).unwrap(),
            Venue::new("V", "Atlanta", "GA"),
            Artist::new(act, "rock"),
        )
        .with_purchased(true)
    }

    fn viewer(count: u32) -> (EventViewerScreen, EventViewerLinks, Shared<JsonEventStore>) {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let mut store = JsonEventStore::in_memory().with_today(today);
        for day in 1..=count {
            store.add_event(event(day, &format!("Act {:02}", day))).unwrap();
        }
        let store = shared(store);
        let mut registry = ScreenRegistry::new();
        let id = registry.reserve();
        let links = EventViewerLinks {
            editor: registry.reserve(),
            delete_selector: registry.reserve(),
        };
        let mut viewer = EventViewerScreen::new(id, EventType::Past, links, store.clone());
        viewer.refresh(&mut ScriptedConsole::default());
        (viewer, links, store)
    }

    #[test]
    fn test_paginate_25_events() {
        let (mut viewer, _, _) = viewer(25);
        let mut console = ScriptedConsole::default();
        assert_eq!(viewer.actions()[2], "Go To Page (Page 1/3)");

        viewer.advance(1, &mut console).unwrap();
        viewer.advance(1, &mut console).unwrap();
        assert_eq!(viewer.events().page(), 2);
        let names: Vec<&str> = viewer
            .events()
            .current_page()
            .iter()
            .map(|e| e.main_act.name.as_str())
            .collect();
        assert_eq!(names, vec!["Act 21", "Act 22", "Act 23", "Act 24", "Act 25"]);

        viewer.advance(1, &mut console).unwrap();
        assert_eq!(viewer.events().page(), 2);

        viewer.advance(4, &mut console).unwrap();
        assert_eq!(viewer.events().page(), 0);
        assert_eq!(viewer.events().current_page()[0].main_act.name, "Act 25");
        assert_eq!(viewer.actions()[3], "Toggle Sort (Descending)");
    }

    #[test]
    fn test_event_dated_today_shows_under_its_saved_type() {
        let (mut past, links, store) = viewer(0);
        let today = store.borrow().today();
        let tonight = Event::new(today, Venue::new("V", "Atlanta", "GA"), Artist::new("Tonight", "rock"))
            .with_purchased(true);
        store
            .borrow_mut()
            .add_event_as(tonight.clone(), EventType::Past)
            .unwrap();

        past.refresh(&mut ScriptedConsole::default());
        assert_eq!(past.events().items(), &[tonight]);

        let mut future = EventViewerScreen::new(past.id, EventType::Future, links, store.clone());
        future.refresh(&mut ScriptedConsole::default());
        assert!(future.events().is_empty());
    }

    #[test]
    fn test_add_event_opens_editor_with_type() {
        let (mut viewer, links, _) = viewer(0);
        let t = viewer.advance(5, &mut ScriptedConsole::default()).unwrap();
        assert_eq!(t.next, Next::To(links.editor));
        assert_eq!(
            t.context.unwrap().prop::<EventType>(0, "test").unwrap(),
            EventType::Past
        );
    }

    #[test]
    fn test_delete_through_selector() {
        let (mut viewer, links, store) = viewer(12);
        viewer.advance(1, &mut ScriptedConsole::default()).unwrap();

        let t = viewer.advance(6, &mut ScriptedConsole::default()).unwrap();
        assert_eq!(t.next, Next::To(links.delete_selector));
        let page: Vec<Event> = t.context.unwrap().prop(0, "test").unwrap();
        assert_eq!(page.len(), 2);

        viewer
            .accept_context(ScreenContext::selector_result(viewer.id, page[0].clone().into_prop()))
            .unwrap();
        viewer.refresh(&mut ScriptedConsole::default());
        assert_eq!(store.borrow().get_past_events().len(), 11);
        assert_eq!(viewer.events().len(), 11);
        assert!(!viewer.events().items().contains(&page[0]));
    }

    #[test]
    fn test_delete_failure_is_reported() {
        let (mut viewer, _, _) = viewer(1);
        viewer
            .accept_context(ScreenContext::selector_result(
                viewer.id,
                event(28, "Ghost").into_prop(),
            ))
            .unwrap();
        let mut console = ScriptedConsole::default();
        viewer.refresh(&mut console);
        assert!(console.contains("Failed to delete event:"));
        assert_eq!(viewer.events().len(), 1);
    }

    #[test]
    fn test_empty_viewer() {
        let (mut viewer, _, _) = viewer(0);
        let mut console = ScriptedConsole::default();
        viewer.display_data(&mut console);
        assert_eq!(console.lines(), &["No data found", "Page 1/1"]);

        let t = viewer.advance(6, &mut console).unwrap();
        assert_eq!(t.next, Next::Stay);
        assert_eq!(viewer.advance(7, &mut console).unwrap().next, Next::Back);
    }
}
