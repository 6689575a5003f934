//! Upcoming events for one city
//!
//! Lists what the provider cache holds for the current city/state. Events
//! can be reloaded from the provider, searched by artist or venue, and saved
//! to the personal store as future events.

use std::rc::Rc;

use tracing::{debug, info, warn};

use super::{AcceptsContext, DisplaysData, Refreshes, Screen, ScreenId, Transition};
use crate::common::messages::actions::BACK;
use crate::common::messages::text::{EVENT_SAVED, NO_DATA};
use crate::common::messages::{failure, Operation};
use crate::core::models::{Event, EventDetails, EventType};
use crate::error::NavResult;
use crate::storage::{SavedEventStore, Search, Shared, UpcomingEventStore};
use crate::tui::context::{ContextValue, ScreenContext};
use crate::tui::format::{format_event_details, format_field};
use crate::tui::io::Console;
use crate::tui::pagination::{Paginator, PAGE_ACTIONS};
use crate::tui::validators;

const TITLE: &str = "Upcoming Events";

#[derive(Debug, Clone, Copy)]
pub struct UpcomingLinks {
    pub search_results: ScreenId,
    pub save_selector: ScreenId,
}

/// Collaborators of the upcoming events screen
pub struct UpcomingSources {
    pub upcoming: Shared<dyn UpcomingEventStore>,
    pub saved: Shared<dyn SavedEventStore>,
    pub search: Rc<dyn Search>,
    pub max_count: usize,
}

pub struct UpcomingEventsScreen {
    id: ScreenId,
    links: UpcomingLinks,
    sources: UpcomingSources,
    city: String,
    state: String,
    events: Paginator<EventDetails>,
    /// Chosen in the save selector, stored on the next refresh
    pending_save: Option<Event>,
}

impl UpcomingEventsScreen {
    pub fn new(
        id: ScreenId,
        links: UpcomingLinks,
        sources: UpcomingSources,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            id,
            links,
            sources,
            city: city.into(),
            state: state.into(),
            events: Paginator::new(EventDetails::chronological),
            pending_save: None,
        }
    }

    pub fn events(&self) -> &Paginator<EventDetails> {
        &self.events
    }

    pub fn location(&self) -> (&str, &str) {
        (&self.city, &self.state)
    }

    fn load_cached(&mut self) {
        let events = self
            .sources
            .upcoming
            .borrow()
            .get_upcoming_events(&self.city, &self.state);
        debug!(city = %self.city, state = %self.state, count = events.len(), "Loaded cached upcoming events");
        self.events.set_items(events);
    }

    fn reload(&mut self, console: &mut dyn Console) {
        console.display_formatted(format_args!(
            "Reloading events for {}, {}...",
            self.city, self.state
        ));
        let result = self
            .sources
            .upcoming
            .borrow_mut()
            .reload_upcoming_events(&self.city, &self.state);
        console.clear_current_line();
        match result {
            Ok(()) => {
                info!(city = %self.city, state = %self.state, "Upcoming events reloaded");
                self.events.reset(Vec::new());
                self.load_cached();
            }
            Err(err) => {
                warn!(error = %err, "Reloading upcoming events failed");
                console.display_error(&failure(Operation::ReloadEvents, &err));
            }
        }
    }

    fn search(&self, by_venue: bool, console: &mut dyn Console) -> NavResult<Transition> {
        let question = if by_venue {
            "Enter a venue name to search for:"
        } else {
            "Enter an artist name to search for:"
        };
        let query = console.prompt_text(question, &validators::no_validation)?;
        let search = &self.sources.search;
        let max = Some(self.sources.max_count);
        let results = if by_venue {
            search.fuzzy_event_details_matches_by_venue(&query, &self.city, &self.state, max)
        } else {
            search.fuzzy_event_details_matches_by_artist(&query, &self.city, &self.state, max)
        };
        debug!(query = %query, by_venue, count = results.len(), "Upcoming events search");
        Ok(Transition::to_with(
            self.links.search_results,
            ScreenContext::new(self.id, vec![results.into_prop()]),
        ))
    }
}

impl Screen for UpcomingEventsScreen {
    fn title(&self) -> &str {
        TITLE
    }

    fn actions(&self) -> Vec<String> {
        let mut actions = self.events.actions();
        actions.extend(
            [
                "Set City",
                "Set State",
                "Reload Events",
                "Search By Artist",
                "Search By Venue",
                "Save Event",
                BACK,
            ]
            .map(String::from),
        );
        actions
    }

    fn advance(&mut self, choice: usize, console: &mut dyn Console) -> NavResult<Transition> {
        if choice <= PAGE_ACTIONS {
            self.events.handle(choice, console)?;
            return Ok(Transition::stay());
        }
        match choice - PAGE_ACTIONS {
            1 => {
                let city = console.prompt_text("Enter a city:", &validators::only_letters_or_spaces)?;
                self.city = city.trim().to_string();
                self.events.reset(Vec::new());
                self.load_cached();
            }
            2 => {
                let state =
                    console.prompt_text("Enter a two-letter state code:", &validators::state_code)?;
                self.state = state.to_uppercase();
                self.events.reset(Vec::new());
                self.load_cached();
            }
            3 => self.reload(console),
            4 => return self.search(false, console),
            5 => return self.search(true, console),
            6 if self.events.is_empty() => console.display_line(NO_DATA),
            6 => {
                return Ok(Transition::to_with(
                    self.links.save_selector,
                    ScreenContext::new(self.id, vec![self.events.current_page().to_vec().into_prop()]),
                ))
            }
            _ => return Ok(Transition::back()),
        }
        Ok(Transition::stay())
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

impl DisplaysData for UpcomingEventsScreen {
    fn display_data(&mut self, console: &mut dyn Console) {
        console.display_line(&format_field(
            "Location",
            &format!("{}, {}", self.city, self.state),
        ));
        self.events.display(console, format_event_details);
    }
}

impl Refreshes for UpcomingEventsScreen {
    fn refresh(&mut self, console: &mut dyn Console) {
        if let Some(event) = self.pending_save.take() {
            let result = self
                .sources
                .saved
                .borrow_mut()
                .add_event_as(event.with_purchased(false), EventType::Future);
            match result {
                Ok(()) => console.display_line(EVENT_SAVED),
                Err(err) => {
                    warn!(error = %err, "Saving upcoming event failed");
                    console.display_error(&failure(Operation::SaveEvent, &err));
                }
            }
        }
        self.load_cached();
    }
}

impl AcceptsContext for UpcomingEventsScreen {
    fn accept_context(&mut self, context: ScreenContext) -> NavResult<()> {
        if context.is_selector_result() {
            self.pending_save = Some(context.prop(0, TITLE)?);
        }
        Ok(())
    }
}
