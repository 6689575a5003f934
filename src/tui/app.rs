//! 界面装配
//!
//! Reserves an id for every screen, wires the collaborators into them and
//! returns the navigation loop rooted at the main menu.

use std::rc::Rc;

use tracing::info;

use super::format::{format_artists, format_event_details_list, format_events, format_venues};
use super::screens::{
    ArtistEditorScreen, EventEditorLinks, EventEditorScreen, EventViewerLinks, EventViewerScreen,
    MenuExit, MenuScreen, SearchResultsScreen, UpcomingEventsScreen, UpcomingLinks,
    UpcomingSources, VenueEditorScreen,
};
use super::selector::SelectorScreen;
use super::{App, ScreenRegistry};
use crate::core::models::{Artist, Event, EventDetails, EventType, Venue};
use crate::error::NavResult;
use crate::storage::{SavedEventStore, Search, Shared, UpcomingEventStore};

/// Everything the screens need from outside the UI
pub struct Collaborators {
    pub saved: Shared<dyn SavedEventStore>,
    pub upcoming: Shared<dyn UpcomingEventStore>,
    pub search: Rc<dyn Search>,
    pub default_city: String,
    pub default_state: String,
    pub search_max_count: usize,
}

/// Build the whole screen graph
pub fn build_app(collab: Collaborators) -> NavResult<App> {
    let mut registry = ScreenRegistry::new();

    let main_menu = registry.reserve();
    let past_viewer = registry.reserve();
    let future_viewer = registry.reserve();
    let upcoming = registry.reserve();
    let event_editor = registry.reserve();
    let artist_editor = registry.reserve();
    let venue_editor = registry.reserve();
    let artist_selector = registry.reserve();
    let venue_selector = registry.reserve();
    let opener_selector = registry.reserve();
    let past_delete_selector = registry.reserve();
    let future_delete_selector = registry.reserve();
    let save_selector = registry.reserve();
    let search_results = registry.reserve();

    registry.install(
        main_menu,
        Box::new(
            MenuScreen::new(main_menu, "Main Menu", MenuExit::Exit)
                .entry("Past Events", past_viewer)
                .entry("Future Events", future_viewer)
                .entry("Upcoming Events", upcoming),
        ),
    )?;

    // viewers
    for (id, event_type, delete_selector) in [
        (past_viewer, EventType::Past, past_delete_selector),
        (future_viewer, EventType::Future, future_delete_selector),
    ] {
        let links = EventViewerLinks {
            editor: event_editor,
            delete_selector,
        };
        registry.install(
            id,
            Box::new(EventViewerScreen::new(id, event_type, links, collab.saved.clone())),
        )?;
        registry.install(
            delete_selector,
            Box::new(SelectorScreen::<Event, Event>::identity(
                "Delete Event",
                id,
                format_events,
            )),
        )?;
    }

    registry.install(
        upcoming,
        Box::new(UpcomingEventsScreen::new(
            upcoming,
            UpcomingLinks {
                search_results,
                save_selector,
            },
            UpcomingSources {
                upcoming: collab.upcoming.clone(),
                saved: collab.saved.clone(),
                search: collab.search.clone(),
                max_count: collab.search_max_count,
            },
            collab.default_city.clone(),
            collab.default_state.clone(),
        )),
    )?;
    registry.install(
        save_selector,
        Box::new(SelectorScreen::<EventDetails, Event>::new(
            "Save Event",
            upcoming,
            format_event_details_list,
            |details: &EventDetails| details.event.clone(),
        )),
    )?;
    registry.install(search_results, Box::new(SearchResultsScreen::new()))?;

    // editors
    registry.install(
        event_editor,
        Box::new(EventEditorScreen::new(
            event_editor,
            EventEditorLinks {
                artist_editor,
                venue_editor,
                opener_selector,
            },
            collab.saved.clone(),
        )),
    )?;
    registry.install(
        opener_selector,
        Box::new(SelectorScreen::<Artist, Artist>::identity(
            "Remove Opener",
            event_editor,
            format_artists,
        )),
    )?;
    registry.install(
        artist_editor,
        Box::new(ArtistEditorScreen::new(
            artist_editor,
            artist_selector,
            collab.search.clone(),
            collab.search_max_count,
        )),
    )?;
    registry.install(
        artist_selector,
        Box::new(SelectorScreen::<Artist, Artist>::identity(
            "Select Artist",
            artist_editor,
            format_artists,
        )),
    )?;
    registry.install(
        venue_editor,
        Box::new(VenueEditorScreen::new(
            venue_editor,
            venue_selector,
            collab.search.clone(),
            collab.search_max_count,
        )),
    )?;
    registry.install(
        venue_selector,
        Box::new(SelectorScreen::<Venue, Venue>::identity(
            "Select Venue",
            venue_editor,
            format_venues,
        )),
    )?;

    info!(
        screens = registry.len(),
        city = %collab.default_city,
        state = %collab.default_state,
        "Assembled screens"
    );
    Ok(App::new(registry, main_menu))
}
