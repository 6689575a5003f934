//! Screen contract and the registry that owns every screen
//!
//! A screen has a title, a numbered list of actions and a transition
//! function. Optional capabilities are discovered through the probe methods
//! on [`Screen`]; a screen opts in by returning `Some(self)`.

use std::fmt;

use super::context::ScreenContext;
use super::io::Console;
use crate::error::{NavResult, NavigationError};

pub mod artist_editor;
pub mod event_editor;
pub mod event_viewer;
pub mod menu;
pub mod search_results;
pub mod upcoming;
pub mod venue_editor;

pub use artist_editor::ArtistEditorScreen;
pub use event_editor::{EventEditorLinks, EventEditorScreen};
pub use event_viewer::{EventViewerLinks, EventViewerScreen};
pub use menu::{MenuExit, MenuScreen};
pub use search_results::SearchResultsScreen;
pub use upcoming::{UpcomingEventsScreen, UpcomingLinks, UpcomingSources};
pub use venue_editor::VenueEditorScreen;

/// Non-owning handle to a screen held by the [`ScreenRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId(usize);

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the loop goes after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    /// Remain on the current screen
    Stay,
    /// Pop history and return to the previous screen
    Back,
    /// Move to another screen (or the current one, which is the same as `Stay`)
    To(ScreenId),
    /// Leave the navigation loop
    Exit,
}

/// Result of [`Screen::advance`]
#[derive(Debug)]
pub struct Transition {
    pub next: Next,
    pub context: Option<ScreenContext>,
}

impl Transition {
    pub fn stay() -> Self {
        Self {
            next: Next::Stay,
            context: None,
        }
    }

    pub fn back() -> Self {
        Self {
            next: Next::Back,
            context: None,
        }
    }

    pub fn to(screen: ScreenId) -> Self {
        Self {
            next: Next::To(screen),
            context: None,
        }
    }

    pub fn to_with(screen: ScreenId, context: ScreenContext) -> Self {
        Self {
            next: Next::To(screen),
            context: Some(context),
        }
    }

    pub fn exit() -> Self {
        Self {
            next: Next::Exit,
            context: None,
        }
    }
}

/// Trait for all menu screens
pub trait Screen {
    /// Stable for the duration of a visit
    fn title(&self) -> &str;

    /// Labels for the numbered options, never empty
    fn actions(&self) -> Vec<String>;

    /// React to the chosen option. `choice` is 1-based and always within `actions()`.
    fn advance(&mut self, choice: usize, console: &mut dyn Console) -> NavResult<Transition>;

    fn data_view(&mut self) -> Option<&mut dyn DisplaysData> {
        None
    }

    fn refresher(&mut self) -> Option<&mut dyn Refreshes> {
        None
    }

    fn context_sink(&mut self) -> Option<&mut dyn AcceptsContext> {
        None
    }
}

/// Screens that print data between the title and the options
pub trait DisplaysData {
    fn display_data(&mut self, console: &mut dyn Console);
}

/// Screens that reload their backing data when entered
pub trait Refreshes {
    fn refresh(&mut self, console: &mut dyn Console);
}

/// Screens that take a context from the screen that navigated to them
pub trait AcceptsContext {
    /// Called once per visit, before the first render of that visit
    fn accept_context(&mut self, context: ScreenContext) -> NavResult<()>;
}

/// Owns every screen for the process lifetime.
///
/// Ids are handed out before the screens exist so screens that point at each
/// other can be built in any order.
#[derive(Default)]
pub struct ScreenRegistry {
    slots: Vec<Option<Box<dyn Screen>>>,
}

impl ScreenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reserve(&mut self) -> ScreenId {
        self.slots.push(None);
        ScreenId(self.slots.len() - 1)
    }

    pub fn install(&mut self, id: ScreenId, screen: Box<dyn Screen>) -> NavResult<()> {
        let slot = self
            .slots
            .get_mut(id.0)
            .ok_or(NavigationError::UnknownScreen(id))?;
        *slot = Some(screen);
        Ok(())
    }

    pub fn add(&mut self, screen: Box<dyn Screen>) -> ScreenId {
        self.slots.push(Some(screen));
        ScreenId(self.slots.len() - 1)
    }

    pub fn get(&self, id: ScreenId) -> NavResult<&dyn Screen> {
        self.slots
            .get(id.0)
            .and_then(|slot| slot.as_deref())
            .ok_or(NavigationError::UnknownScreen(id))
    }

    pub fn get_mut(&mut self, id: ScreenId) -> NavResult<&mut (dyn Screen + 'static)> {
        match self.slots.get_mut(id.0) {
            Some(Some(screen)) => Ok(screen.as_mut()),
            _ => Err(NavigationError::UnknownScreen(id)),
        }
    }

    /// Every id handed out so far, installed or not
    pub fn ids(&self) -> impl Iterator<Item = ScreenId> {
        (0..self.slots.len()).map(ScreenId)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
