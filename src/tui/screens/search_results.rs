//! Paginated event search results

use super::{AcceptsContext, DisplaysData, Screen, Transition};
use crate::common::messages::actions::BACK;
use crate::core::models::EventDetails;
use crate::error::NavResult;
use crate::tui::context::ScreenContext;
use crate::tui::format::format_event_details;
use crate::tui::io::Console;
use crate::tui::pagination::{Paginator, PAGE_ACTIONS};

const TITLE: &str = "Search Results";

pub struct SearchResultsScreen {
    results: Paginator<EventDetails>,
}

impl SearchResultsScreen {
    pub fn new() -> Self {
        Self {
            results: Paginator::new(EventDetails::chronological),
        }
    }

    pub fn results(&self) -> &Paginator<EventDetails> {
        &self.results
    }
}

impl Default for SearchResultsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for SearchResultsScreen {
    fn title(&self) -> &str {
        TITLE
    }

    fn actions(&self) -> Vec<String> {
        let mut actions = self.results.actions();
        actions.push(BACK.to_string());
        actions
    }

    fn advance(&mut self, choice: usize, console: &mut dyn Console) -> NavResult<Transition> {
        if choice <= PAGE_ACTIONS {
            self.results.handle(choice, console)?;
            return Ok(Transition::stay());
        }
        Ok(Transition::back())
    }

    fn data_view(&mut self) -> Option<&mut dyn DisplaysData> {
        Some(self)
    }

    fn context_sink(&mut self) -> Option<&mut dyn AcceptsContext> {
        Some(self)
    }
}

impl DisplaysData for SearchResultsScreen {
    fn display_data(&mut self, console: &mut dyn Console) {
        self.results.display(console, format_event_details);
    }
}

impl AcceptsContext for SearchResultsScreen {
    fn accept_context(&mut self, context: ScreenContext) -> NavResult<()> {
        if !context.is_empty() {
            self.results.reset(context.prop(0, TITLE)?);
        }
        Ok(())
    }
}
