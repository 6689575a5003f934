//! Venue editor, same shape as the artist editor

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use super::{AcceptsContext, DisplaysData, Screen, ScreenId, Transition};
use crate::common::messages::{actions::CANCEL, missing_fields};
use crate::core::models::Venue;
use crate::error::NavResult;
use crate::storage::Search;
use crate::tui::context::{ContextValue, ScreenContext};
use crate::tui::format::format_field;
use crate::tui::io::Console;
use crate::tui::validators;

const TITLE: &str = "Venue Editor";

pub struct VenueEditorScreen {
    id: ScreenId,
    selector: ScreenId,
    search: Rc<dyn Search>,
    max_count: usize,
    owned: Rc<RefCell<Venue>>,
    scratch: Venue,
}

impl VenueEditorScreen {
    pub fn new(id: ScreenId, selector: ScreenId, search: Rc<dyn Search>, max_count: usize) -> Self {
        Self {
            id,
            selector,
            search,
            max_count,
            owned: Rc::new(RefCell::new(Venue::default())),
            scratch: Venue::default(),
        }
    }

    pub fn scratch(&self) -> &Venue {
        &self.scratch
    }
}

impl Screen for VenueEditorScreen {
    fn title(&self) -> &str {
        TITLE
    }

    fn actions(&self) -> Vec<String> {
        vec![
            "Set Name".to_string(),
            "Set City".to_string(),
            "Set State".to_string(),
            "Search Venues".to_string(),
            "Save Venue".to_string(),
            CANCEL.to_string(),
        ]
    }

    fn advance(&mut self, choice: usize, console: &mut dyn Console) -> NavResult<Transition> {
        match choice {
            1 => {
                let name = console.prompt_text("Enter the venue name:", &validators::no_validation)?;
                self.scratch.name = name.trim().to_string();
            }
            2 => {
                let city =
                    console.prompt_text("Enter the venue city:", &validators::only_letters_or_spaces)?;
                self.scratch.city = city.trim().to_string();
            }
            3 => {
                let state = console.prompt_text(
                    "Enter the two-letter venue state code:",
                    &validators::state_code,
                )?;
                self.scratch.state = state.to_uppercase();
            }
            4 => {
                let query =
                    console.prompt_text("Enter a venue name to search for:", &validators::no_validation)?;
                let matches = self
                    .search
                    .fuzzy_venue_matches_by_name(&query, Some(self.max_count));
                debug!(query = %query, count = matches.len(), "Venue search");
                return Ok(Transition::to_with(
                    self.selector,
                    ScreenContext::new(self.id, vec![matches.into_prop()]),
                ));
            }
            5 => {
                let missing = self.scratch.missing_fields();
                if !missing.is_empty() {
                    console.display_error(&missing_fields("Venue", &missing));
                    return Ok(Transition::stay());
                }
                *self.owned.borrow_mut() = self.scratch.clone();
                return Ok(Transition::back());
            }
            _ => return Ok(Transition::back()),
        }
        Ok(Transition::stay())
    }

    fn data_view(&mut self) -> Option<&mut dyn DisplaysData> {
        Some(self)
    }

    fn context_sink(&mut self) -> Option<&mut dyn AcceptsContext> {
        Some(self)
    }
}

impl DisplaysData for VenueEditorScreen {
    fn display_data(&mut self, console: &mut dyn Console) {
        console.display_line(&format_field("Name", &self.scratch.name));
        console.display_line(&format_field("City", &self.scratch.city));
        console.display_line(&format_field("State", &self.scratch.state));
    }
}

impl AcceptsContext for VenueEditorScreen {
    fn accept_context(&mut self, context: ScreenContext) -> NavResult<()> {
        if context.is_selector_result() {
            let chosen: Venue = context.prop(0, TITLE)?;
            *self.owned.borrow_mut() = chosen.clone();
            self.scratch = chosen;
        } else if !context.is_empty() {
            self.owned = context.prop(0, TITLE)?;
            self.scratch = self.owned.borrow().clone();
        }
        Ok(())
    }
}
