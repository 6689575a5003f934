//! Artist editor
//!
//! Edits an artist owned by the parent screen. Changes go to a scratch copy
//! and are written to the parent's slot only on save. Picking a search result
//! writes straight through.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use super::{AcceptsContext, DisplaysData, Screen, ScreenId, Transition};
use crate::common::messages::{actions::CANCEL, missing_fields};
use crate::core::models::Artist;
use crate::error::NavResult;
use crate::storage::Search;
use crate::tui::context::{ContextValue, ScreenContext};
use crate::tui::format::format_field;
use crate::tui::io::Console;
use crate::tui::validators;

const TITLE: &str = "Artist Editor";

pub struct ArtistEditorScreen {
    id: ScreenId,
    selector: ScreenId,
    search: Rc<dyn Search>,
    max_count: usize,
    owned: Rc<RefCell<Artist>>,
    scratch: Artist,
}

impl ArtistEditorScreen {
    /// `selector` is the artist selector that search results are sent to
    pub fn new(id: ScreenId, selector: ScreenId, search: Rc<dyn Search>, max_count: usize) -> Self {
        Self {
            id,
            selector,
            search,
            max_count,
            owned: Rc::new(RefCell::new(Artist::default())),
            scratch: Artist::default(),
        }
    }

    pub fn scratch(&self) -> &Artist {
        &self.scratch
    }
}

impl Screen for ArtistEditorScreen {
    fn title(&self) -> &str {
        TITLE
    }

    fn actions(&self) -> Vec<String> {
        vec![
            "Set Name".to_string(),
            "Set Genre".to_string(),
            "Search Artists".to_string(),
            "Save Artist".to_string(),
            CANCEL.to_string(),
        ]
    }

    fn advance(&mut self, choice: usize, console: &mut dyn Console) -> NavResult<Transition> {
        match choice {
            1 => {
                let name = console.prompt_text("Enter the artist name:", &validators::no_validation)?;
                self.scratch.name = name.trim().to_string();
                Ok(Transition::stay())
            }
            2 => {
                let genre = console
                    .prompt_text("Enter the artist genre:", &validators::only_letters_or_spaces)?;
                self.scratch.genre = genre.trim().to_string();
                Ok(Transition::stay())
            }
            3 => {
                let query =
                    console.prompt_text("Enter an artist name to search for:", &validators::no_validation)?;
                let matches = self
                    .search
                    .fuzzy_artist_matches_by_name(&query, Some(self.max_count));
                debug!(query = %query, count = matches.len(), "Artist search");
                Ok(Transition::to_with(
                    self.selector,
                    ScreenContext::new(self.id, vec![matches.into_prop()]),
                ))
            }
            4 => {
                let missing = self.scratch.missing_fields();
                if !missing.is_empty() {
                    console.display_error(&missing_fields("Artist", &missing));
                    return Ok(Transition::stay());
                }
                *self.owned.borrow_mut() = self.scratch.clone();
                Ok(Transition::back())
            }
            _ => Ok(Transition::back()),
        }
    }

    fn data_view(&mut self) -> Option<&mut dyn DisplaysData> {
        Some(self)
    }

    fn context_sink(&mut self) -> Option<&mut dyn AcceptsContext> {
        Some(self)
    }
}

impl DisplaysData for ArtistEditorScreen {
    fn display_data(&mut self, console: &mut dyn Console) {
        console.display_line(&format_field("Name", &self.scratch.name));
        console.display_line(&format_field("Genre", &self.scratch.genre));
    }
}

impl AcceptsContext for ArtistEditorScreen {
    fn accept_context(&mut self, context: ScreenContext) -> NavResult<()> {
        if context.is_selector_result() {
            let chosen: Artist = context.prop(0, TITLE)?;
            *self.owned.borrow_mut() = chosen.clone();
            self.scratch = chosen;
        } else if !context.is_empty() {
            self.owned = context.prop(0, TITLE)?;
            self.scratch = self.owned.borrow().clone();
        }
        Ok(())
    }
}
