//! Fixed menu of child screens

use tracing::info;

use super::{Screen, ScreenId, Transition};
use crate::common::messages::actions::{BACK, EXIT};
use crate::common::messages::text::EXIT_REQUESTED;
use crate::error::NavResult;
use crate::tui::context::ScreenContext;
use crate::tui::io::Console;

/// What the last menu slot does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    Back,
    Exit,
}

pub struct MenuScreen {
    id: ScreenId,
    title: String,
    entries: Vec<(String, ScreenId)>,
    exit: MenuExit,
}

impl MenuScreen {
    pub fn new(id: ScreenId, title: impl Into<String>, exit: MenuExit) -> Self {
        Self {
            id,
            title: title.into(),
            entries: Vec::new(),
            exit,
        }
    }

    pub fn entry(mut self, label: impl Into<String>, screen: ScreenId) -> Self {
        self.entries.push((label.into(), screen));
        self
    }
}

impl Screen for MenuScreen {
    fn title(&self) -> &str {
        &self.title
    }

    fn actions(&self) -> Vec<String> {
        let mut actions: Vec<String> = self.entries.iter().map(|(label, _)| label.clone()).collect();
        actions.push(match self.exit {
            MenuExit::Back => BACK.to_string(),
            MenuExit::Exit => EXIT.to_string(),
        });
        actions
    }

    fn advance(&mut self, choice: usize, console: &mut dyn Console) -> NavResult<Transition> {
        if let Some((_, child)) = self.entries.get(choice - 1) {
            return Ok(Transition::to_with(*child, ScreenContext::returning_to(self.id)));
        }
        match self.exit {
            MenuExit::Back => Ok(Transition::back()),
            MenuExit::Exit => {
                console.display_line(EXIT_REQUESTED);
                info!("Exit requested from {}", self.title);
                Ok(Transition::exit())
            }
        }
    }
}
