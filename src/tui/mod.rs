//! 菜单式终端界面
//!
//! The navigation loop renders the current screen, reads an option index,
//! asks the screen where to go next and keeps the history stack in step.
//! Screens are owned by a [`ScreenRegistry`] and addressed by [`ScreenId`].

use tracing::{debug, info, warn};

pub mod app;
pub mod context;
pub mod format;
pub mod history;
pub mod io;
pub mod pagination;
pub mod screens;
pub mod selector;
pub mod terminal;
pub mod validators;

use self::context::ScreenContext;
use self::history::History;
use self::io::Console;
use crate::common::constants::render::{OPTIONS_HEADER, SEPARATOR};
use crate::common::messages::text::OPTION_PROMPT;
use crate::error::NavResult;

// 重新导出常用类型
pub use app::{build_app, Collaborators};
pub use screens::{Next, Screen, ScreenId, ScreenRegistry, Transition};

/// Navigation loop over a registry of screens
pub struct App {
    registry: ScreenRegistry,
    history: History,
    current: ScreenId,
    /// True when the previous iteration moved to a different screen
    just_changed_screen: bool,
}

impl App {
    pub fn new(registry: ScreenRegistry, root: ScreenId) -> Self {
        Self {
            registry,
            history: History::new(root),
            current: root,
            just_changed_screen: true,
        }
    }

    pub fn current(&self) -> ScreenId {
        self.current
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn registry(&self) -> &ScreenRegistry {
        &self.registry
    }

    /// Run until a screen asks to exit.
    ///
    /// Returns an error for broken navigation invariants and when the input
    /// stream closes.
    pub fn run(&mut self, console: &mut dyn Console) -> NavResult<()> {
        info!(root = %self.current, "Starting navigation loop");
        while self.step(console)? {}
        info!("Navigation loop finished");
        Ok(())
    }

    /// One render / read / advance cycle. Returns false once a screen exits.
    pub fn step(&mut self, console: &mut dyn Console) -> NavResult<bool> {
        let screen = self.registry.get_mut(self.current)?;

        console.display_line(SEPARATOR);
        console.display_line(&screen.title().to_uppercase());

        if self.just_changed_screen {
            if let Some(refresher) = screen.refresher() {
                refresher.refresh(console);
            }
        }
        if let Some(view) = screen.data_view() {
            view.display_data(console);
        }

        let actions = screen.actions();
        console.display_line(OPTIONS_HEADER);
        for (idx, action) in actions.iter().enumerate() {
            console.display_line(&format::option_label(idx + 1, action));
        }

        let choice = console.prompt_int_in_range(OPTION_PROMPT, 1, actions.len() as i64 + 1)?;
        let transition = screen.advance(choice as usize, console)?;

        let last = self.current;
        match transition.next {
            Next::Exit => {
                info!(screen = %last, "Exit requested");
                return Ok(false);
            }
            Next::Back => {
                self.current = self.history.pop_to_previous()?;
            }
            Next::Stay => {}
            Next::To(next) if next == last => {}
            Next::To(next) => {
                // fail before touching history if the target was never installed
                self.registry.get(next)?;
                self.history.navigate_to(next);
                self.current = next;
            }
        }

        self.just_changed_screen = self.current != last;
        debug!(
            from = %last,
            to = %self.current,
            depth = self.history.depth(),
            "Transition"
        );

        if self.just_changed_screen {
            let context = transition
                .context
                .unwrap_or_else(|| ScreenContext::returning_to(last));
            let screen = self.registry.get_mut(self.current)?;
            match screen.context_sink() {
                Some(sink) => sink.accept_context(context)?,
                None if !context.is_empty() => {
                    warn!(screen = screen.title(), "Screen does not accept context, ignoring it");
                }
                None => {}
            }
        } else if transition.context.is_some() {
            warn!(screen = %self.current, "Context dropped: screen did not change");
        }

        Ok(true)
    }
}
