//! Interactive terminal console
//!
//! Output goes through `console::Term`. Input is read with `dialoguer` when
//! attached to a terminal and line by line from stdin otherwise, so the
//! binary can also be driven from a pipe.

use std::fmt;
use std::io::{self, BufRead, Write};

use colored::Colorize;
use console::Term;
use dialoguer::theme::Theme;
use dialoguer::Input;
use tracing::warn;

use super::io::Console;
use crate::common::constants::render::{CLEAR_LINE, PROMPT_MARKER};
use crate::error::PromptError;

/// Renders the input prompt as the bare `>> ` marker
struct MarkerTheme;

impl Theme for MarkerTheme {
    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        _default: Option<&str>,
    ) -> fmt::Result {
        write!(f, "{} ", prompt)
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        write!(f, "{} {}", prompt, sel)
    }
}

pub struct TerminalConsole {
    term: Term,
    interactive: bool,
}

impl TerminalConsole {
    pub fn new() -> Self {
        let term = Term::stdout();
        let interactive = term.is_term() && console::user_attended();
        Self { term, interactive }
    }

    fn write(&self, text: &str) {
        if let Err(err) = self.term.write_str(text).and_then(|_| self.term.flush()) {
            warn!(error = %err, "Failed to write to terminal");
        }
    }

    fn read_interactive(&self) -> Result<String, PromptError> {
        Input::<String>::with_theme(&MarkerTheme)
            .with_prompt(PROMPT_MARKER)
            .allow_empty(true)
            .interact_text_on(&self.term)
            .map_err(|err| match err {
                dialoguer::Error::IO(io_err) if io_err.kind() == io::ErrorKind::Interrupted => {
                    PromptError::Closed
                }
                dialoguer::Error::IO(io_err) => PromptError::from(io_err),
            })
    }

    fn read_piped(&self) -> Result<String, PromptError> {
        self.write(&format!("{} ", PROMPT_MARKER));
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(PromptError::Closed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        // echo so a piped transcript reads like an interactive one
        self.write(&format!("{}\n", trimmed));
        Ok(trimmed.to_string())
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn display_line(&mut self, line: &str) {
        if let Err(err) = self.term.write_line(line) {
            warn!(error = %err, "Failed to write to terminal");
        }
    }

    fn display_formatted(&mut self, args: fmt::Arguments<'_>) {
        self.write(&args.to_string());
    }

    fn display_error(&mut self, line: &str) {
        self.display_line(&line.red().to_string());
    }

    fn clear_current_line(&mut self) {
        self.write(CLEAR_LINE);
    }

    fn read_line(&mut self) -> Result<String, PromptError> {
        if self.interactive {
            self.read_interactive()
        } else {
            self.read_piped()
        }
    }
}
