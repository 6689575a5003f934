//! Display and prompt port used by every screen
//!
//! Implementations only supply the primitives (write a line, write inline
//! text, clear the line, read one line). Prompting with validation and
//! re-prompting is shared through the default methods of [`Console`].

use std::collections::VecDeque;
use std::fmt;

use crate::common::constants::render::PROMPT_MARKER;
use crate::common::messages::text::INVALID_OPTION;
use crate::error::{PromptError, ValidationError};

/// Accepts or rejects a line of input
pub type Validator<'a> = &'a dyn Fn(&str) -> Result<(), ValidationError>;

pub trait Console {
    /// Write `line` followed by a newline
    fn display_line(&mut self, line: &str);

    /// Write text without a trailing newline
    fn display_formatted(&mut self, args: fmt::Arguments<'_>);

    /// Report a problem to the user; plain line unless the console can highlight
    fn display_error(&mut self, line: &str) {
        self.display_line(line);
    }

    /// Erase whatever inline text is on the current line
    fn clear_current_line(&mut self);

    /// Show the prompt marker and read one line without its newline
    fn read_line(&mut self) -> Result<String, PromptError>;

    /// Ask `question` until `validator` accepts the answer
    fn prompt_text(&mut self, question: &str, validator: Validator<'_>) -> Result<String, PromptError> {
        self.display_line(question);
        loop {
            match self.read_line() {
                Ok(line) => match validator(&line) {
                    Ok(()) => return Ok(line),
                    Err(rejection) => self.display_error(&rejection.to_string()),
                },
                Err(PromptError::Closed) => return Err(PromptError::Closed),
                Err(err) => self.display_error(&err.to_string()),
            }
        }
    }

    /// Ask for an integer in `[min, max_exclusive)`
    fn prompt_int_in_range(
        &mut self,
        question: &str,
        min: i64,
        max_exclusive: i64,
    ) -> Result<i64, PromptError> {
        self.display_line(question);
        loop {
            match self.read_line() {
                Ok(line) => match line.trim().parse::<i64>() {
                    Ok(value) if value >= min && value < max_exclusive => return Ok(value),
                    _ => self.display_error(INVALID_OPTION),
                },
                Err(PromptError::Closed) => return Err(PromptError::Closed),
                Err(err) => self.display_error(&err.to_string()),
            }
        }
    }
}

/// Headless console fed from a script of input lines.
///
/// Output is captured line by line; each read is echoed as `>> <input>`.
/// Once the script runs out, reads report [`PromptError::Closed`].
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    lines: Vec<String>,
    pending: String,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            lines: Vec::new(),
            pending: String::new(),
        }
    }

    pub fn push_input(&mut self, input: impl Into<String>) {
        self.inputs.push_back(input.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn transcript(&self) -> String {
        self.lines.join("\n")
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }

    pub fn count(&self, line: &str) -> usize {
        self.lines.iter().filter(|l| l.as_str() == line).count()
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn clear_output(&mut self) {
        self.lines.clear();
        self.pending.clear();
    }
}

impl Console for ScriptedConsole {
    fn display_line(&mut self, line: &str) {
        let mut full = std::mem::take(&mut self.pending);
        full.push_str(line);
        self.lines.push(full);
    }

    fn display_formatted(&mut self, args: fmt::Arguments<'_>) {
        self.pending.push_str(&args.to_string());
    }

    fn clear_current_line(&mut self) {
        self.pending.clear();
    }

    fn read_line(&mut self) -> Result<String, PromptError> {
        let input = self.inputs.pop_front().ok_or(PromptError::Closed)?;
        let input = input
            .strip_suffix('\n')
            .map(|s| s.strip_suffix('\r').unwrap_or(s).to_string())
            .unwrap_or(input);
        self.display_line(&format!("{} {}", PROMPT_MARKER, input));
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::validators;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_prompt_text_reprompts_until_valid() {
        let mut console = ScriptedConsole::new(["ABC", "GA"]);
        let value = console
            .prompt_text("Enter a state code:", &validators::state_code)
            .unwrap();
        assert_eq!(value, "GA");
        assert_eq!(
            console.lines(),
            &[
                "Enter a state code:".to_string(),
                ">> ABC".to_string(),
                "State must be a two-letter code".to_string(),
                ">> GA".to_string(),
            ]
        );
    }

    #[test]
    fn test_prompt_int_rejects_out_of_range_and_garbage() {
        let mut console = ScriptedConsole::new(["0", "x", "4", "3"]);
        let value = console.prompt_int_in_range("Pick:", 1, 4).unwrap();
        assert_eq!(value, 3);
        assert_eq!(console.count(INVALID_OPTION), 3);
    }

    #[test]
    fn test_closed_input() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        assert_eq!(
            console.prompt_text("Name?", &validators::no_validation),
            Err(PromptError::Closed)
        );
        assert_eq!(
            console.prompt_int_in_range("Pick:", 1, 2),
            Err(PromptError::Closed)
        );
    }

    #[test]
    fn test_inline_text_and_clear() {
        let mut console = ScriptedConsole::new(["\n"]);
        console.display_formatted(format_args!("Loading {}...", "events"));
        console.clear_current_line();
        console.display_formatted(format_args!("Total: "));
        console.display_line("3");
        let line = console.read_line().unwrap();
        assert_eq!(line, "");
        assert_eq!(console.lines(), &["Total: 3".to_string(), ">> ".to_string()]);
    }
}
