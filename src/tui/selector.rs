//! Generic selector screen
//!
//! Shows the options it receives through its context, one action per option
//! plus `Cancel`. Choosing an option forwards `transform(option)` to the
//! configured next screen as a selector-result context; cancelling returns
//! to the context's return screen untouched.

use tracing::debug;

use super::context::{ContextValue, ScreenContext};
use super::io::Console;
use super::screens::{AcceptsContext, DisplaysData, Screen, ScreenId, Transition};
use crate::common::messages::{actions::CANCEL, text::NO_DATA};
use crate::error::NavResult;

type Formatter<T> = Box<dyn Fn(&[T]) -> Vec<String>>;
type Transform<T, U> = Box<dyn Fn(&T) -> U>;

pub struct SelectorScreen<T, U> {
    title: String,
    next: ScreenId,
    return_screen: Option<ScreenId>,
    options: Vec<T>,
    formatter: Formatter<T>,
    transform: Transform<T, U>,
}

impl<T, U> SelectorScreen<T, U>
where
    Vec<T>: ContextValue,
    U: ContextValue,
{
    pub fn new(
        title: impl Into<String>,
        next: ScreenId,
        formatter: impl Fn(&[T]) -> Vec<String> + 'static,
        transform: impl Fn(&T) -> U + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            next,
            return_screen: None,
            options: Vec::new(),
            formatter: Box::new(formatter),
            transform: Box::new(transform),
        }
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }
}

impl<T> SelectorScreen<T, T>
where
    T: Clone + 'static,
    Vec<T>: ContextValue,
    T: ContextValue,
{
    /// Selector that forwards the chosen option as-is
    pub fn identity(
        title: impl Into<String>,
        next: ScreenId,
        formatter: impl Fn(&[T]) -> Vec<String> + 'static,
    ) -> Self {
        Self::new(title, next, formatter, T::clone)
    }
}

impl<T, U> Screen for SelectorScreen<T, U>
where
    T: 'static,
    U: 'static,
    Vec<T>: ContextValue,
    U: ContextValue,
{
    fn title(&self) -> &str {
        &self.title
    }

    fn actions(&self) -> Vec<String> {
        let mut actions = (self.formatter)(&self.options);
        actions.push(CANCEL.to_string());
        actions
    }

    fn advance(&mut self, choice: usize, _console: &mut dyn Console) -> NavResult<Transition> {
        let return_screen = self.return_screen.unwrap_or(self.next);
        if choice == self.options.len() + 1 {
            debug!(selector = %self.title, "Selection cancelled");
            return Ok(Transition::to(return_screen));
        }
        let chosen = (self.transform)(&self.options[choice - 1]);
        let context = ScreenContext::selector_result(return_screen, chosen.into_prop());
        Ok(Transition::to_with(self.next, context))
    }

    fn data_view(&mut self) -> Option<&mut dyn DisplaysData> {
        Some(self)
    }

    fn context_sink(&mut self) -> Option<&mut dyn AcceptsContext> {
        Some(self)
    }
}

impl<T, U> DisplaysData for SelectorScreen<T, U> {
    fn display_data(&mut self, console: &mut dyn Console) {
        if self.options.is_empty() {
            console.display_line(NO_DATA);
        }
    }
}

impl<T, U> AcceptsContext for SelectorScreen<T, U>
where
    Vec<T>: ContextValue,
{
    fn accept_context(&mut self, context: ScreenContext) -> NavResult<()> {
        self.return_screen = Some(context.return_screen());
        self.options = context.prop::<Vec<T>>(0, &self.title)?;
        Ok(())
    }
}
