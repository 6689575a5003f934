//! Navigation history

use super::screens::ScreenId;
use crate::error::{NavResult, NavigationError};

/// Stack of visited screens. The root at the bottom is never popped.
#[derive(Debug, Clone)]
pub struct History {
    stack: Vec<ScreenId>,
}

impl History {
    pub fn new(root: ScreenId) -> Self {
        Self { stack: vec![root] }
    }

    pub fn push(&mut self, screen: ScreenId) {
        self.stack.push(screen);
    }

    /// Remove the top screen and return the one beneath it
    pub fn pop_to_previous(&mut self) -> NavResult<ScreenId> {
        if self.stack.len() <= 1 {
            return Err(NavigationError::HistoryUnderflow);
        }
        self.stack.pop();
        Ok(self.current())
    }

    pub fn current(&self) -> ScreenId {
        // stack is never empty: constructed with a root and pops stop at it
        self.stack[self.stack.len() - 1]
    }

    pub fn contains(&self, screen: ScreenId) -> bool {
        self.stack.contains(&screen)
    }

    /// Forward navigation. A screen already on the stack is returned to by
    /// discarding everything above it; otherwise it is pushed.
    pub fn navigate_to(&mut self, screen: ScreenId) {
        match self.stack.iter().rposition(|s| *s == screen) {
            Some(idx) => self.stack.truncate(idx + 1),
            None => self.push(screen),
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn screens(&self) -> &[ScreenId] {
        &self.stack
    }
}
