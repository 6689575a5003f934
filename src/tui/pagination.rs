//! Page and sort state for list screens

use std::cmp::Ordering;
use std::fmt;

use super::format::page_label;
use super::io::Console;
use crate::common::constants::limits::PAGE_SIZE;
use crate::common::messages::actions::{GO_TO_PAGE, NEXT_PAGE, PREVIOUS_PAGE};
use crate::common::messages::text::NO_DATA;
use crate::error::NavResult;

/// Paginated screens list these actions first, as options 1 to `PAGE_ACTIONS`
pub const PAGE_ACTIONS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "Ascending"),
            SortOrder::Descending => write!(f, "Descending"),
        }
    }
}

/// Sorted list split into pages of [`PAGE_SIZE`]
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    items: Vec<T>,
    page: usize,
    order: SortOrder,
    compare: fn(&T, &T) -> Ordering,
}

impl<T> Paginator<T> {
    pub fn new(compare: fn(&T, &T) -> Ordering) -> Self {
        Self {
            items: Vec::new(),
            page: 0,
            order: SortOrder::Ascending,
            compare,
        }
    }

    /// Replace the items, keeping sort order and clamping the page
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.sort();
        let last = self.page_count().saturating_sub(1);
        self.page = self.page.min(last);
    }

    /// Replace the items and go back to the first page
    pub fn reset(&mut self, items: Vec<T>) {
        self.page = 0;
        self.set_items(items);
    }

    fn sort(&mut self) {
        let compare = self.compare;
        match self.order {
            SortOrder::Ascending => self.items.sort_by(compare),
            SortOrder::Descending => self.items.sort_by(|a, b| compare(b, a)),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Zero-based current page
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// ⌈len / PAGE_SIZE⌉
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(PAGE_SIZE)
    }

    pub fn current_page(&self) -> &[T] {
        let start = (self.page * PAGE_SIZE).min(self.items.len());
        let end = (start + PAGE_SIZE).min(self.items.len());
        &self.items[start..end]
    }

    /// Returns false when already on the last page
    pub fn next_page(&mut self) -> bool {
        if self.page + 1 < self.page_count() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Returns false when already on the first page
    pub fn previous_page(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to a 1-based page; out-of-range pages are refused
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.page_count() {
            self.page = page - 1;
            true
        } else {
            false
        }
    }

    /// Flip the sort order, re-sort everything and return to the first page
    pub fn toggle_sort(&mut self) {
        self.order = self.order.toggled();
        self.sort();
        self.page = 0;
    }

    pub fn page_label(&self) -> String {
        page_label(self.page, self.page_count())
    }

    /// Next, previous, go-to and sort-toggle labels, in that order
    pub fn actions(&self) -> Vec<String> {
        vec![
            NEXT_PAGE.to_string(),
            PREVIOUS_PAGE.to_string(),
            format!("{} ({})", GO_TO_PAGE, self.page_label()),
            format!("Toggle Sort ({})", self.order),
        ]
    }

    /// Apply one of the [`actions`](Self::actions), `choice` being 1-based
    pub fn handle(&mut self, choice: usize, console: &mut dyn Console) -> NavResult<()> {
        match choice {
            1 => {
                self.next_page();
            }
            2 => {
                self.previous_page();
            }
            3 if self.is_empty() => console.display_line(NO_DATA),
            3 => {
                let max = self.page_count() as i64;
                let page = console.prompt_int_in_range(
                    &format!("Enter a page number (1-{}):", max),
                    1,
                    max + 1,
                )?;
                self.go_to_page(page as usize);
            }
            _ => self.toggle_sort(),
        }
        Ok(())
    }

    /// Current page, one formatted line per item, followed by the page label
    pub fn display(&self, console: &mut dyn Console, format: fn(&T) -> String) {
        if self.is_empty() {
            console.display_line(NO_DATA);
        }
        for item in self.current_page() {
            console.display_line(&format(item));
        }
        console.display_line(&self.page_label());
    }
}
