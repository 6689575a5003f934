//! Common messages shown by screens

/// User-visible strings shared by several screens
pub mod text {
    pub const NO_DATA: &str = "No data found";
    pub const EXIT_REQUESTED: &str = "Received exit request, terminating...";
    pub const INVALID_OPTION: &str = "Invalid option, try again:";
    pub const OPTION_PROMPT: &str = "Enter an option index:";
    pub const OPENER_LIMIT: &str = "Cannot add more than 20 openers";
    pub const NO_OPENERS: &str = "Event has no openers to remove";
    pub const EVENT_SAVED: &str = "Event saved";
    pub const PURCHASE_LOCKED: &str = "Past events are always marked as purchased";
}

/// Labels for actions that appear on more than one screen
pub mod actions {
    pub const BACK: &str = "Back";
    pub const EXIT: &str = "Exit";
    pub const CANCEL: &str = "Cancel";
    pub const NEXT_PAGE: &str = "Next Page";
    pub const PREVIOUS_PAGE: &str = "Previous Page";
    pub const GO_TO_PAGE: &str = "Go To Page";
}

/// Kinds of collaborator operations that can fail in front of the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    SaveEvent,
    DeleteEvent,
    ReloadEvents,
}

impl Operation {
    fn verb(self) -> &'static str {
        match self {
            Operation::SaveEvent => "save event",
            Operation::DeleteEvent => "delete event",
            Operation::ReloadEvents => "reload events",
        }
    }
}

/// Single display line for a failed collaborator call: `Failed to X: <reason>`
pub fn failure(operation: Operation, reason: impl std::fmt::Display) -> String {
    format!("Failed to {}: {}", operation.verb(), reason)
}

/// Message shown when an entity cannot be saved because fields are blank
pub fn missing_fields(entity: &str, fields: &[&str]) -> String {
    format!("{} is missing: {}", entity, fields.join(", "))
}
