//! Unified error handling for gigbook
//!
//! Errors are grouped by who is responsible for them:
//! - user input problems never leave the prompt layer
//! - collaborator failures (stores, providers) are shown to the user and the screen stays put
//! - navigation faults are programming errors and end the session

use std::fmt;
use std::io;

use chrono::NaiveDate;
use thiserror::Error;

use crate::core::models::EventType;
use crate::tui::screens::ScreenId;

/// Broad classification used by the binary to decide how to terminate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Input stream ended; the session is over but nothing went wrong
    Shutdown,
    /// A collaborator reported a failure
    Collaborator,
    /// Broken internal invariant
    Fatal,
    Configuration,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Shutdown => write!(f, "shutdown"),
            ErrorCategory::Collaborator => write!(f, "collaborator"),
            ErrorCategory::Fatal => write!(f, "fatal"),
            ErrorCategory::Configuration => write!(f, "configuration"),
        }
    }
}

/// Saved event store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("event is already saved")]
    DuplicateEvent,

    #[error("event not found")]
    EventNotFound,

    #[error("event is incomplete: {0}")]
    IncompleteEvent(String),

    /// A past event dated after today, or a future event dated before it
    #[error("event dated {date} cannot be saved as {event_type}")]
    DateOutsideType { date: NaiveDate, event_type: EventType },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Upcoming event provider errors
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("event feed unavailable: {0}")]
    FeedUnavailable(String),

    #[error("invalid location '{city}, {state}'")]
    InvalidLocation { city: String, state: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Errors raised while reading a line from the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    #[error("input stream closed")]
    Closed,

    #[error("failed to read input: {0}")]
    Read(String),
}

impl From<io::Error> for PromptError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => PromptError::Closed,
            _ => PromptError::Read(err.to_string()),
        }
    }
}

/// A validator rejected the entered text; the message is shown before re-prompting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Navigation engine errors
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("navigation history underflow: cannot go back from the root screen")]
    HistoryUnderflow,

    #[error("unknown screen {0}")]
    UnknownScreen(ScreenId),

    #[error("screen '{screen}' expected context property {expected}, found {found}")]
    ContextMismatch {
        screen: String,
        expected: &'static str,
        found: String,
    },

    #[error("screen '{screen}' requires a context property at position {index}")]
    MissingContext { screen: String, index: usize },

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

impl NavigationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            NavigationError::Prompt(PromptError::Closed) => ErrorCategory::Shutdown,
            NavigationError::Prompt(PromptError::Read(_)) => ErrorCategory::Collaborator,
            _ => ErrorCategory::Fatal,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot find home directory")]
    HomeDirNotFound,

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
pub type ProviderResult<T> = Result<T, ProviderError>;
pub type NavResult<T> = Result<T, NavigationError>;
