//! gigbook
//!
//! Terminal menu for keeping track of concerts: the ones you went to, the
//! ones you have tickets for and the ones coming up in your city.

pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod storage;
pub mod tui;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::models::*;
pub use error::{NavigationError, StoreError};
