//! Common utilities and constants used across the project

pub mod constants;
pub mod messages;
