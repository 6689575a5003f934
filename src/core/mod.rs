//! 核心数据模型
//!
//! 演出、艺人、场馆等核心数据结构

pub mod models;

pub use models::{Artist, Event, EventDetails, EventType, Venue};
