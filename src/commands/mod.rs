//! CLI 命令处理模块
//!
//! 处理命令行接口的解析

pub mod parser;

// Re-exports (used by main.rs)
pub use parser::Cli;
