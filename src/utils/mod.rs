//! 工具模块
//!
//! 配置路径和日志初始化

pub mod config_paths;
pub mod logger;

pub use config_paths::ConfigPaths;
pub use logger::init_logger;
