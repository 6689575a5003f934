//! 配置路径管理
//!
//! 设计原则:
//! - 持久化数据（配置、已保存的演出、演出源）保存在 ~/.gigbook/
//! - 运行时数据（日志）保存在 /tmp/.gigbook/

use std::path::PathBuf;

use crate::common::constants::files::{
    CONFIG_DIRECTORY, CONFIG_FILE, EVENTS_JSON, LOG_FILE, UPCOMING_JSON,
};
use crate::error::ConfigError;

/// 配置文件路径集合
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// 持久化配置目录（~/.gigbook/）
    pub config_dir: PathBuf,
    /// 运行时数据目录（/tmp/.gigbook/）
    pub runtime_dir: PathBuf,
    /// 主配置文件
    pub config_file: PathBuf,
    /// 已保存的演出
    pub data_file: PathBuf,
    /// 即将举行的演出源
    pub feed_file: PathBuf,
    /// 日志文件（保存在运行时目录）
    pub log_file: PathBuf,
}

impl ConfigPaths {
    /// 基于用户主目录创建配置路径
    pub fn new() -> Result<Self, ConfigError> {
        let home_dir = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
        Ok(Self::with_home(home_dir))
    }

    /// 基于任意根目录创建，测试用
    pub fn with_home(home_dir: PathBuf) -> Self {
        let config_dir = home_dir.join(CONFIG_DIRECTORY);

        // 运行时数据目录：使用系统临时目录（跨平台）
        let runtime_dir = std::env::temp_dir().join(CONFIG_DIRECTORY);

        Self {
            config_file: config_dir.join(CONFIG_FILE),
            data_file: config_dir.join(EVENTS_JSON),
            feed_file: config_dir.join(UPCOMING_JSON),
            log_file: runtime_dir.join(LOG_FILE),
            config_dir,
            runtime_dir,
        }
    }

    /// 确保配置目录存在
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.runtime_dir)?;
        Ok(())
    }
}
