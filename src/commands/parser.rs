//! CLI 命令行参数解析
//!
//! 使用 clap 定义命令行接口。菜单本身没有子命令，所有选项都是配置覆盖项。

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::config::ConfigOverrides;

#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(
    name = "gigbook",
    about = "Keep track of the concerts you have been to and the ones coming up",
    version
)]
pub struct Cli {
    /// 配置文件路径（默认 ~/.gigbook/config.toml）
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// 日志级别或过滤表达式（默认读取 RUST_LOG）
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// 日志文件路径
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// 已保存演出的数据文件
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// 即将举行的演出源文件
    #[arg(long, value_name = "PATH")]
    pub feed_file: Option<PathBuf>,

    /// 即将举行演出的默认城市
    #[arg(long)]
    pub city: Option<String>,

    /// 默认州代码（两个字母）
    #[arg(long)]
    pub state: Option<String>,
}

impl Cli {
    /// 解析命令行参数（失败时由 clap 处理错误输出和退出）
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// 尝试解析命令行参数（用于测试或自定义 argv）
    pub fn try_parse_args_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }

    /// 转换为配置覆盖项
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
            data_file: self.data_file.clone(),
            feed_file: self.feed_file.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
        }
    }
}
