use std::io;

use thiserror::Error;

/// 应用级错误
///
/// 猜错不是错误，只是 `Phase::Wrong`。这里只有终端、配置等外部失败。
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O 错误: {0}")]
    Io(#[from] io::Error),

    #[error("配置文件解析失败: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("无法获取用户配置目录")]
    NoConfigDir,

    #[error("无法获取用户数据目录")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, AppError>;
