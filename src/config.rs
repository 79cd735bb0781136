use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::Timings;

/// 配置文件结构
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timings: Timings,
}

/// 配置文件路径 (~/.config/digitspan/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().ok_or(AppError::NoConfigDir)?;
    Ok(dir.join("digitspan").join("config.toml"))
}

/// 从 TOML 文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}
