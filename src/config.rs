//! 配置模块
//!
//! REST 服务地址默认是固定常量，配置文件只用于覆盖这些默认值和日志设置。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 默认服务主机
pub const DEFAULT_HOST: &str = "localhost";
/// 默认服务端口
pub const DEFAULT_PORT: u16 = 8081;
/// 商品集合路径
pub const SHOP_PATH: &str = "/shop";

/// 应用配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// REST 服务配置
    #[serde(default)]
    pub api: ApiConfig,
    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// REST 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// 服务主机
    pub host: String,
    /// 服务端口
    pub port: u16,
    /// 商品集合路径
    pub path: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志文件目录
    pub log_dir: PathBuf,
    /// 日志文件名前缀
    pub file_prefix: String,
    /// 是否启用控制台输出 (stderr)
    pub console_output: bool,
    /// 是否写入按天滚动的日志文件
    pub file_output: bool,
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            path: SHOP_PATH.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("./logs"),
            file_prefix: "product-view".to_string(),
            console_output: true,
            file_output: false,
            level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// `http://host:port`
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// 集合端点的完整地址，例如 `http://localhost:8081/shop`
    pub fn collection_url(&self) -> String {
        format!("{}{}", self.base_url(), self.path)
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::FileWrite(e.to_string()))?;
        }

        fs::write(path.as_ref(), content).map_err(|e| ConfigError::FileWrite(e.to_string()))?;

        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.host.is_empty() {
            return Err(ConfigError::Validation("服务主机不能为空".to_string()));
        }
        if self.api.port == 0 {
            return Err(ConfigError::Validation("服务端口必须大于0".to_string()));
        }
        if !self.api.path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "集合路径必须以 / 开头: {}",
                self.api.path
            )));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }
        if self.logging.file_output && self.logging.file_prefix.is_empty() {
            return Err(ConfigError::Validation("日志文件前缀不能为空".to_string()));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("文件写入错误: {0}")]
    FileWrite(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置序列化错误: {0}")]
    Serialize(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 加载配置：显式路径优先，其次探测默认位置，最后使用默认值
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let config = match explicit {
        Some(path) => Config::load_from_file(path)?,
        None => probe_default_paths()?,
    };
    config.validate()?;
    Ok(config)
}

fn probe_default_paths() -> Result<Config, ConfigError> {
    let config_paths = ["config.toml", "./config/config.toml"];

    for path in &config_paths {
        if Path::new(path).exists() {
            return Config::load_from_file(path);
        }
    }

    Ok(Config::default())
}
