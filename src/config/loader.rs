//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `TTSGATE_`，层级分隔符 `__`；另支持裸 `PORT` 覆盖端口）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `TTSGATE_SERVER__HOST=127.0.0.1`
/// - `TTSGATE_SERVER__PORT=8081`
/// - `TTSGATE_TTS__URL=http://tts-server:8080`
/// - `PORT=8081`（部署平台惯例，优先级最高）
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("server.static_files.enabled", false)?
        .set_default("server.static_files.dir", "public")?
        .set_default("tts.url", "http://localhost:8080")?
        .set_default("tts.timeout_secs", 0)?
        .set_default("log.level", "info")?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        // 搜索默认配置文件
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量
    // 前缀: TTSGATE_
    // 层级分隔符: __ (双下划线)
    // 例如: TTSGATE_TTS__URL=http://tts-server:8080
    builder = builder.add_source(
        Environment::with_prefix("TTSGATE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let mut app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    // 6. 裸 PORT 环境变量覆盖端口（部署平台惯例）
    apply_port_override(&mut app_config, std::env::var("PORT").ok())?;

    // 7. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 应用 PORT 环境变量覆盖
fn apply_port_override(
    config: &mut AppConfig,
    port: Option<String>,
) -> Result<(), ConfigError> {
    if let Some(raw) = port {
        let port: u16 = raw.trim().parse().map_err(|_| {
            ConfigError::ParseError(format!("Invalid PORT value: {}", raw))
        })?;
        config.server.port = port;
    }
    Ok(())
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    // 验证端口范围
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    // 验证上游 TTS URL
    if config.tts.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS URL cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Upstream TTS URL: {}", config.tts.url);
    if config.tts.timeout_secs > 0 {
        tracing::info!("TTS Timeout: {}s", config.tts.timeout_secs);
    } else {
        tracing::info!("TTS Timeout: disabled");
    }
    tracing::info!("Static Files Enabled: {}", config.server.static_files.enabled);
    if config.server.static_files.enabled {
        tracing::info!("Static Files Dir: {:?}", config.server.static_files.dir);
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
