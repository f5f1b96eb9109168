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

use super::types::{AppConfig, ModelProvider};

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

/// 未配置 `model.api_key` 时回退读取的环境变量
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `STORYBOOK_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `STORYBOOK_SERVER__PORT=8080`
/// - `STORYBOOK_SERVER__CORS_ORIGINS=http://localhost:3000,http://localhost:5173`
/// - `STORYBOOK_MODEL__PROVIDER=fake`
/// - `STORYBOOK_STORY__PART_COUNT=6`
/// - `GEMINI_API_KEY=...`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("model.provider", "gemini")?
        .set_default("model.base_url", "https://generativelanguage.googleapis.com")?
        .set_default("model.text_model", "gemini-2.5-flash")?
        .set_default("model.image_model", "gemini-2.0-flash-preview-image-generation")?
        .set_default("model.timeout_secs", 120)?
        .set_default("story.part_count", 8)?
        .set_default("story.max_model_calls", 15)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: STORYBOOK_MODEL__PROVIDER=fake
    builder = builder.add_source(
        Environment::with_prefix("STORYBOOK")
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("server.cors_origins")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let mut app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    if !app_config.model.has_api_key() {
        app_config.model.api_key = std::env::var(API_KEY_ENV).ok();
    }

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.story.part_count == 0 {
        return Err(ConfigError::ValidationError(
            "Story part count must be at least 1".to_string(),
        ));
    }

    if config.story.max_model_calls == 0 {
        return Err(ConfigError::ValidationError(
            "Max model calls must be at least 1".to_string(),
        ));
    }

    if config.model.provider == ModelProvider::Gemini {
        if config.model.base_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "Model base URL cannot be empty".to_string(),
            ));
        }
        if !config.model.has_api_key() {
            return Err(ConfigError::ValidationError(format!(
                "{} environment variable is required",
                API_KEY_ENV
            )));
        }
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("CORS Origins: {:?}", config.server.cors_origins);
    if config.server.static_files.enabled {
        tracing::info!(
            "Static Files: {:?} at {}",
            config.server.static_files.dir,
            config.server.static_files.path
        );
    }
    tracing::info!("Model Provider: {}", config.model.provider.as_str());
    if config.model.provider == ModelProvider::Gemini {
        tracing::info!("Model URL: {}", config.model.base_url);
        tracing::info!("Text Model: {}", config.model.text_model);
        tracing::info!("Image Model: {}", config.model.image_model);
        tracing::info!("Model Timeout: {}s", config.model.timeout_secs);
    }
    tracing::info!("Story Parts: {}", config.story.part_count);
    tracing::info!("Max Model Calls: {}", config.story.max_model_calls);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
