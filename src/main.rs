//! Storybook - 故事生成服务
//!
//! - Domain: story/, book/ (Bounded Contexts)
//! - Application: commands, queries, ports
//! - Infrastructure: http, adapters

use std::sync::Arc;

use storybook::application::{GenerateStoryConfig, StoryModelPort};
use storybook::config::{load_config, print_config, AppConfig, LogConfig, ModelProvider};
use storybook::infrastructure::adapters::{FakeStoryModel, GeminiClient, GeminiClientConfig};
use storybook::infrastructure::http::{AppState, HttpServer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Storybook - story generator service");
    print_config(&config);

    let model = build_model(&config)?;

    let story_config = GenerateStoryConfig {
        part_count: config.story.part_count,
        max_model_calls: config.story.max_model_calls,
        ..Default::default()
    };
    let state = AppState::new(model, story_config);

    let server = HttpServer::new(config.server.clone(), state);

    // 启动服务器（带优雅关闭）
    server.run_with_shutdown(shutdown_signal()).await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志；`RUST_LOG` 优先于配置文件
fn init_tracing(log: &LogConfig) {
    let default_filter = format!(
        "{},storybook={},tower_http=debug",
        log.level, log.level
    );
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// 按配置选择模型适配器
fn build_model(config: &AppConfig) -> anyhow::Result<Arc<dyn StoryModelPort>> {
    match config.model.provider {
        ModelProvider::Gemini => {
            let api_key = config.model.api_key.clone().unwrap_or_default();
            let client_config = GeminiClientConfig {
                text_model: config.model.text_model.clone(),
                image_model: config.model.image_model.clone(),
                ..GeminiClientConfig::new(api_key)
                    .with_base_url(&config.model.base_url)
                    .with_timeout(config.model.timeout_secs)
            };
            Ok(Arc::new(GeminiClient::new(client_config)?))
        }
        ModelProvider::Fake => {
            tracing::warn!("Using offline fake model, stories are canned");
            Ok(Arc::new(FakeStoryModel::with_defaults()))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
