//! HTTP Story Client - 调用故事生成后端
//!
//! 实现 StoryBackendPort trait
//!
//! 后端 API:
//! POST {base_url}/generate
//! Request: {"prompt": "..."}
//! Response: {"title": "...", "parts": [{"text": "...", "image": "..."}]}
//!
//! 单次请求：无重试、无超时、无取消

use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{StoryBackendPort, SubmitError};
use crate::domain::story::{GenerationRequest, Story};

/// HTTP Story 客户端配置
#[derive(Debug, Clone)]
pub struct HttpStoryClientConfig {
    /// 后端基础 URL
    pub base_url: String,
}

impl Default for HttpStoryClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}

impl HttpStoryClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

pub struct HttpStoryClient {
    client: Client,
    config: HttpStoryClientConfig,
}

impl HttpStoryClient {
    pub fn new(config: HttpStoryClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn generate_url(&self) -> String {
        format!("{}/generate", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl StoryBackendPort for HttpStoryClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<Story, SubmitError> {
        tracing::debug!(url = %self.generate_url(), "Sending generate request");

        let response = self
            .client
            .post(self.generate_url())
            .json(request)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Backend {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let story: Story =
            serde_json::from_slice(&body).map_err(|e| SubmitError::Malformed(e.to_string()))?;

        tracing::debug!(title = %story.title, parts = story.part_count(), "Story decoded");
        Ok(story)
    }
}
