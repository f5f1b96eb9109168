//! Fake Story Model - 离线模型实现
//!
//! 不调用外部服务，始终返回固定结构的故事与 1x1 PNG，用于本地开发与测试

use async_trait::async_trait;
use serde_json::json;

use crate::application::ports::{
    GeneratedImage, ImageRequest, ModelError, StoryModelPort, TextRequest,
};

/// 1x1 透明 PNG
const PIXEL_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// Fake Model 配置
#[derive(Debug, Clone)]
pub struct FakeStoryModelConfig {
    /// 返回的片段数
    pub part_count: usize,
    /// 模拟推理延迟（毫秒）
    pub latency_ms: u64,
}

impl Default for FakeStoryModelConfig {
    fn default() -> Self {
        Self {
            part_count: 8,
            latency_ms: 0,
        }
    }
}

pub struct FakeStoryModel {
    config: FakeStoryModelConfig,
}

impl FakeStoryModel {
    pub fn new(config: FakeStoryModelConfig) -> Self {
        tracing::info!(
            part_count = config.part_count,
            latency_ms = config.latency_ms,
            "FakeStoryModel initialized"
        );
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(FakeStoryModelConfig::default())
    }

    async fn simulate_latency(&self) {
        if self.config.latency_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(self.config.latency_ms)).await;
        }
    }
}

#[async_trait]
impl StoryModelPort for FakeStoryModel {
    async fn generate_text(&self, request: TextRequest) -> Result<String, ModelError> {
        tracing::debug!(prompt_len = request.prompt.len(), "FakeStoryModel: returning fixed story");
        self.simulate_latency().await;

        let parts: Vec<_> = (1..=self.config.part_count)
            .map(|n| {
                json!({
                    "part_number": n,
                    "content": format!(
                        "## Chapter {}\n\nIn part {} of the tale, the **little hero** found something wonderful.",
                        n, n
                    ),
                })
            })
            .collect();

        Ok(json!({ "title": "A Test Adventure", "parts": parts }).to_string())
    }

    async fn generate_image(
        &self,
        _request: ImageRequest,
    ) -> Result<Option<GeneratedImage>, ModelError> {
        self.simulate_latency().await;

        Ok(Some(GeneratedImage {
            mime_type: "image/png".to_string(),
            data: PIXEL_PNG.to_vec(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::story::parse_story_response;

    #[tokio::test]
    async fn test_fake_story_parses() {
        let model = FakeStoryModel::new(FakeStoryModelConfig {
            part_count: 3,
            latency_ms: 0,
        });
        let raw = model
            .generate_text(TextRequest {
                system_instruction: None,
                prompt: "mouse".into(),
                temperature: 0.8,
                max_output_tokens: None,
            })
            .await
            .unwrap();

        let draft = parse_story_response(&raw, 3).unwrap();
        assert_eq!(draft.title, "A Test Adventure");
        assert_eq!(draft.parts.len(), 3);
        assert!(draft.parts[2].starts_with("## Chapter 3"));
    }

    #[tokio::test]
    async fn test_fake_image_is_png() {
        let image = FakeStoryModel::with_defaults()
            .generate_image(ImageRequest {
                prompt: "mouse".into(),
                temperature: 0.7,
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(&image.data[1..4], b"PNG");
    }
}
