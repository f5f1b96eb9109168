//! Story Model Port - 生成式模型抽象
//!
//! 定义文本与图片生成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// 模型调用错误
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Quota exhausted: {0}")]
    QuotaExhausted(String),

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ModelError {
    /// 是否为配额耗尽（429 / RESOURCE_EXHAUSTED）
    pub fn is_quota_exhausted(&self) -> bool {
        matches!(self, Self::QuotaExhausted(_))
    }
}

/// 文本生成请求
#[derive(Debug, Clone)]
pub struct TextRequest {
    pub system_instruction: Option<String>,
    pub prompt: String,
    pub temperature: f32,
    pub max_output_tokens: Option<u32>,
}

/// 图片生成请求
#[derive(Debug, Clone)]
pub struct ImageRequest {
    pub prompt: String,
    pub temperature: f32,
}

/// 生成的图片（原始字节）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// Story Model Port
///
/// 外部生成式 AI 服务的抽象接口
#[async_trait]
pub trait StoryModelPort: Send + Sync {
    /// 生成文本，返回模型的原始输出
    async fn generate_text(&self, request: TextRequest) -> Result<String, ModelError>;

    /// 生成图片
    ///
    /// 模型正常响应但未返回图片数据时返回 `Ok(None)`
    async fn generate_image(
        &self,
        request: ImageRequest,
    ) -> Result<Option<GeneratedImage>, ModelError>;

    /// 检查模型服务是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
