//! Story Backend Port - 故事生成后端
//!
//! 阅读端调用的 `POST /generate` 传输抽象

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::story::{GenerationRequest, Story};

/// 提交错误
///
/// 对用户统一展示为一条“生成失败”提示，这里保留类别用于日志
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Backend returned HTTP {status}")]
    Backend { status: u16 },

    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Story Backend Port
///
/// 单次请求，无重试、无取消
#[async_trait]
pub trait StoryBackendPort: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<Story, SubmitError>;
}
