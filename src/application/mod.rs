//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（StoryModel、StoryBackend）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    GenerateStoryCommand,
    GenerateStoryResponse,
    SubmitOutcome,
    // Handlers
    handlers::{GenerateStoryConfig, GenerateStoryHandler, PromptSubmitter},
};

pub use error::ApplicationError;

pub use ports::{
    // Story model
    GeneratedImage,
    ImageRequest,
    ModelError,
    StoryModelPort,
    TextRequest,
    // Story backend
    StoryBackendPort,
    SubmitError,
};

pub use queries::{
    GetPageView,
    // Handlers
    handlers::GetPageViewHandler,
};
