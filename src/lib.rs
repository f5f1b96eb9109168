//! Storybook - AI 插图故事书
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Story Context: 提示词、故事结构、模型输出解析、占位插图
//! - Book Context: 分页、轻量标记渲染、单页视图、阅读会话状态机
//!
//! 应用层 (application/):
//! - Ports: 端口定义（StoryModelPort, StoryBackendPort）
//! - Commands: 生成故事、提交提示词
//! - Queries: 单页视图查询
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 故事生成 API + 书页渲染
//! - Adapters: Gemini 客户端、离线假模型、故事后端 HTTP 客户端

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
