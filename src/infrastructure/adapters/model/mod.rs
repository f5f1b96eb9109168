//! Model Adapter - 生成式模型客户端实现

mod fake_model;
mod gemini_client;

pub use fake_model::{FakeStoryModel, FakeStoryModelConfig};
pub use gemini_client::*;
