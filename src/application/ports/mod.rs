//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod story_backend;
mod story_model;

pub use story_backend::{StoryBackendPort, SubmitError};
pub use story_model::{
    GeneratedImage, ImageRequest, ModelError, StoryModelPort, TextRequest,
};
