//! Backend Adapter - 故事生成后端客户端

mod http_story_client;

pub use http_story_client::*;
