//! Story Context - 故事限界上下文
//!
//! 职责:
//! - 故事与故事片段值对象
//! - 模型输出解析与片段数量规整
//! - 占位插图

mod errors;
mod parser;
mod placeholder;
mod value_objects;

pub use errors::StoryError;
pub use parser::{
    clean_model_output, ensure_part_count, parse_story_response, StoryDraft, DEFAULT_TITLE,
};
pub use placeholder::{image_data_uri, is_placeholder, placeholder_image};
pub use value_objects::{GenerationRequest, Prompt, Story, StoryPart};
