//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod generate_story_handler;
mod prompt_submitter;

pub use generate_story_handler::*;
pub use prompt_submitter::*;
