//! Application State
//!
//! 所有 Handler 共享的只读状态

use std::sync::Arc;

use crate::application::{
    GenerateStoryConfig, GenerateStoryHandler, GetPageViewHandler, StoryModelPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub model: Arc<dyn StoryModelPort>,

    // ========== Command Handlers ==========
    pub generate_story_handler: GenerateStoryHandler,

    // ========== Query Handlers ==========
    pub get_page_view_handler: GetPageViewHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(model: Arc<dyn StoryModelPort>, story_config: GenerateStoryConfig) -> Self {
        Self {
            model: model.clone(),
            generate_story_handler: GenerateStoryHandler::new(model, story_config),
            get_page_view_handler: GetPageViewHandler::new(),
        }
    }
}
