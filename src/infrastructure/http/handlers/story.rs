//! Story Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::GenerateStoryCommand;
use crate::infrastructure::http::dto::{GenerateRequest, StoryResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::ApiJson;
use crate::infrastructure::http::state::AppState;

/// POST /generate - 生成带插图的故事
pub async fn generate_story(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<GenerateRequest>,
) -> Result<Json<StoryResponse>, ApiError> {
    let cmd = GenerateStoryCommand { prompt: req.prompt };

    let result = state.generate_story_handler.handle(cmd).await?;

    Ok(Json(result.story.into()))
}
