//! Book Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::GetPageView;
use crate::infrastructure::http::dto::{PageRequest, PageResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::ApiJson;
use crate::infrastructure::http::render::render_page_html;
use crate::infrastructure::http::state::AppState;

/// POST /api/book/page - 推导并渲染指定页
pub async fn render_page(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<PageRequest>,
) -> Result<Json<PageResponse>, ApiError> {
    let view = state.get_page_view_handler.handle(GetPageView {
        story: req.story,
        page: req.page,
    });
    let html = render_page_html(&view);

    Ok(Json(PageResponse::new(view, html)))
}
