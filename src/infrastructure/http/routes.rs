//! HTTP Routes
//!
//! API Endpoints:
//! - /                 GET   服务运行提示
//! - /generate         POST  生成故事（文本 + 插图）
//! - /api/ping         GET   存活检查
//! - /api/health       GET   健康检查（含模型服务）
//! - /api/book/page    POST  推导并渲染指定页

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/generate", post(handlers::generate_story))
        .nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/health", get(handlers::health))
        .nest("/book", book_routes())
}

/// Book 路由
fn book_routes() -> Router<Arc<AppState>> {
    Router::new().route("/page", post(handlers::render_page))
}
