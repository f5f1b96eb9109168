//! Ping / Health Handlers

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::state::AppState;

/// 根路径响应
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Root endpoint - 服务运行提示
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Story Generator API is running!",
    })
}

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Ping endpoint - 健康检查
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health 响应
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_available: bool,
}

/// Health endpoint - 同时检查模型服务
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let model_available = state.model.health_check().await;
    Json(HealthResponse {
        status: if model_available { "ok" } else { "degraded" },
        model_available,
    })
}
