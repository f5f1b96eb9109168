//! HTTP Layer - 故事生成 API + 书页渲染

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod render;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{build_cors, HttpServer};
pub use state::AppState;
