//! HTTP Routes
//!
//! API Endpoints:
//! - /tts    GET  即时合成（text, lang, slow）
//! - /ping   GET  健康检查

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tts", get(handlers::render_tts))
        .route("/ping", get(handlers::ping))
}
