//! HTTP Routes
//!
//! API Endpoints:
//! - /generate   POST  合成中转（JSON 入参，audio/mpeg 出参）
//! - /api/ping   GET   健康检查
//! - 其余路径           客户端页面（静态目录或内嵌页面，按配置二选一）

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::config::StaticFilesConfig;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
///
/// 静态文件服务启用时，未匹配的路径从静态目录提供（根路径由其中的
/// index.html 承担）；未启用时回退到构建期内嵌的客户端页面
pub fn create_routes(static_files: &StaticFilesConfig) -> Router<Arc<AppState>> {
    let router = Router::new()
        .route("/generate", post(handlers::generate))
        .route("/api/ping", get(handlers::ping));

    if static_files.enabled {
        router.fallback_service(ServeDir::new(&static_files.dir))
    } else {
        router.fallback(handlers::index_page)
    }
}
