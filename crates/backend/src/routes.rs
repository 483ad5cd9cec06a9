use axum::http::{header, Method};
use axum::{middleware, routing::{any, get}, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::logger::request_logger;
use crate::shared::upstream::Upstream;

/// Состояние, общее для всех хендлеров
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn Upstream>,
}

impl AppState {
    pub fn new(upstream: impl Upstream + 'static) -> Self {
        Self {
            upstream: Arc::new(upstream),
        }
    }
}

/// Разрешаем любые источники: прокси для того и нужен
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // PHP BACKEND PROXY
        // ========================================
        .route("/api", any(handlers::proxy::forward))
        .route("/api/", any(handlers::proxy::forward))
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors_layer())
}
