//! HTTP API routers.

pub mod health;
pub mod indicators;
pub mod news;
pub mod predictions;
pub mod signals;

use crate::AppState;
use axum::Router;
use serde::Serialize;

/// API response wrapper.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Assemble all API routes under /api.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/api/signals", signals::router())
        .nest("/api/indicators", indicators::router())
        .nest("/api/predictions", predictions::router())
        .nest("/api/news", news::router())
        .nest("/api/health", health::router())
}
