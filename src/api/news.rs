use crate::api::ApiResponse;
use crate::types::NewsResponse;
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_news))
}

/// Latest headlines with the count of items new since the previous poll.
async fn get_news(State(state): State<AppState>) -> Json<ApiResponse<NewsResponse>> {
    let items = state.news.items().await;
    let new_arrivals = state.news.new_arrivals().await;
    Json(ApiResponse::new(NewsResponse {
        items,
        new_arrivals,
        timestamp: chrono::Utc::now().timestamp_millis(),
    }))
}
