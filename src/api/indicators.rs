use crate::api::ApiResponse;
use crate::engine::IndicatorSet;
use crate::error::{AppError, Result};
use crate::types::Timeframe;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/:pair/:timeframe", get(get_indicators))
}

/// Full indicator series for a pair/timeframe, computed from the stored
/// candle window.
async fn get_indicators(
    State(state): State<AppState>,
    Path((pair, timeframe)): Path<(String, String)>,
) -> Result<Json<ApiResponse<IndicatorSet>>> {
    let pair = pair.to_uppercase();
    let timeframe = Timeframe::from_str(&timeframe)
        .ok_or_else(|| AppError::BadRequest(format!("unknown timeframe {timeframe}")))?;
    let candles = state.charts.window(&pair, timeframe);
    if candles.is_empty() {
        return Err(AppError::NotFound(format!("no candles for pair {pair}")));
    }
    Ok(Json(ApiResponse::new(IndicatorSet::compute(&candles))))
}
