use crate::api::ApiResponse;
use crate::error::{AppError, Result};
use crate::types::{PairSignals, Timeframe, TimeframeSignal};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:pair", get(get_pair_signals))
        .route("/:pair/:timeframe", get(get_timeframe_signal))
}

/// All timeframe signals for a pair, plus the aggregated master signal.
async fn get_pair_signals(
    State(state): State<AppState>,
    Path(pair): Path<String>,
) -> Result<Json<ApiResponse<PairSignals>>> {
    let pair = pair.to_uppercase();
    let signals = state
        .signals
        .pair_signals(&pair)
        .ok_or_else(|| AppError::NotFound(format!("no signals for pair {pair}")))?;
    Ok(Json(ApiResponse::new(signals)))
}

async fn get_timeframe_signal(
    State(state): State<AppState>,
    Path((pair, timeframe)): Path<(String, String)>,
) -> Result<Json<ApiResponse<TimeframeSignal>>> {
    let pair = pair.to_uppercase();
    let timeframe = Timeframe::from_str(&timeframe)
        .ok_or_else(|| AppError::BadRequest(format!("unknown timeframe {timeframe}")))?;
    let signal = state
        .signals
        .get(&pair, timeframe)
        .ok_or_else(|| AppError::NotFound(format!("no signal for pair {pair}")))?;
    Ok(Json(ApiResponse::new(signal)))
}
