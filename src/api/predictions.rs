use crate::api::ApiResponse;
use crate::error::{AppError, Result};
use crate::types::{PredictionModel, PredictionView};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

pub fn router() -> Router<AppState> {
    Router::new().route("/:symbol", get(get_prediction))
}

#[derive(Deserialize)]
struct PredictionQuery {
    model: Option<String>,
}

/// Proxy a forecast request to the prediction service.
async fn get_prediction(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(query): Query<PredictionQuery>,
) -> Result<Json<ApiResponse<PredictionView>>> {
    let client = state
        .predictions
        .as_ref()
        .ok_or_else(|| AppError::BadRequest("prediction service not configured".into()))?;

    let model = match query.model.as_deref() {
        Some(name) => PredictionModel::from_str(name)
            .ok_or_else(|| AppError::BadRequest(format!("unknown model {name}")))?,
        None => PredictionModel::Ensemble,
    };

    let symbol = symbol.to_uppercase();
    let view = client
        .fetch(&symbol, model)
        .await
        .map_err(|err| AppError::ExternalApi(err.to_string()))?;
    Ok(Json(ApiResponse::new(view)))
}
