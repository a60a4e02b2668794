use super::state::AppState;
use crate::config::AnalysisConfig;
use crate::decode::{decode_frame, DecodeError};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use chroma_analysis::dominant::{matches_target, AnalysisError};
use chroma_analysis::frame::FrameError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    pub target_color: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub target_color: String,
    pub dominant_color: &'static str,
    pub r#match: bool,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl ApiError {
    // Caller mistakes map to 400, anything unexpected stays a 500.
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::Decode(_) => StatusCode::BAD_REQUEST,
            ApiError::Analysis(AnalysisError::Frame(FrameError::ZeroDimensions)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Analysis(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

pub async fn analyze_color(
    State(state): State<AppState>,
    Query(query): Query<AnalyzeQuery>,
    body: Bytes,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let target = query
        .target_color
        .ok_or(ApiError::MissingField("target_color"))?;
    if body.is_empty() {
        return Err(ApiError::MissingField("image"));
    }

    let frame = decode_frame(&body)?;
    let params = state.get_analysis().await.extract_params();
    let result = matches_target(&frame, &target, &params)?;

    tracing::info!(
        target_color = %result.target,
        dominant = %result.label,
        matched = result.matched,
        width = frame.width,
        height = frame.height,
        "analyzed image"
    );

    Ok(Json(AnalyzeResponse {
        target_color: result.target,
        dominant_color: result.label.name(),
        r#match: result.matched,
    }))
}

pub async fn get_config_handler(State(state): State<AppState>) -> Json<AnalysisConfig> {
    Json(state.get_analysis().await)
}

pub async fn update_config_handler(
    State(state): State<AppState>,
    Json(new_analysis_cfg): Json<AnalysisConfig>,
) -> impl IntoResponse {
    tracing::info!("Received configuration update request");
    let mut config = state.config.write().await;
    tracing::debug!("New Config Values: {:?}", new_analysis_cfg);
    config.analysis = new_analysis_cfg;
    tracing::info!("Configuration successfully updated in AppState");
    StatusCode::OK
}
