//! Diagnosis endpoints.
//!
//! - `POST /api/vision-diagnosis`: image through vision, catalog and advisory
//! - `POST /api/diagnose-description`: same pipeline from a written analysis
//! - `GET /api/last-diagnosis`: most recent result of either
//! - `GET /api/report-context`: last diagnosis and simulation in one snapshot

use axum::extract::State;
use axum::Json;
use base64::Engine;
use serde::Deserialize;

use super::blocking;
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::pipeline::{DiagnosisInput, DiagnosisResult};
use crate::session::ReportContext;

fn default_language() -> String {
    "English".to_string()
}

#[derive(Deserialize)]
pub struct VisionRequest {
    pub image_base64: String,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Deserialize)]
pub struct DescriptionRequest {
    pub description: String,
    #[serde(default = "default_language")]
    pub language: String,
}

/// Reject payloads that are not standard base64 before spending a vision call.
fn validate_image(image_base64: &str) -> Result<(), ApiError> {
    if image_base64.trim().is_empty() {
        return Err(ApiError::BadRequest("image_base64 must not be empty".into()));
    }
    base64::engine::general_purpose::STANDARD
        .decode(image_base64.trim())
        .map(|_| ())
        .map_err(|e| ApiError::BadRequest(format!("image_base64 is not valid base64: {e}")))
}

async fn run(
    ctx: ApiContext,
    input: DiagnosisInput,
    language: String,
) -> Result<Json<DiagnosisResult>, ApiError> {
    let result = blocking(move || ctx.pipeline.diagnose_into(&ctx.session, input, &language))
        .await??;
    Ok(Json(result))
}

/// `POST /api/vision-diagnosis`
pub async fn vision(
    State(ctx): State<ApiContext>,
    Json(req): Json<VisionRequest>,
) -> Result<Json<DiagnosisResult>, ApiError> {
    validate_image(&req.image_base64)?;
    let image = req.image_base64.trim().to_string();
    run(ctx, DiagnosisInput::Image(image), req.language).await
}

/// `POST /api/diagnose-description`
pub async fn description(
    State(ctx): State<ApiContext>,
    Json(req): Json<DescriptionRequest>,
) -> Result<Json<DiagnosisResult>, ApiError> {
    if req.description.trim().is_empty() {
        return Err(ApiError::BadRequest("description must not be empty".into()));
    }
    run(ctx, DiagnosisInput::Description(req.description), req.language).await
}

/// `GET /api/last-diagnosis`
pub async fn last(State(ctx): State<ApiContext>) -> Result<Json<DiagnosisResult>, ApiError> {
    ctx.session
        .last_diagnosis()?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("No diagnosis recorded yet".into()))
}

/// `GET /api/report-context`
pub async fn report_context(
    State(ctx): State<ApiContext>,
) -> Result<Json<ReportContext>, ApiError> {
    Ok(Json(ctx.session.report_context()?))
}
