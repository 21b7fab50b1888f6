//! Agronomy endpoints.
//!
//! - `POST /api/predict-crop`: suitability scores for posted field conditions,
//!   or for the current simulation when no body is sent
//! - `POST /api/geographic-intelligence`: regional report with spoken summary
//! - `POST /api/simulate`: merge a partial simulation update

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::blocking;
use crate::agronomy::{
    geographic_intelligence, predict, CropPrediction, CropScore, FieldConditions, GeoRequest,
};
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::session::{SimulationParams, SimulationPatch};

#[derive(Serialize)]
pub struct GeoResponse {
    pub intelligence: String,
    pub scores: Vec<CropScore>,
    pub best_crop: String,
    pub speech_summary: String,
}

#[derive(Serialize)]
pub struct SimulationResponse {
    pub status: &'static str,
    pub state: SimulationParams,
}

/// `POST /api/predict-crop`
pub async fn predict_crop(
    State(ctx): State<ApiContext>,
    body: Option<Json<FieldConditions>>,
) -> Result<Json<CropPrediction>, ApiError> {
    let field = match body {
        Some(Json(field)) => field,
        None => FieldConditions::from(&ctx.session.simulation()?),
    };
    Ok(Json(predict(&field)))
}

/// `POST /api/geographic-intelligence`
pub async fn geographic(
    State(ctx): State<ApiContext>,
    Json(req): Json<GeoRequest>,
) -> Result<Json<GeoResponse>, ApiError> {
    let response = blocking(move || {
        let report = geographic_intelligence(&req);
        let speech = ctx.translator.translate(&report.speech_text, &req.language);
        GeoResponse {
            intelligence: report.intelligence,
            scores: report.scores,
            best_crop: report.best_crop,
            speech_summary: speech.summary,
        }
    })
    .await?;
    Ok(Json(response))
}

/// `POST /api/simulate`
pub async fn simulate(
    State(ctx): State<ApiContext>,
    Json(patch): Json<SimulationPatch>,
) -> Result<Json<SimulationResponse>, ApiError> {
    let state = ctx.session.update_simulation(patch)?;
    Ok(Json(SimulationResponse {
        status: "success",
        state,
    }))
}
