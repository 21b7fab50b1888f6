//! Knowledge base endpoints.
//!
//! - `GET /api/knowledge/diseases`: canonical names in catalog order
//! - `GET /api/knowledge/resolve?name=`: resolve a free-text name

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::knowledge::ResolvedRecord;

#[derive(Serialize)]
pub struct DiseaseList {
    pub diseases: Vec<String>,
}

#[derive(Deserialize)]
pub struct ResolveQuery {
    #[serde(default)]
    pub name: String,
}

/// `GET /api/knowledge/diseases`
pub async fn list(State(ctx): State<ApiContext>) -> Json<DiseaseList> {
    Json(DiseaseList {
        diseases: ctx.pipeline.knowledge().names().map(str::to_string).collect(),
    })
}

/// `GET /api/knowledge/resolve?name=`: unknown names still return a record.
pub async fn resolve(
    State(ctx): State<ApiContext>,
    Query(query): Query<ResolveQuery>,
) -> Result<Json<ResolvedRecord>, ApiError> {
    ctx.pipeline
        .knowledge()
        .resolve(&query.name)
        .map(Json)
        .ok_or_else(|| ApiError::BadRequest("name must not be blank".into()))
}
