//! Conversational endpoints.
//!
//! - `POST /api/chat`: regional advisor reply with spoken summary
//! - `POST /api/translate`: translate advisory text

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::blocking;
use crate::advisory::{ChatReply, ChatRequest, Translation};
use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub language: String,
}

/// `POST /api/chat`
pub async fn send(
    State(ctx): State<ApiContext>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    if req.message.trim().is_empty() {
        return Err(ApiError::BadRequest("Message cannot be empty".into()));
    }
    let reply = blocking(move || ctx.chat.reply(&req)).await?;
    Ok(Json(reply))
}

/// `POST /api/translate`
pub async fn translate(
    State(ctx): State<ApiContext>,
    Json(req): Json<TranslateRequest>,
) -> Result<Json<Translation>, ApiError> {
    let translation = blocking(move || ctx.translator.translate(&req.text, &req.language)).await?;
    Ok(Json(translation))
}
