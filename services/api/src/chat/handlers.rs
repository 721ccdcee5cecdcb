use axum::Json;
use tripr_common::error::TriprError;
use tripr_common::types::{ApiEnvelope, ChatReply, ChatRequest};

use super::replies::reply_for;
use crate::error::ApiError;

pub async fn chat(Json(req): Json<ChatRequest>) -> Result<Json<ApiEnvelope<ChatReply>>, ApiError> {
    if req.message.trim().is_empty() {
        return Err(TriprError::Validation("message must not be empty".to_owned()).into());
    }

    let text = reply_for(&req.message);
    tracing::debug!(reply = text, "chat reply");
    Ok(Json(ApiEnvelope::ok(ChatReply {
        text: text.to_owned(),
    })))
}
