use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tripr_common::error::TriprError;

pub struct ApiError(pub TriprError);

impl From<TriprError> for ApiError {
    fn from(err: TriprError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            TriprError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            other => {
                tracing::error!(error = %other, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
