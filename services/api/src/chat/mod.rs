pub mod handlers;
mod replies;

use axum::routing::post;
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/chat", post(handlers::chat))
}
