pub mod handlers;

use axum::routing::{get, post};
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/group", get(handlers::list_members))
        .route("/api/group/add", post(handlers::add_member))
}
