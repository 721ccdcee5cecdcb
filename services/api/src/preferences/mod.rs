pub mod handlers;

use axum::routing::get;
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/preferences/{user_id}",
        get(handlers::get_preferences).post(handlers::save_preferences),
    )
}
