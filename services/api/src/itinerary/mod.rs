pub mod handlers;
mod sample;

use axum::routing::post;
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/itinerary/generate", post(handlers::generate_itinerary))
}
