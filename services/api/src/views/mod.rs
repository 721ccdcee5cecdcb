pub mod handlers;

use axum::routing::get;
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/view/spots", get(handlers::spots_page))
        .route("/view/trips", get(handlers::trips_page))
}
