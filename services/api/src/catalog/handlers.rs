use axum::extract::Query;
use axum::Json;
use tripr_catalog::{builtin_trips, SpotCatalog};
use tripr_filter::{filter_and_sort, suggest_spots};
use tripr_state::{SuggestForm, TripFilterForm};

use crate::catalog::responses::{SpotsResponse, TripsResponse};
use crate::error::ApiError;

pub async fn list_spots(Query(form): Query<SuggestForm>) -> Result<Json<SpotsResponse>, ApiError> {
    let query = form.parse()?;
    let outcome = suggest_spots(SpotCatalog::builtin(), &query);
    let count = outcome.len();
    Ok(Json(SpotsResponse {
        data: outcome.items,
        count,
        fallback: outcome.fallback,
    }))
}

pub async fn list_trips(
    Query(form): Query<TripFilterForm>,
) -> Result<Json<TripsResponse>, ApiError> {
    let query = form.parse()?;
    let data = filter_and_sort(&builtin_trips(), &query);
    let count = data.len();
    Ok(Json(TripsResponse { data, count }))
}
