use axum::Json;
use tripr_common::types::{ApiEnvelope, ItineraryData, ItineraryRequest};

use super::sample::sample_itinerary;

/// Always answers with the same three days; the request only shows up in the log.
pub async fn generate_itinerary(
    Json(req): Json<ItineraryRequest>,
) -> Json<ApiEnvelope<ItineraryData>> {
    let selected: Vec<&str> = req.preferences.selected().collect();
    tracing::info!(budget = %req.budget, preferences = ?selected, "generating itinerary");

    Json(ApiEnvelope::ok(ItineraryData {
        itinerary: sample_itinerary(),
    }))
}
