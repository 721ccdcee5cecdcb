use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::Html;
use tripr_catalog::{builtin_trips, SpotCatalog};
use tripr_common::error::{TriprError, TriprResult};
use tripr_filter::{filter_and_sort, suggest_spots};
use tripr_render::{render, HtmlSurface, Surface, Theme, SPOTS_EMPTY_MESSAGE, TRIPS_EMPTY_MESSAGE};
use tripr_state::{SuggestForm, TripFilterForm};

type Page = (StatusCode, Html<String>);

/// A bad form renders the page with the validation message in place of results.
fn page(mut surface: HtmlSurface, result: TriprResult<()>) -> Page {
    let status = match result {
        Ok(()) => StatusCode::OK,
        Err(TriprError::Validation(msg)) => {
            surface.clear();
            surface.show_message(&msg);
            StatusCode::BAD_REQUEST
        }
        Err(other) => {
            tracing::error!(error = %other, "page render failed");
            surface.clear();
            surface.show_message("Something went wrong.");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Html(surface.page().into_string()))
}

pub async fn spots_page(Query(form): Query<SuggestForm>, Query(theme): Query<Theme>) -> Page {
    let mut surface = HtmlSurface::new("Suggested Spots", theme);
    let result = form.parse().map(|query| {
        let outcome = suggest_spots(SpotCatalog::builtin(), &query);
        render(&mut surface, &outcome.items, SPOTS_EMPTY_MESSAGE);
    });
    page(surface, result)
}

pub async fn trips_page(Query(form): Query<TripFilterForm>, Query(theme): Query<Theme>) -> Page {
    let mut surface = HtmlSurface::new("Browse Trips", theme);
    let result = form.parse().map(|query| {
        let trips = filter_and_sort(&builtin_trips(), &query);
        render(&mut surface, &trips, TRIPS_EMPTY_MESSAGE);
    });
    page(surface, result)
}
