use axum::response::{IntoResponse, Response};
use axum::Json;
use crate::models::SearchOutcome;

/// Number of listing items left out because their article failed to load.
pub const DROPPED_ITEMS_HEADER: &str = "x-dropped-items";

/// JSON array of records with the dropped count as a header.
pub fn search_results(outcome: SearchOutcome) -> Response {
    (
        [(DROPPED_ITEMS_HEADER, outcome.dropped.to_string())],
        Json(outcome.records),
    )
        .into_response()
}
