use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use crate::api::models::{api_index, parse_pages, ScrapeParams};
use crate::api::response;
use crate::error::{AppError, Result};
use crate::search::search;
use crate::trending::trending;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/trending_keywords", get(trending_handler))
        .route("/scrape", get(scrape_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn root_handler() -> impl IntoResponse {
    Json(api_index())
}

async fn trending_handler(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    let headers = [("User-Agent", state.config.user_agent.as_str())];

    trending(&state.fetcher, &state.config.trending_url, &headers)
        .await
        .map(Json)
        .inspect_err(|e| error!(error = %e, "Trending keywords failed"))
}

async fn scrape_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response> {
    let params = ScrapeParams::from_pairs(pairs);
    let keyword = params
        .keyword()
        .ok_or_else(|| AppError::BadRequest("Keyword is required".to_string()))?;
    let pages = parse_pages(params.pages.as_deref(), state.config.default_pages);

    info!(%keyword, pages, "Processing scrape request");
    let start_time = std::time::Instant::now();

    let headers = [("User-Agent", state.config.user_agent.as_str())];
    let outcome = search(
        &state.fetcher,
        &state.config.search_url,
        keyword,
        pages,
        &headers,
    )
    .await
    .inspect_err(|e| error!(error = %e, %keyword, "Scrape failed"))?;

    info!(elapsed = ?start_time.elapsed(), "Scrape request finished");
    Ok(response::search_results(outcome))
}
