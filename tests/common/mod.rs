#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;

use news_search_scraper::{api::routes::create_router, config::Config, AppState};

/// Local stand-in for the news site: listing pages, articles and the
/// trending endpoint.
pub struct Upstream {
    pub addr: SocketAddr,
    listing_hits: Arc<Mutex<Vec<(String, String)>>>,
}

impl Upstream {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// `(query, page)` of every listing request, in arrival order.
    pub fn listing_hits(&self) -> Vec<(String, String)> {
        self.listing_hits.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct UpstreamState {
    base: String,
    listing_hits: Arc<Mutex<Vec<(String, String)>>>,
}

pub async fn spawn_upstream() -> Upstream {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let listing_hits = Arc::new(Mutex::new(Vec::new()));

    let state = UpstreamState {
        base: format!("http://{}", addr),
        listing_hits: listing_hits.clone(),
    };

    let app = Router::new()
        .route("/search/searchall", get(listing))
        .route("/article/:id", get(article))
        .route("/trending", get(trending_ok))
        .route("/trending-bad", get(trending_bad))
        .route("/not-json", get(|| async { "<html></html>" }))
        .route("/broken", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/echo-ua", get(echo_user_agent))
        .route("/slow", get(slow))
        .with_state(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Upstream { addr, listing_hits }
}

fn item(title: &str, href: Option<&str>) -> String {
    let link = href
        .map(|h| format!(r#"<a href="{}"><img src="{}.jpg"></a>"#, h, title))
        .unwrap_or_default();
    format!(
        r#"<article>{link}<h3 class="media__title"> {title} </h3>
           <div class="media__date"><span title="date-{title}">x</span></div>
           <div class="media__desc"> desc {title} </div></article>"#
    )
}

async fn listing(
    State(state): State<UpstreamState>,
    Query(params): Query<HashMap<String, String>>,
) -> Html<String> {
    let query = params.get("query").cloned().unwrap_or_default();
    let page = params.get("page").cloned().unwrap_or_default();
    state
        .listing_hits
        .lock()
        .unwrap()
        .push((query, page.clone()));

    let article = |id: &str| format!("{}/article/{}", state.base, id);
    let items = match page.as_str() {
        "1" => vec![
            item("1-1", Some(&article("1-1"))),
            item("1-2", Some(&article("1-2"))),
        ],
        "2" => vec![item("2-1", Some(&article("2-1"))), item("2-x", None)],
        "3" => vec![
            item("3-x", Some(&format!("{}/missing", state.base))),
            item("3-2", Some(&article("3-2"))),
        ],
        _ => vec![],
    };

    Html(format!("<html><body>{}</body></html>", items.join("\n")))
}

async fn article(Path(id): Path<String>) -> Html<String> {
    Html(format!(
        r#"<div class="detail__body-text"><p> Body {id} a </p><p>Body {id} b</p></div>"#
    ))
}

async fn trending_ok() -> impl IntoResponse {
    Json(json!({
        "body": {
            "topKeywordSearch": [
                { "keyword": "pemilu" },
                { "keyword": 7 },
                { "keyword": "timnas" }
            ]
        }
    }))
}

async fn trending_bad() -> impl IntoResponse {
    Json(json!({ "status": 200, "body": [] }))
}

async fn echo_user_agent(headers: HeaderMap) -> String {
    headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn slow() -> &'static str {
    tokio::time::sleep(Duration::from_secs(3)).await;
    "late"
}

/// Serves the real router against `upstream` and returns its base URL.
pub async fn spawn_service(upstream: &Upstream, trending_path: &str) -> String {
    spawn_service_with(upstream, "/search/searchall", trending_path).await
}

pub async fn spawn_service_with(
    upstream: &Upstream,
    search_path: &str,
    trending_path: &str,
) -> String {
    let config = Config::from_lookup(|key| match key {
        "SEARCH_URL" => Some(upstream.url(search_path)),
        "TRENDING_URL" => Some(upstream.url(trending_path)),
        "USER_AGENT" => Some("test-agent/1.0".to_string()),
        "FETCH_TIMEOUT_SECS" => Some("5".to_string()),
        _ => None,
    })
    .unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router(AppState::new(config).unwrap());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}
