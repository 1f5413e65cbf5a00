use reqwest::Url;
use tracing::{info, instrument, warn};
use crate::error::{AppError, Result};
use crate::extract::{extract_article, extract_listing};
use crate::fetcher::Fetcher;
use crate::models::{PartialRecord, SearchOutcome, SearchRecord};

/// Fetches the article behind `partial.url` and merges its body in.
#[instrument(level = "debug", skip(fetcher, partial), fields(url = %partial.url))]
pub async fn assemble(fetcher: &Fetcher, partial: PartialRecord) -> Result<SearchRecord> {
    let html = fetcher.fetch_text(&partial.url, &[]).await?;
    let content = extract_article(&html);
    Ok(SearchRecord::from_partial(partial, content))
}

/// Listing URL for one page of results.
pub fn page_url(base_url: &str, keyword: &str, page: u32) -> Result<Url> {
    let page = page.to_string();
    Url::parse_with_params(base_url, &[("query", keyword), ("page", page.as_str())])
        .map_err(|e| AppError::Transport(format!("Invalid search URL {}: {}", base_url, e)))
}

/// Walks pages `1..=page_count` and assembles every listed item.
///
/// Pages are fetched one after another and results keep page order, then
/// item order. A failed page aborts the search. A failed article only drops
/// its own item and is counted in [`SearchOutcome::dropped`].
#[instrument(level = "info", skip(fetcher, headers))]
pub async fn search(
    fetcher: &Fetcher,
    base_url: &str,
    keyword: &str,
    page_count: u32,
    headers: &[(&str, &str)],
) -> Result<SearchOutcome> {
    let mut outcome = SearchOutcome::default();

    for page in 1..=page_count {
        let url = page_url(base_url, keyword, page)?;
        let html = fetcher.fetch_text(url.as_str(), headers).await?;
        let items = extract_listing(&html);
        info!(page, items = items.len(), "Fetched listing page");

        for partial in items {
            let item_url = partial.url.clone();
            match assemble(fetcher, partial).await {
                Ok(record) => outcome.records.push(record),
                Err(e) => {
                    warn!(error = %e, url = %item_url, "Dropping item, article fetch failed");
                    outcome.dropped += 1;
                }
            }
        }
    }

    info!(
        records = outcome.records.len(),
        dropped = outcome.dropped,
        "Search finished"
    );
    Ok(outcome)
}
