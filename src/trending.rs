use tracing::{info, instrument};
use crate::error::Result;
use crate::extract::extract_keywords;
use crate::fetcher::Fetcher;

/// Fetches the trending endpoint and returns its keywords.
#[instrument(level = "info", skip(fetcher, headers))]
pub async fn trending(
    fetcher: &Fetcher,
    url: &str,
    headers: &[(&str, &str)],
) -> Result<Vec<String>> {
    let json = fetcher.fetch_json(url, headers).await?;
    let keywords = extract_keywords(&json)?;
    info!(count = keywords.len(), "Fetched trending keywords");
    Ok(keywords)
}
