use serde_json::{json, Value};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScrapeParams {
    pub keyword: Option<String>,
    pub pages: Option<String>,
}

impl ScrapeParams {
    /// Builds params from raw query pairs. A repeated key keeps its first
    /// value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = ScrapeParams::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "keyword" => &mut params.keyword,
                "pages" => &mut params.pages,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Keyword exactly as sent, or `None` when absent or empty.
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref().filter(|k| !k.is_empty())
    }
}

/// Page count from the `pages` query value. Anything that is not an
/// unsigned integer falls back to `default`.
pub fn parse_pages(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

/// Static description served at `/`.
pub fn api_index() -> Value {
    json!({
        "message": "Welcome to the DETIKScraper API!",
        "description": "An API for scraping search results and fetching trending keywords from Detik.",
        "endpoints": {
            "/trending_keywords": {
                "method": "GET",
                "description": "Retrieve a list of trending keywords."
            },
            "/scrape": {
                "method": "GET",
                "description": "Scrape search results for a specific keyword.",
                "parameters": {
                    "keyword": "str (required) - The search term to scrape.",
                    "pages": "int (optional) - The number of pages to scrape, defaults to 1."
                }
            }
        }
    })
}
