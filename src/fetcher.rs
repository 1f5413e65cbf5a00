use reqwest::{Client, ClientBuilder, StatusCode};
use std::time::Duration;
use tracing::{debug, instrument};
use crate::error::{AppError, Result};

/// Thin GET-only wrapper around a pooled reqwest client.
///
/// Every request is bounded by the timeout given at construction. Any
/// response other than `200 OK` is reported as [`AppError::HttpStatus`].
#[derive(Clone, Debug)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(5)))
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Fetcher { client })
    }

    /// Fetches `url` and returns the body as text.
    #[instrument(level = "debug", skip(self, headers))]
    pub async fn fetch_text(&self, url: &str, headers: &[(&str, &str)]) -> Result<String> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(AppError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "Fetched body");
        Ok(body)
    }

    /// Fetches `url` and decodes the body as JSON.
    pub async fn fetch_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<serde_json::Value> {
        let body = self.fetch_text(url, headers).await?;
        Ok(serde_json::from_str(&body)?)
    }
}
