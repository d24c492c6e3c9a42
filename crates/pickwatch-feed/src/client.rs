use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;

use crate::error::FeedError;

/// HTTP client for the RSS search endpoint.
///
/// Issues a single GET per collection run with a bounded timeout and no
/// retries; a timeout or connection failure surfaces immediately as a
/// [`FeedError`].
pub struct FeedClient {
    client: Client,
    endpoint: String,
}

impl FeedClient {
    /// Creates a `FeedClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        endpoint: impl Into<String>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Builds the exact URL fetched for `query`, with the query
    /// percent-encoded and fixed language/region parameters.
    ///
    /// The URL is recorded verbatim in the persisted entry and in
    /// fetch/parse error payloads.
    #[must_use]
    pub fn feed_url(&self, query: &str) -> String {
        let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC);
        format!(
            "{}?q={encoded}&hl=en-US&gl=US&ceid=US%3Aen",
            self.endpoint
        )
    }

    /// Fetches the feed body from `feed_url`.
    ///
    /// # Errors
    ///
    /// - [`FeedError::Http`] — network failure or timeout.
    /// - [`FeedError::UnexpectedStatus`] — any non-2xx response.
    pub async fn fetch(&self, feed_url: &str) -> Result<String, FeedError> {
        tracing::debug!(url = %feed_url, "fetching feed");
        let response = self.client.get(feed_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::UnexpectedStatus {
                status: status.as_u16(),
                url: feed_url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}
