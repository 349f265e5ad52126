//! HTTP retrieval of index pages.
//!
//! The engine never touches the network; this module hands it a
//! [`SourceDocument`] built from the response body.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::config::Config;
use crate::document::SourceDocument;
use crate::error::{Error, Result};

/// Fetches pages with a fixed User-Agent and timeout.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Build a client from `config`.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(5))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// GET `url` and parse the body. Non-2xx statuses are errors.
    #[instrument(skip_all, fields(url = %url))]
    pub async fn fetch(&self, url: &Url) -> Result<SourceDocument> {
        let http_err = |reason: String| Error::Http {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| http_err(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(http_err(format!("status {status}")));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await.map_err(|e| http_err(e.to_string()))?;
        debug!(bytes = body.len(), content_type = ?content_type, "fetched page");

        Ok(SourceDocument::from_bytes(&body, content_type.as_deref()))
    }
}
