//! Remote quote endpoint client.
//!
//! The remote collaborator is behind a trait so sync logic can be exercised
//! against an in-process fake; the real implementation speaks JSON over
//! HTTP with `reqwest`.

use crate::error::{ClientError, Result};
use async_trait::async_trait;
use quotesync_engine::{Quote, Snapshot, SyncSummary};
use std::time::Duration;
use tracing::debug;

/// Default timeout for remote requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The remote collaborator a sync cycle talks to.
#[async_trait]
pub trait RemoteQuotes {
    /// Fetch the remote snapshot.
    async fn fetch_quotes(&self) -> Result<Snapshot>;

    /// Offer the given snapshot to the remote, which merges it into its own
    /// list and reports the outcome.
    async fn push_quotes(&self, quotes: &[Quote]) -> Result<SyncSummary>;
}

/// HTTP implementation of the remote collaborator.
#[derive(Debug, Clone)]
pub struct HttpRemote {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRemote {
    /// Create a client for the endpoint at `base_url`
    /// (e.g. "http://localhost:3000").
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Parse a JSON response body.
    ///
    /// A non-success status is an API failure; a body that does not parse
    /// is a decode failure. Both leave the caller's state untouched.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        debug!(%status, "remote response");

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl RemoteQuotes for HttpRemote {
    /// GET {base}/quotes
    async fn fetch_quotes(&self) -> Result<Snapshot> {
        let url = format!("{}/quotes", self.base_url);
        let response = self.client.get(&url).send().await?;
        Self::parse_response(response).await
    }

    /// POST {base}/quotes
    async fn push_quotes(&self, quotes: &[Quote]) -> Result<SyncSummary> {
        let url = format!("{}/quotes", self.base_url);
        let response = self.client.post(&url).json(&quotes).send().await?;
        Self::parse_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_trimmed() {
        let remote = HttpRemote::new("http://localhost:3000/").unwrap();
        assert_eq!(remote.base_url, "http://localhost:3000");
    }
}
