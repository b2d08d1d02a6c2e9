//! Rekor client for log entry lookups

use crate::entry::{entries_from_response, LogEntry, LogEntryResponse};
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use url::Url;

/// User agent sent with every Rekor request
pub const DEFAULT_USER_AGENT: &str = concat!("sigstore-rust/", env!("CARGO_PKG_VERSION"));

/// Public Sigstore Rekor instance
pub const PUBLIC_REKOR_URL: &str = "https://rekor.sigstore.dev";

/// HTTP settings for Rekor clients
#[derive(Debug, Clone)]
pub struct RekorClientConfig {
    /// User agent header value
    pub user_agent: String,
    /// Overall request timeout
    pub timeout: Option<Duration>,
}

impl Default for RekorClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

/// Read access to a remote transparency log
#[async_trait]
pub trait RekorLogClient: Send + Sync {
    /// Base URL of the log this client talks to
    fn base_url(&self) -> &str;

    /// Fetch the entries recorded at `log_index`
    ///
    /// An index the log does not know yields an empty list.
    async fn get_log_entry_by_index(&self, log_index: i64) -> Result<Vec<LogEntry>>;
}

/// Constructs clients for transparency log base URLs
pub trait RekorClientFactory: Send + Sync {
    fn client(&self, base_url: &str) -> Result<Arc<dyn RekorLogClient>>;
}

/// A client for interacting with Rekor over HTTP
pub struct RekorClient {
    /// Base URL of the Rekor instance
    url: String,
    /// HTTP client
    client: reqwest::Client,
}

impl RekorClient {
    /// Create a new Rekor client with the default configuration
    pub fn new(url: &str) -> Result<Self> {
        Self::with_config(url, &RekorClientConfig::default())
    }

    /// Create a client for the public Sigstore Rekor instance
    pub fn public() -> Result<Self> {
        Self::new(PUBLIC_REKOR_URL)
    }

    /// Create a new Rekor client with custom HTTP settings
    pub fn with_config(url: &str, config: &RekorClientConfig) -> Result<Self> {
        let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::InvalidUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Base URL without a trailing slash
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the log entries at a given index
    pub async fn get_log_entry_by_index(&self, log_index: i64) -> Result<Vec<LogEntry>> {
        let url = format!("{}/api/v1/log/entries?logIndex={}", self.url, log_index);
        tracing::debug!(url = %url, "fetching log entry by index");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(format!(
                "failed to get log entry {}: {} - {}",
                log_index, status, body
            )));
        }

        let entries: LogEntryResponse = response
            .json()
            .await
            .map_err(|e| Error::Http(format!("failed to parse JSON: {}", e)))?;

        Ok(entries_from_response(entries))
    }
}

#[async_trait]
impl RekorLogClient for RekorClient {
    fn base_url(&self) -> &str {
        &self.url
    }

    async fn get_log_entry_by_index(&self, log_index: i64) -> Result<Vec<LogEntry>> {
        RekorClient::get_log_entry_by_index(self, log_index).await
    }
}

/// Factory that builds one HTTP [`RekorClient`] per base URL and reuses it
#[derive(Default)]
pub struct HttpClientFactory {
    config: RekorClientConfig,
    clients: Mutex<HashMap<String, Arc<RekorClient>>>,
}

impl HttpClientFactory {
    pub fn new(config: RekorClientConfig) -> Self {
        Self {
            config,
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Number of clients constructed so far
    pub fn cached_clients(&self) -> usize {
        self.clients
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl RekorClientFactory for HttpClientFactory {
    fn client(&self, base_url: &str) -> Result<Arc<dyn RekorLogClient>> {
        let mut clients = self.clients.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(client) = clients.get(base_url) {
            let client: Arc<dyn RekorLogClient> = client.clone();
            return Ok(client);
        }

        tracing::debug!(base_url, "constructing Rekor client");
        let client = Arc::new(RekorClient::with_config(base_url, &self.config)?);
        clients.insert(base_url.to_string(), client.clone());
        let client: Arc<dyn RekorLogClient> = client;
        Ok(client)
    }
}
