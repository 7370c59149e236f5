//! Catalog endpoint client
//!
//! Fetches `;`-delimited payloads from the catalog endpoint, serving fresh
//! cache entries without a network call and degrading to stale cache or a
//! canned payload when the endpoint fails. A fetch never returns an error.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::cache::CacheManager;
use crate::data::Depth;
use crate::nav::NavFrame;

/// Default catalog endpoint
pub const DEFAULT_ENDPOINT: &str =
    "https://script.google.com/macros/s/AKfycbwKMaHpDg_a52oSNdlbO9q1XEDlFMRVbFdKrarnp0HyHoCAGak/exec";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Payload used for the detail depth when nothing else is available
pub const DEFAULT_DETAIL_PAYLOAD: &str = "1;2;3;4;5;6;7;8;9";

/// Payload used for menu depths when nothing else is available
pub const DEFAULT_MENU_PAYLOAD: &str = "0;0;";

/// Errors from a single live request
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure, timeout or unreadable body
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("Endpoint returned status {0}")]
    Status(u16),
}

/// Where a payload came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchSource {
    /// Fresh cache entry, no request made
    Cache,
    /// Live response from the endpoint
    Live,
    /// The request failed and a cached entry was served regardless of age
    StaleCache,
    /// The request failed and nothing was cached
    Default,
}

/// A payload together with the path that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub payload: String,
    pub source: FetchSource,
}

/// Whether a fresh cache entry may short-circuit the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    #[default]
    PreferCache,
    /// Always try the endpoint first; fallbacks still apply
    Refresh,
}

/// Anything that can turn a navigation frame into a payload
pub trait MenuSource {
    fn fetch(&self, frame: &NavFrame, mode: FetchMode) -> impl Future<Output = Fetched> + Send;
}

/// Builds the cache fingerprint for a request
pub fn cache_key(depth: Depth, discriminator: &str) -> String {
    let discriminator = if discriminator.is_empty() {
        "0"
    } else {
        discriminator
    };
    format!("{}_{}", depth.as_cmd(), discriminator)
}

/// The canned payload for a depth
pub fn default_payload(depth: Depth) -> &'static str {
    match depth {
        Depth::Detail => DEFAULT_DETAIL_PAYLOAD,
        _ => DEFAULT_MENU_PAYLOAD,
    }
}

/// Client for the catalog endpoint
#[derive(Debug, Clone)]
pub struct MenuClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Cache manager for persisting responses
    cache_manager: Option<CacheManager>,
    /// Endpoint URL (allows override for testing)
    base_url: String,
}

impl MenuClient {
    /// Creates a client for `base_url` with the given request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "falling back to default HTTP client");
                Client::new()
            });
        Self {
            http_client,
            cache_manager: None,
            base_url: base_url.into(),
        }
    }

    /// Attaches a cache manager
    pub fn with_cache(mut self, cache_manager: Option<CacheManager>) -> Self {
        self.cache_manager = cache_manager;
        self
    }

    pub fn cache(&self) -> Option<&CacheManager> {
        self.cache_manager.as_ref()
    }

    /// Fetches the payload for a depth and discriminator
    ///
    /// # Behavior
    /// - A fresh cache entry is returned without a request (unless refreshing)
    /// - Otherwise the endpoint is queried and a success is cached
    /// - On failure any cached entry is returned regardless of age
    /// - With no cached entry the canned payload for the depth is returned
    pub async fn fetch_payload(
        &self,
        depth: Depth,
        discriminator: &str,
        mode: FetchMode,
    ) -> Fetched {
        let key = cache_key(depth, discriminator);
        let cached = self.cache_manager.as_ref().and_then(|c| c.get(&key));

        if mode == FetchMode::PreferCache {
            if let (Some(cache), Some(entry)) = (&self.cache_manager, &cached) {
                if !cache.is_entry_stale(entry, chrono::Utc::now()) {
                    tracing::debug!(%key, "serving fresh cache entry");
                    return Fetched {
                        payload: entry.data.clone(),
                        source: FetchSource::Cache,
                    };
                }
            }
        }

        match self.fetch_from_api(depth, discriminator).await {
            Ok(payload) => {
                if let Some(ref cache) = self.cache_manager {
                    if let Err(e) = cache.put(&key, &payload) {
                        tracing::warn!(%key, error = %e, "failed to cache payload");
                    }
                }
                tracing::info!(%key, bytes = payload.len(), "fetched payload");
                Fetched {
                    payload,
                    source: FetchSource::Live,
                }
            }
            Err(e) => {
                tracing::error!(%key, error = %e, "loading error");
                match cached {
                    Some(entry) => Fetched {
                        payload: entry.data,
                        source: FetchSource::StaleCache,
                    },
                    None => Fetched {
                        payload: default_payload(depth).to_string(),
                        source: FetchSource::Default,
                    },
                }
            }
        }
    }

    /// Performs the live request
    async fn fetch_from_api(&self, depth: Depth, discriminator: &str) -> Result<String, FetchError> {
        let dat = if discriminator.is_empty() {
            "0"
        } else {
            discriminator
        };

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[("cmd", depth.as_cmd()), ("dat", dat)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

impl MenuSource for MenuClient {
    async fn fetch(&self, frame: &NavFrame, mode: FetchMode) -> Fetched {
        self.fetch_payload(frame.depth, &frame.discriminator, mode)
            .await
    }
}
