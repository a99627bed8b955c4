//! Credentialed HTTP client for the AgencyHub REST API.

use std::sync::Arc;
use std::time::Duration;

use agencyhub_shared::config::{ApiConfig, AppConfig};
use reqwest::header::ACCEPT;
use reqwest::Url;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::FetchCache;
use crate::error::ClientError;
use crate::resource::ResourceKey;

/// HTTP client with bearer auth, response caching, and retry.
///
/// Transport errors and 5xx responses are retried up to `max_retries`
/// times with a linearly growing delay. Only successful bodies are cached.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
    cache: FetchCache,
    max_retries: u32,
    retry_backoff: Duration,
}

impl ApiClient {
    /// Creates a client for the configured API.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: &ApiConfig, cache: FetchCache) -> Result<Self, ClientError> {
        let base_url = parse_base_url(&config.base_url)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            token: config.token.clone().filter(|t| !t.is_empty()),
            cache,
            max_retries: config.max_retries,
            retry_backoff: Duration::from_millis(config.retry_backoff_ms),
        })
    }

    /// Creates a client and its cache from the full application config.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::new(&config.api, FetchCache::from_config(&config.cache))
    }

    /// Returns the response cache, e.g. to invalidate after a mutation.
    #[must_use]
    pub fn cache(&self) -> &FetchCache {
        &self.cache
    }

    /// Builds the absolute URL for a resource key.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource path cannot be joined.
    pub fn url_for(&self, key: &ResourceKey) -> Result<Url, ClientError> {
        let mut url = self
            .base_url
            .join(key.resource.path())
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        if !key.params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &key.params {
                pairs.append_pair(name, value);
            }
        }

        Ok(url)
    }

    /// Fetches a resource and decodes it.
    ///
    /// Bodies shaped `{"data": ...}` are unwrapped before decoding.
    ///
    /// # Errors
    ///
    /// Returns an error if every attempt fails or the body does not decode.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &ResourceKey) -> Result<T, ClientError> {
        let body = self.get_value(key).await?;
        Ok(T::deserialize(unwrap_envelope(&body))?)
    }

    /// Fetches a collection and decodes it record by record.
    ///
    /// Records that do not decode are dropped with a warning, so one bad row
    /// leaves the rest of the collection usable. A body that is not an array
    /// is a decode error.
    ///
    /// # Errors
    ///
    /// Returns an error if every attempt fails or the body is not a list.
    pub async fn get_collection<T: DeserializeOwned>(
        &self,
        key: &ResourceKey,
    ) -> Result<Vec<T>, ClientError> {
        let body = self.get_value(key).await?;
        decode_collection(key, unwrap_envelope(&body))
    }

    /// Fetches a resource as raw JSON, serving from cache when fresh.
    ///
    /// # Errors
    ///
    /// Returns an error if every attempt fails.
    pub async fn get_value(&self, key: &ResourceKey) -> Result<Arc<Value>, ClientError> {
        if let Some(hit) = self.cache.get(key).await {
            debug!(resource = %key, "Cache hit");
            return Ok(hit);
        }

        let url = self.url_for(key)?;
        let body = Arc::new(self.fetch_with_retry(&url).await?);
        self.cache.insert(key.clone(), Arc::clone(&body)).await;
        debug!(resource = %key, "Fetched and cached");

        Ok(body)
    }

    async fn fetch_with_retry(&self, url: &Url) -> Result<Value, ClientError> {
        let mut attempt: u32 = 0;

        loop {
            match self.fetch_once(url).await {
                Ok(body) => return Ok(body),
                Err(err) if err.is_retryable() && attempt < self.max_retries => {
                    attempt += 1;
                    let delay = self.retry_backoff.saturating_mul(attempt);
                    warn!(
                        url = %url,
                        attempt,
                        max_retries = self.max_retries,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        error = %err,
                        "Request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn fetch_once(&self, url: &Url) -> Result<Value, ClientError> {
        let mut request = self
            .http
            .get(url.clone())
            .header(ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Parses the base URL, forcing a trailing slash so that joins append
/// instead of replacing the last segment.
fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let mut normalized = raw.trim().trim_end_matches('/').to_string();
    normalized.push('/');

    let url = Url::parse(&normalized).map_err(|e| ClientError::InvalidUrl(format!("{raw}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(ClientError::InvalidUrl(format!("{raw}: cannot be a base")));
    }
    Ok(url)
}

fn decode_collection<T: DeserializeOwned>(
    key: &ResourceKey,
    body: &Value,
) -> Result<Vec<T>, ClientError> {
    let Value::Array(items) = body else {
        return Ok(Vec::<T>::deserialize(body)?);
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match T::deserialize(item) {
            Ok(record) => records.push(record),
            Err(err) => warn!(resource = %key, index, error = %err, "Skipping undecodable record"),
        }
    }

    Ok(records)
}

fn unwrap_envelope(body: &Value) -> &Value {
    match body {
        Value::Object(map) => map.get("data").unwrap_or(body),
        _ => body,
    }
}
