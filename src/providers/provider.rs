// provider.rs
use crate::providers::{ProviderConfig, ProviderError, ProviderKind};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, warn};

/// An upstream source of property data.
///
/// `fetch` returns the provider's raw JSON body; mapping it onto our shape
/// is `normalize::standardize`'s job.
pub trait PropertyProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    fn fetch(&self, address: &str) -> Result<Value, ProviderError>;
}

pub struct HttpProvider {
    kind: ProviderKind,
    base_url: String,
    client: Client,
}

impl HttpProvider {
    pub fn new(cfg: &ProviderConfig) -> Result<Self, ProviderError> {
        let base_url = cfg.base_url.clone().ok_or_else(|| {
            ProviderError::Config(format!("{}_API_URL is not set", cfg.kind.env_prefix()))
        })?;
        let api_key = cfg.api_key.as_deref().ok_or_else(|| {
            ProviderError::Config(format!("{}_API_KEY is not set", cfg.kind.env_prefix()))
        })?;

        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(api_key)
            .map_err(|e| ProviderError::Config(format!("invalid API key: {e}")))?;
        key.set_sensitive(true);
        headers.insert("X-API-KEY", key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| ProviderError::Config(e.to_string()))?;

        Ok(Self {
            kind: cfg.kind,
            base_url,
            client,
        })
    }
}

impl PropertyProvider for HttpProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    fn fetch(&self, address: &str) -> Result<Value, ProviderError> {
        let start = Instant::now();

        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("address", address)])
            .send()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            warn!(provider = %self.kind, %status, "provider request failed");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = resp
            .json()
            .map_err(|e| ProviderError::JsonParse(e.to_string()))?;

        debug!(provider = %self.kind, elapsed = ?start.elapsed(), "provider responded");
        Ok(body)
    }
}
