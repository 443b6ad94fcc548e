// src/services/property_client.rs
//
// What the search page uses to talk to the `/properties` backend.

use crate::domain::ProviderResponse;
use reqwest::blocking::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::error;
use url::Url;

pub const PROPERTIES_ENDPOINT: &str = "properties";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid backend URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("{0}")]
    Status(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

/// `{base}/properties?address=<encoded>`.
pub fn properties_url(base: &str, address: &str) -> Result<Url, ClientError> {
    let raw = format!("{}/{PROPERTIES_ENDPOINT}", base.trim_end_matches('/'));
    let mut url = Url::parse(&raw).map_err(|e| ClientError::InvalidUrl {
        url: base.to_string(),
        reason: e.to_string(),
    })?;
    url.query_pairs_mut().append_pair("address", address);
    Ok(url)
}

#[derive(Clone)]
pub struct PropertyClient {
    client: Client,
    backend_api_url: String,
}

impl PropertyClient {
    pub fn new(backend_api_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            client,
            backend_api_url: backend_api_url.into(),
        })
    }

    pub fn fetch_property_details(&self, address: &str) -> Result<ProviderResponse, ClientError> {
        self.try_fetch(address).map_err(|e| {
            error!("Error fetching property details: {e}");
            e
        })
    }

    fn try_fetch(&self, address: &str) -> Result<ProviderResponse, ClientError> {
        let url = properties_url(&self.backend_api_url, address)?;

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ClientError::Status(format!(
                "Failed to fetch property details for address {address}"
            )));
        }

        resp.json::<ProviderResponse>()
            .map_err(|e| ClientError::JsonParse(e.to_string()))
    }
}
