use crate::config::AppConfig;
use crate::db::Database;
use crate::services::{CacheService, ClientError, PropertyClient, PropertyService};
use std::time::Duration;

/// Everything a request handler needs, shared across astra workers.
pub struct AppState {
    pub properties: PropertyService,
    pub client: PropertyClient,
}

impl AppState {
    pub fn new(properties: PropertyService, client: PropertyClient) -> Self {
        Self { properties, client }
    }

    pub fn from_config(cfg: &AppConfig, db: Database) -> Result<Self, ClientError> {
        let cache = CacheService::new(db, &cfg.cache);
        let properties = PropertyService::from_configs(cache, &cfg.providers);

        // The backend waits on its slowest provider, so give it headroom.
        let slowest = cfg
            .providers
            .iter()
            .map(|p| p.timeout)
            .max()
            .unwrap_or(Duration::from_secs(30));
        let client = PropertyClient::new(&cfg.backend_api_url, slowest + Duration::from_secs(5))?;

        Ok(Self::new(properties, client))
    }
}
