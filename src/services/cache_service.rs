// src/services/cache_service.rs
use crate::config::CacheConfig;
use crate::db::cache_entries;
use crate::db::Database;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, error};

/// Address-keyed cache for lookup results, stored in SQLite.
///
/// Best effort: storage failures are logged and reported as a miss (or as
/// `false` from writes) so a broken cache never fails a lookup.
#[derive(Clone, Debug)]
pub struct CacheService {
    db: Database,
    enabled: bool,
    default_ttl: i64,
}

impl CacheService {
    pub fn new(db: Database, cfg: &CacheConfig) -> Self {
        Self {
            db,
            enabled: cfg.enabled,
            default_ttl: cfg.ttl_secs,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// `property:<sha256>` for the combined result, `property:<sha256>:<provider>`
    /// for one provider. Addresses differing only in case or spacing share a key.
    pub fn cache_key(address: &str, provider: Option<&str>) -> String {
        let normalized = address
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        let hash = Sha256::digest(normalized.as_bytes());

        match provider {
            Some(p) => format!("property:{hash:x}:{p}"),
            None => format!("property:{hash:x}"),
        }
    }

    pub fn get<T: DeserializeOwned>(&self, address: &str, provider: Option<&str>) -> Option<T> {
        self.get_at(address, provider, Utc::now().timestamp())
    }

    pub fn get_at<T: DeserializeOwned>(
        &self,
        address: &str,
        provider: Option<&str>,
        now: i64,
    ) -> Option<T> {
        if !self.enabled {
            return None;
        }

        let key = Self::cache_key(address, provider);
        let payload = match self
            .db
            .with_conn(|conn| cache_entries::get_entry(conn, &key, now))
        {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                debug!(%key, "cache miss");
                return None;
            }
            Err(e) => {
                error!(%key, "error retrieving from cache: {e}");
                return None;
            }
        };

        match serde_json::from_str(&payload) {
            Ok(value) => {
                debug!(%key, "cache hit");
                Some(value)
            }
            Err(e) => {
                error!(%key, "discarding unreadable cache entry: {e}");
                let _ = self
                    .db
                    .with_conn(|conn| cache_entries::delete_entry(conn, &key));
                None
            }
        }
    }

    pub fn set<T: Serialize>(
        &self,
        address: &str,
        value: &T,
        provider: Option<&str>,
        ttl: Option<i64>,
    ) -> bool {
        self.set_at(address, value, provider, ttl, Utc::now().timestamp())
    }

    pub fn set_at<T: Serialize>(
        &self,
        address: &str,
        value: &T,
        provider: Option<&str>,
        ttl: Option<i64>,
        now: i64,
    ) -> bool {
        if !self.enabled {
            return false;
        }

        let key = Self::cache_key(address, provider);
        let ttl = ttl.unwrap_or(self.default_ttl);

        let payload = match serde_json::to_string(value) {
            Ok(p) => p,
            Err(e) => {
                error!(%key, "error serializing cache entry: {e}");
                return false;
            }
        };

        match self
            .db
            .with_conn(|conn| cache_entries::put_entry(conn, &key, &payload, now, ttl))
        {
            Ok(()) => {
                debug!(%key, ttl, "cached data");
                true
            }
            Err(e) => {
                error!(%key, "error caching data: {e}");
                false
            }
        }
    }

    pub fn delete(&self, address: &str, provider: Option<&str>) -> bool {
        if !self.enabled {
            return false;
        }

        let key = Self::cache_key(address, provider);
        match self
            .db
            .with_conn(|conn| cache_entries::delete_entry(conn, &key))
        {
            Ok(_) => {
                debug!(%key, "deleted cache entry");
                true
            }
            Err(e) => {
                error!(%key, "error deleting cache: {e}");
                false
            }
        }
    }

    /// Drop every expired row. Returns how many went.
    pub fn purge_expired(&self) -> usize {
        if !self.enabled {
            return 0;
        }

        let now = Utc::now().timestamp();
        self.db
            .with_conn(|conn| cache_entries::purge_expired(conn, now))
            .unwrap_or_else(|e| {
                error!("error purging cache: {e}");
                0
            })
    }
}
