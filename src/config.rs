// src/config.rs
use crate::providers::{ProviderConfig, ProviderKind};
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use url::{Host, Url};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_CACHE_TTL_SECS: i64 = 60 * 60 * 24; // providers refresh daily
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub enabled: bool,
    pub ttl_secs: i64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Base URL the search page uses to reach `/properties`.
    pub backend_api_url: String,
    pub database_path: String,
    pub schema_path: String,
    pub max_workers: usize,
    pub cache: CacheConfig,
    pub providers: Vec<ProviderConfig>,
}

impl AppConfig {
    /// Read configuration from the process environment.
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup, so tests don't touch the real env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_raw
            .parse()
            .map_err(|e| format!("invalid BIND_ADDR {bind_raw:?}: {e}"))?;

        let backend_api_url = get("BACKEND_API_URL")
            .unwrap_or_else(|| format!("http://{bind_addr}"))
            .trim_end_matches('/')
            .to_string();

        let max_workers = parse_or(get("MAX_WORKERS"), "MAX_WORKERS", 8usize)?;
        if max_workers == 0 {
            return Err("invalid MAX_WORKERS 0: need at least one worker".to_string());
        }
        // `/search` holds a worker while it calls `/properties` on this same pool.
        if max_workers < 2 && targets_self(&backend_api_url, bind_addr) {
            return Err(format!(
                "invalid MAX_WORKERS {max_workers}: BACKEND_API_URL is this server, \
                 so at least 2 workers are needed"
            ));
        }

        let cache = CacheConfig {
            enabled: parse_bool(get("CACHE_ENABLED"), "CACHE_ENABLED", true)?,
            ttl_secs: parse_or(get("PROPERTY_CACHE_TTL"), "PROPERTY_CACHE_TTL", DEFAULT_CACHE_TTL_SECS)?,
        };

        let providers = ProviderKind::ALL
            .iter()
            .map(|kind| -> Result<ProviderConfig, String> {
                let prefix = kind.env_prefix();
                let timeout_key = format!("{prefix}_TIMEOUT");
                let timeout_secs = parse_or(
                    get(&timeout_key),
                    &timeout_key,
                    DEFAULT_PROVIDER_TIMEOUT_SECS,
                )?;

                Ok(ProviderConfig {
                    kind: *kind,
                    base_url: get(&format!("{prefix}_API_URL")),
                    api_key: get(&format!("{prefix}_API_KEY")),
                    timeout: Duration::from_secs(timeout_secs),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            bind_addr,
            backend_api_url,
            database_path: get("DATABASE_PATH")
                .unwrap_or_else(|| "property_lookup.sqlite3".to_string()),
            schema_path: get("SCHEMA_PATH").unwrap_or_else(|| "sql/schema.sql".to_string()),
            max_workers,
            cache,
            providers,
        })
    }
}

/// Whether `backend` resolves to the address this server binds.
fn targets_self(backend: &str, bind: SocketAddr) -> bool {
    let Ok(url) = Url::parse(backend) else {
        return false;
    };
    if url.port_or_known_default() != Some(bind.port()) {
        return false;
    }

    match url.host() {
        Some(Host::Domain(name)) => name.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(ip)) => {
            ip.is_loopback() || bind.ip().is_unspecified() || IpAddr::V4(ip) == bind.ip()
        }
        Some(Host::Ipv6(ip)) => {
            ip.is_loopback() || bind.ip().is_unspecified() || IpAddr::V6(ip) == bind.ip()
        }
        None => false,
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|e| format!("invalid {key} {v:?}: {e}")),
        None => Ok(default),
    }
}

fn parse_bool(raw: Option<String>, key: &str, default: bool) -> Result<bool, String> {
    match raw.as_deref().map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(default),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(format!("invalid {key} {v:?}: expected true or false")),
        },
    }
}
