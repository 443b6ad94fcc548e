// src/services/property_service.rs
use crate::domain::{ProviderFailure, ProviderResponse, ProviderResult};
use crate::errors::ServerError;
use crate::providers::{standardize, HttpProvider, PropertyProvider, ProviderConfig, ProviderKind};
use crate::services::CacheService;
use serde_json::{json, Value};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

pub const MISSING_ADDRESS: &str = "Missing or empty address parameter";

/// A configured provider, or the reason it couldn't be built.
pub struct ProviderSlot {
    kind: ProviderKind,
    timeout: Duration,
    provider: Result<Arc<dyn PropertyProvider>, String>,
}

impl ProviderSlot {
    pub fn ready(provider: Arc<dyn PropertyProvider>, timeout: Duration) -> Self {
        Self {
            kind: provider.kind(),
            timeout,
            provider: Ok(provider),
        }
    }

    pub fn unavailable(kind: ProviderKind, timeout: Duration, reason: impl Into<String>) -> Self {
        Self {
            kind,
            timeout,
            provider: Err(reason.into()),
        }
    }

    pub fn from_config(cfg: &ProviderConfig) -> Self {
        match HttpProvider::new(cfg) {
            Ok(p) => Self::ready(Arc::new(p), cfg.timeout),
            Err(e) => {
                error!(provider = %cfg.kind, "error initializing service: {e}");
                Self::unavailable(cfg.kind, cfg.timeout, e.to_string())
            }
        }
    }
}

// What one provider produced for this lookup, before standardizing.
enum Outcome {
    Cached(ProviderResult),
    Raw(Value),
    Failed(String),
}

/// Fans an address out to every provider, normalizes what comes back,
/// and keeps the cache warm.
pub struct PropertyService {
    cache: CacheService,
    slots: Vec<ProviderSlot>,
}

impl PropertyService {
    pub fn new(cache: CacheService, slots: Vec<ProviderSlot>) -> Self {
        Self { cache, slots }
    }

    pub fn from_configs(cache: CacheService, configs: &[ProviderConfig]) -> Self {
        Self::new(cache, configs.iter().map(ProviderSlot::from_config).collect())
    }

    pub fn cache(&self) -> &CacheService {
        &self.cache
    }

    pub fn lookup(&self, address: &str) -> Result<ProviderResponse, ServerError> {
        if address.trim().is_empty() {
            return Err(ServerError::BadRequest(MISSING_ADDRESS.to_string()));
        }

        if let Some(mut cached) = self.cache.get::<ProviderResponse>(address, None) {
            if !cached.is_empty() {
                info!(address, "returning cached results");
                for result in cached.iter_mut() {
                    result.set_cached(true);
                }
                return Ok(cached);
            }
        }

        let outcomes = self.fetch_provider_data(address);

        let mut results = Vec::with_capacity(outcomes.len());
        for (kind, outcome) in outcomes {
            let result = match outcome {
                Outcome::Cached(result) => result,
                Outcome::Failed(message) => {
                    ProviderResult::Failed(ProviderFailure::new(kind.display_name(), message))
                }
                Outcome::Raw(body) => {
                    let mut result = standardize(kind, &body);
                    result.set_cached(false);
                    if !result.is_failure() {
                        self.cache.set(address, &result, Some(kind.name()), None);
                    }
                    result
                }
            };
            results.push(result);
        }

        // A failed provider would otherwise stay failed for the whole TTL.
        if results.iter().all(|r| !r.is_failure()) {
            let fresh: ProviderResponse = results
                .iter()
                .cloned()
                .map(|mut r| {
                    r.set_cached(false);
                    r
                })
                .collect();
            self.cache.set(address, &fresh, None, None);
        }

        Ok(results)
    }

    /// Per-provider cache first, then every remaining provider concurrently,
    /// each bounded by its own timeout. Output keeps slot order.
    fn fetch_provider_data(&self, address: &str) -> Vec<(ProviderKind, Outcome)> {
        let started = Instant::now();
        let mut outcomes: Vec<(ProviderKind, Option<Outcome>)> = Vec::new();
        let mut pending: Vec<(usize, Duration, Receiver<Result<Value, String>>)> = Vec::new();

        for slot in &self.slots {
            let kind = slot.kind;

            if let Some(mut cached) = self.cache.get::<ProviderResult>(address, Some(kind.name())) {
                cached.set_cached(true);
                outcomes.push((kind, Some(Outcome::Cached(cached))));
                continue;
            }

            let provider = match &slot.provider {
                Ok(p) => Arc::clone(p),
                Err(reason) => {
                    outcomes.push((
                        kind,
                        Some(Outcome::Failed(format!("Service initialization error: {reason}"))),
                    ));
                    continue;
                }
            };

            let (tx, rx) = mpsc::channel();
            let owned_address = address.to_string();
            let spawned = thread::Builder::new()
                .name(format!("fetch-{kind}"))
                .spawn(move || {
                    let result = provider.fetch(&owned_address).map_err(|e| e.to_string());
                    // Receiver may have given up already.
                    let _ = tx.send(result);
                });

            match spawned {
                Ok(_) => {
                    pending.push((outcomes.len(), slot.timeout, rx));
                    outcomes.push((kind, None));
                }
                Err(e) => {
                    error!(provider = %kind, "error fetching data: {e}");
                    outcomes.push((
                        kind,
                        Some(Outcome::Failed(format!(
                            "Error fetching data from {kind}: {e}"
                        ))),
                    ));
                }
            }
        }

        for (idx, timeout, rx) in pending {
            let kind = outcomes[idx].0;
            let remaining = timeout.saturating_sub(started.elapsed());

            let outcome = match rx.recv_timeout(remaining) {
                // Transport-level failures look like an upstream `{"error": ...}` body.
                Ok(Ok(body)) => Outcome::Raw(body),
                Ok(Err(message)) => Outcome::Raw(json!({ "error": message })),
                Err(RecvTimeoutError::Timeout) => {
                    warn!(provider = %kind, "timeout while fetching data");
                    Outcome::Failed(format!("Timeout fetching data from {kind}"))
                }
                Err(RecvTimeoutError::Disconnected) => {
                    error!(provider = %kind, "fetch worker exited without a result");
                    Outcome::Failed(format!(
                        "Error fetching data from {kind}: worker exited without a result"
                    ))
                }
            };
            outcomes[idx].1 = Some(outcome);
        }

        outcomes
            .into_iter()
            .map(|(kind, outcome)| {
                let outcome = outcome.unwrap_or_else(|| {
                    Outcome::Failed(format!("Error fetching data from {kind}: no result"))
                });
                (kind, outcome)
            })
            .collect()
    }
}
