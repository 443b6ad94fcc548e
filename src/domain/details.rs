// src/domain/details.rs
use serde::{Deserialize, Serialize};

/// One provider's property data in the shape every page and API consumer sees,
/// regardless of which upstream schema it came from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PropertyDetails {
    #[serde(default)]
    pub square_footage: Option<i64>,
    #[serde(default)]
    pub lot_size_acres: Option<f64>,
    #[serde(default)]
    pub year_built: Option<i64>,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub bedrooms: Option<i64>,
    #[serde(default)]
    pub bathrooms: Option<f64>,
    #[serde(default)]
    pub room_count: Option<i64>,
    /// "Yes" / "No".
    #[serde(default)]
    pub septic_system: Option<String>,
    #[serde(default)]
    pub sale_price: Option<i64>,
    #[serde(default)]
    pub sale_price_formatted: Option<String>,

    pub provider: String,
    #[serde(default)]
    pub cached: bool,
}

/// A provider that could not produce data for this lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderFailure {
    pub error: String,
    pub provider: String,
    #[serde(default)]
    pub cached: bool,
}

impl ProviderFailure {
    pub fn new(provider: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            provider: provider.into(),
            cached: false,
        }
    }
}

/// One entry of the `/properties` response array.
///
/// Untagged on the wire: an object carrying `error` is a failure, anything
/// else is details. `Failed` is listed first so serde tries it first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProviderResult {
    Failed(ProviderFailure),
    Details(PropertyDetails),
}

pub type ProviderResponse = Vec<ProviderResult>;

impl ProviderResult {
    pub fn provider(&self) -> &str {
        match self {
            ProviderResult::Failed(f) => &f.provider,
            ProviderResult::Details(d) => &d.provider,
        }
    }

    pub fn is_cached(&self) -> bool {
        match self {
            ProviderResult::Failed(f) => f.cached,
            ProviderResult::Details(d) => d.cached,
        }
    }

    pub fn set_cached(&mut self, cached: bool) {
        match self {
            ProviderResult::Failed(f) => f.cached = cached,
            ProviderResult::Details(d) => d.cached = cached,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ProviderResult::Failed(_))
    }
}
