// src/providers/normalize.rs
//
// Maps each provider's payload onto `PropertyDetails`.

use crate::domain::conversion::{format_usd, sqft_to_acres};
use crate::domain::{PropertyDetails, ProviderFailure, ProviderResult};
use crate::providers::models::{Provider1Data, Provider1Response, Provider2Data, Provider2Response};
use crate::providers::ProviderKind;
use serde_json::Value;
use tracing::{debug, error, warn};

/// Standardize a raw provider body.
///
/// Never fails: an upstream error, an empty payload or an unparseable one all
/// become a `ProviderResult::Failed` for that provider, so one bad source
/// never hides the others.
pub fn standardize(kind: ProviderKind, raw: &Value) -> ProviderResult {
    let provider = kind.display_name();

    if let Some(err) = raw.get("error") {
        let message = err
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| err.to_string());
        error!(provider = %kind, error = %message, "provider returned an error");
        return ProviderResult::Failed(ProviderFailure::new(provider, message));
    }

    match raw.get("data") {
        None | Some(Value::Null) => return no_data(kind),
        Some(Value::Object(map)) if map.is_empty() => return no_data(kind),
        Some(_) => {}
    }

    // Only a `data` that isn't an object fails here; odd field types read as missing.
    let mapped = match kind {
        ProviderKind::Provider1 => {
            serde_json::from_value::<Provider1Response>(raw.clone()).map(|r| {
                log_upstream_cache(kind, r.cached);
                from_provider1(&r.data.unwrap_or_default())
            })
        }
        ProviderKind::Provider2 => {
            serde_json::from_value::<Provider2Response>(raw.clone()).map(|r| {
                log_upstream_cache(kind, r.cached);
                from_provider2(&r.data.unwrap_or_default())
            })
        }
    };

    match mapped {
        Ok(mut details) => {
            details.provider = provider.to_string();
            post_process(&mut details);
            ProviderResult::Details(details)
        }
        Err(e) => {
            error!(provider = %kind, "error standardizing data: {e}");
            ProviderResult::Failed(ProviderFailure::new(
                provider,
                format!("Error standardizing data: {e}"),
            ))
        }
    }
}

fn log_upstream_cache(kind: ProviderKind, cached: Option<bool>) {
    if cached == Some(true) {
        debug!(provider = %kind, "provider served this from its own cache");
    }
}

fn no_data(kind: ProviderKind) -> ProviderResult {
    warn!(provider = %kind, "empty data received");
    ProviderResult::Failed(ProviderFailure::new(kind.display_name(), "No data available"))
}

fn from_provider1(d: &Provider1Data) -> PropertyDetails {
    let features = d.features.as_ref();

    PropertyDetails {
        square_footage: d.square_footage,
        lot_size_acres: sqft_to_acres(d.lot_size_sq_ft),
        year_built: d.year_built,
        property_type: d.property_type.clone(),
        bedrooms: d.bedrooms,
        bathrooms: d.bathrooms,
        room_count: features.and_then(|f| f.room_count),
        septic_system: yes_no(features.and_then(|f| f.septic_system)),
        sale_price: d.last_sale_price,
        ..PropertyDetails::default()
    }
}

fn from_provider2(d: &Provider2Data) -> PropertyDetails {
    PropertyDetails {
        square_footage: d.square_footage,
        lot_size_acres: d.lot_size_acres,
        year_built: d.year_constructed,
        property_type: d.property_type.clone(),
        bedrooms: d.bedrooms,
        bathrooms: d.bathrooms,
        room_count: d.room_count,
        septic_system: yes_no(d.septic_system),
        sale_price: d.sale_price,
        ..PropertyDetails::default()
    }
}

// Missing septic info reads as "No".
fn yes_no(flag: Option<bool>) -> Option<String> {
    let label = if flag.unwrap_or(false) { "Yes" } else { "No" };
    Some(label.to_string())
}

fn post_process(details: &mut PropertyDetails) {
    details.sale_price_formatted = details
        .sale_price
        .filter(|price| *price != 0)
        .map(format_usd);
}
