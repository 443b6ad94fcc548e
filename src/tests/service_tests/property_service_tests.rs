use crate::domain::{ProviderResponse, ProviderResult};
use crate::errors::ServerError;
use crate::providers::ProviderKind;
use crate::services::property_service::MISSING_ADDRESS;
use crate::services::{PropertyService, ProviderSlot};
use crate::tests::fakes::{
    provider1_body, provider2_body, FailingProvider, SlowProvider, StaticProvider,
};
use crate::tests::utils::test_cache;
use std::sync::Arc;
use std::time::Duration;

const ADDRESS: &str = "123 Test Street, City, State";
const TIMEOUT: Duration = Duration::from_secs(5);

fn details(result: &ProviderResult) -> &crate::domain::PropertyDetails {
    match result {
        ProviderResult::Details(d) => d,
        other => panic!("expected details, got {other:?}"),
    }
}

fn failure_message(result: &ProviderResult) -> &str {
    match result {
        ProviderResult::Failed(f) => &f.error,
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn blank_address_is_rejected_before_anything_runs() {
    let p1 = StaticProvider::new(ProviderKind::Provider1, provider1_body());
    let cache = test_cache();
    let service = PropertyService::new(cache.service(), vec![ProviderSlot::ready(p1.clone(), TIMEOUT)]);

    for address in ["", "   ", "\t\n"] {
        match service.lookup(address) {
            Err(ServerError::BadRequest(msg)) => assert_eq!(msg, MISSING_ADDRESS),
            other => panic!("expected bad request, got {other:?}"),
        }
    }
    assert_eq!(p1.calls(), 0);
}

#[test]
fn cache_miss_fetches_normalizes_and_caches() {
    let p1 = StaticProvider::new(ProviderKind::Provider1, provider1_body());
    let p2 = StaticProvider::new(ProviderKind::Provider2, provider2_body());
    let cache = test_cache();
    let service = PropertyService::new(
        cache.service(),
        vec![
            ProviderSlot::ready(p1.clone(), TIMEOUT),
            ProviderSlot::ready(p2.clone(), TIMEOUT),
        ],
    );

    let results = service.lookup(ADDRESS).unwrap();

    assert_eq!(results.len(), 2);
    let first = details(&results[0]);
    assert_eq!(first.provider, "Provider 1");
    assert_eq!(first.lot_size_acres, Some(1.0));
    assert_eq!(first.sale_price_formatted.as_deref(), Some("$500,000"));
    assert!(!first.cached);

    let second = details(&results[1]);
    assert_eq!(second.provider, "Provider 2");
    assert_eq!(second.septic_system.as_deref(), Some("Yes"));
    assert!(!second.cached);

    assert_eq!(p1.calls(), 1);
    assert_eq!(p2.calls(), 1);

    let combined: Option<ProviderResponse> = cache.get(ADDRESS, None);
    assert_eq!(combined.map(|c| c.len()), Some(2));
    let p1_entry: Option<ProviderResult> = cache.get(ADDRESS, Some("provider1"));
    assert!(p1_entry.is_some());
}

#[test]
fn cache_hit_marks_results_cached_and_skips_providers() {
    let p1 = StaticProvider::new(ProviderKind::Provider1, provider1_body());
    let p2 = StaticProvider::new(ProviderKind::Provider2, provider2_body());
    let cache = test_cache();
    let service = PropertyService::new(
        cache.service(),
        vec![
            ProviderSlot::ready(p1.clone(), TIMEOUT),
            ProviderSlot::ready(p2.clone(), TIMEOUT),
        ],
    );

    service.lookup(ADDRESS).unwrap();
    let again = service.lookup("123 test street,  city, state").unwrap();

    assert_eq!(again.len(), 2);
    assert!(again.iter().all(|r| r.is_cached()));
    assert_eq!(p1.calls(), 1);
    assert_eq!(p2.calls(), 1);
}

#[test]
fn provider_cache_is_used_when_combined_entry_is_missing() {
    let p1 = StaticProvider::new(ProviderKind::Provider1, provider1_body());
    let p2 = StaticProvider::new(ProviderKind::Provider2, provider2_body());
    let cache = test_cache();
    let service = PropertyService::new(
        cache.service(),
        vec![
            ProviderSlot::ready(p1.clone(), TIMEOUT),
            ProviderSlot::ready(p2.clone(), TIMEOUT),
        ],
    );

    service.lookup(ADDRESS).unwrap();
    assert!(cache.delete(ADDRESS, None));
    assert!(cache.delete(ADDRESS, Some("provider2")));

    let results = service.lookup(ADDRESS).unwrap();

    assert!(results[0].is_cached());
    assert!(!results[1].is_cached());
    assert_eq!(p1.calls(), 1);
    assert_eq!(p2.calls(), 2);
}

#[test]
fn slow_provider_times_out_without_sinking_the_others() {
    let p1 = StaticProvider::new(ProviderKind::Provider1, provider1_body());
    let slow = Arc::new(SlowProvider {
        kind: ProviderKind::Provider2,
        delay: Duration::from_secs(3),
    });
    let cache = test_cache();
    let service = PropertyService::new(
        cache.service(),
        vec![
            ProviderSlot::ready(p1, TIMEOUT),
            ProviderSlot::ready(slow, Duration::from_millis(100)),
        ],
    );

    let results = service.lookup(ADDRESS).unwrap();

    assert_eq!(details(&results[0]).provider, "Provider 1");
    assert_eq!(results[1].provider(), "Provider 2");
    assert_eq!(failure_message(&results[1]), "Timeout fetching data from provider2");

    // Partial results are not cached as a whole.
    let combined: Option<ProviderResponse> = cache.get(ADDRESS, None);
    assert!(combined.is_none());
    let p1_entry: Option<ProviderResult> = cache.get(ADDRESS, Some("provider1"));
    assert!(p1_entry.is_some());
}

#[test]
fn unavailable_provider_reports_initialization_error() {
    let p2 = StaticProvider::new(ProviderKind::Provider2, provider2_body());
    let cache = test_cache();
    let service = PropertyService::new(
        cache.service(),
        vec![
            ProviderSlot::unavailable(ProviderKind::Provider1, TIMEOUT, "PROVIDER1_API_URL is not set"),
            ProviderSlot::ready(p2, TIMEOUT),
        ],
    );

    let results = service.lookup(ADDRESS).unwrap();

    assert_eq!(
        failure_message(&results[0]),
        "Service initialization error: PROVIDER1_API_URL is not set"
    );
    assert_eq!(results[0].provider(), "Provider 1");
    assert_eq!(details(&results[1]).provider, "Provider 2");
}

#[test]
fn upstream_failure_is_carried_as_error_record() {
    let failing = Arc::new(FailingProvider {
        kind: ProviderKind::Provider1,
        message: "connection refused".into(),
    });
    let p2 = StaticProvider::new(ProviderKind::Provider2, provider2_body());
    let cache = test_cache();
    let service = PropertyService::new(
        cache.service(),
        vec![
            ProviderSlot::ready(failing, TIMEOUT),
            ProviderSlot::ready(p2, TIMEOUT),
        ],
    );

    let results = service.lookup(ADDRESS).unwrap();

    assert_eq!(failure_message(&results[0]), "connection refused");
    assert!(!results[0].is_cached());
    let failed_entry: Option<ProviderResult> = cache.get(ADDRESS, Some("provider1"));
    assert!(failed_entry.is_none());
}

#[test]
fn from_configs_without_urls_still_answers() {
    let cfg = crate::config::AppConfig::from_lookup(|_| None).unwrap();
    let cache = test_cache();
    let service = PropertyService::from_configs(cache.service(), &cfg.providers);

    let results = service.lookup(ADDRESS).unwrap();

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.is_failure()));
    assert!(failure_message(&results[0]).starts_with("Service initialization error"));
}
