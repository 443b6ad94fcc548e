use crate::router::handle;
use crate::tests::utils::{read_body, test_app, test_cache, MockHttp};
use astra::Body;
use http::{Method, Request};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

/// `/properties` backend answering `status` with a JSON `body`, once.
fn backend(address: &str, status: u16, body: &str) -> MockHttp {
    let server = MockHttp::start();
    server.mount(
        Mock::given(method("GET"))
            .and(path("/properties"))
            .and(query_param("address", address))
            .respond_with(ResponseTemplate::new(status).set_body_raw(body, "application/json"))
            .expect(1),
    );
    server
}

fn htmx_get(uri: &str) -> astra::Request {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("HX-Request", "true")
        .body(Body::empty())
        .unwrap()
}

#[test]
fn search_page_loads_successfully() {
    let app = test_app(test_cache(), vec![], "http://127.0.0.1:9");

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let resp = handle(req, &app).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    let body = read_body(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Property Detail Search"));
    assert!(body.contains("Enter full address, including street, city, state, and zip"));
    assert!(body.contains("Search"));
    assert!(body.contains(r#"id="results""#));
}

#[test]
fn htmx_search_returns_results_fragment() {
    let backend_json = r#"[
        {"provider": "Provider 1", "property_type": "Single Family", "year_built": 1985,
         "septic_system": "No", "sale_price": 500000, "cached": true},
        {"error": "Timeout fetching data from provider2", "provider": "Provider 2", "cached": false}
    ]"#;
    let backend = backend("123 Main St, Apt #4", 200, backend_json);
    let app = test_app(test_cache(), vec![], &backend.uri());

    let resp = handle(htmx_get("/search?address=123+Main+St%2C+Apt+%234"), &app)
        .expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    let body = read_body(resp);

    // Partial, so htmx can swap it into #results
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));

    assert!(body.contains("Property Details for 123 Main St, Apt #4"));
    assert!(body.contains("Single Family"));
    assert!(body.contains("$500,000"));
    assert!(body.contains(">Cached<"));
    assert!(body.contains("Error from Provider 2"));

    let seen = backend.received();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].url.query(), Some("address=123+Main+St%2C+Apt+%234"));
}

#[test]
fn full_page_search_embeds_results() {
    let backend = backend("1 Elm St", 200, "[]");
    let app = test_app(test_cache(), vec![], &backend.uri());

    let req = Request::builder()
        .method(Method::GET)
        .uri("/search?address=1+Elm+St")
        .body(Body::empty())
        .unwrap();
    let resp = handle(req, &app).expect("Failed to handle request");

    let body = read_body(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains(r#"value="1 Elm St""#));
    assert!(body.contains("No property data available for this address."));
}

#[test]
fn backend_error_status_shows_notice() {
    let backend = backend("1 Elm St", 500, r#"{"error": "boom"}"#);
    let app = test_app(test_cache(), vec![], &backend.uri());

    let resp = handle(htmx_get("/search?address=1+Elm+St"), &app).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    let body = read_body(resp);
    assert!(body.contains("Error fetching property details"));
    assert!(body.contains("Failed to fetch property details for address 1 Elm St"));
    assert!(!body.contains("Property Details for"));
}

#[test]
fn unreachable_backend_shows_notice() {
    let app = test_app(test_cache(), vec![], "http://127.0.0.1:9");

    let resp = handle(htmx_get("/search?address=1+Elm+St"), &app).expect("Failed to handle request");

    let body = read_body(resp);
    assert!(body.contains("Error fetching property details"));
}

#[test]
fn empty_search_asks_for_an_address() {
    let app = test_app(test_cache(), vec![], "http://127.0.0.1:9");

    let resp = handle(htmx_get("/search?address=+++"), &app).expect("Failed to handle request");

    let body = read_body(resp);
    assert!(body.contains("Missing or empty address parameter"));
}
