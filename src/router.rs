use crate::errors::ServerError;
use crate::responses::{html_response, json_error_response, json_response, text_response, ResultResp};
use crate::services::property_service::MISSING_ADDRESS;
use crate::state::AppState;
use crate::templates::pages::{search_page, search_results, SearchOutcome};
use astra::Request;
use std::collections::HashMap;
use tracing::{info, warn};

pub fn handle(req: Request, app: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => html_response(search_page("", None)),
        ("GET", "/search") => search(&req, app),
        ("GET", "/properties") => Ok(properties(&req, app)),
        ("GET", "/health") => text_response(200, "ok"),
        _ => Err(ServerError::NotFound),
    }
}

/// JSON API. Errors are JSON too, never the HTML error page.
fn properties(req: &Request, app: &AppState) -> astra::Response {
    let params = parse_query(req);
    let address = params.get("address").map(String::as_str).unwrap_or("");

    let looked_up = app.properties.lookup(address).and_then(|results| {
        for result in results.iter().filter(|r| r.is_failure()) {
            warn!(provider = result.provider(), "provider failed for this lookup");
        }
        info!(
            providers = results.len(),
            cached = results.iter().filter(|r| r.is_cached()).count(),
            "properties lookup done"
        );
        json_response(200, &results)
    });

    match looked_up {
        Ok(resp) => resp,
        Err(err) => {
            warn!(status = err.status(), "properties request failed: {err}");
            json_error_response(&err)
        }
    }
}

/// The search page's "submit": ask the backend, render the table.
/// htmx requests get just the `#results` fragment.
fn search(req: &Request, app: &AppState) -> ResultResp {
    let params = parse_query(req);
    let address = params
        .get("address")
        .map(|a| a.trim().to_string())
        .unwrap_or_default();

    let fetched;
    let outcome = if address.is_empty() {
        SearchOutcome::Invalid(MISSING_ADDRESS)
    } else {
        info!(address = %address, "searching");
        fetched = app
            .client
            .fetch_property_details(&address)
            .map_err(|e| e.to_string());
        match &fetched {
            Ok(results) => SearchOutcome::Results(results),
            Err(message) => SearchOutcome::Failed(message),
        }
    };

    if is_htmx(req) {
        html_response(search_results(&address, outcome))
    } else {
        html_response(search_page(&address, Some(outcome)))
    }
}

fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
