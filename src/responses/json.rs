// responses/json.rs
use crate::errors::{ResultResp, ServerError};
use astra::{Body, Response, ResponseBuilder};
use serde::Serialize;
use serde_json::json;

pub fn json_response<T: Serialize>(status: u16, value: &T) -> ResultResp {
    let body = serde_json::to_vec(value).map_err(|_| ServerError::InternalError)?;

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}

/// `{"error": "..."}` with the error's status code.
pub fn json_error_response(err: &ServerError) -> Response {
    let body = json!({ "error": err.to_string() }).to_string();

    ResponseBuilder::new()
        .status(err.status())
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
