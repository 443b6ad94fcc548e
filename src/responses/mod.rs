pub mod html;
pub mod json;

pub use crate::errors::ResultResp;

pub use html::{html_response, text_response};
pub use json::{json_error_response, json_response};
