use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0}")]
    Config(String),
    #[error("{0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}
