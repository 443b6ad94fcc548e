pub mod conversion;
pub mod details;

pub use details::{PropertyDetails, ProviderFailure, ProviderResponse, ProviderResult};
