mod kind;
mod lenient;
pub mod models;
pub mod normalize;
mod provider;
mod provider_error;

pub use kind::{ProviderConfig, ProviderKind};
pub use normalize::standardize;
pub use provider::{HttpProvider, PropertyProvider};
pub use provider_error::ProviderError;
