pub mod cache_service;
pub mod property_client;
pub mod property_service;

pub use cache_service::CacheService;
pub use property_client::{ClientError, PropertyClient};
pub use property_service::{PropertyService, ProviderSlot};
