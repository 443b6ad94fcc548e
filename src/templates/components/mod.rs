pub mod cache_badge;
pub mod error;
pub mod field_groups;
pub mod notice;
pub mod results_table;

pub use cache_badge::cache_badge;
pub use error::html_error_response;
pub use field_groups::FIELD_GROUPS;
pub use notice::{error_notice, info_notice, loading_indicator};
pub use results_table::results_table;
