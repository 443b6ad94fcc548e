pub mod search;

pub use search::{search_page, search_results, SearchOutcome};
