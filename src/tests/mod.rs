pub mod utils;

mod router_tests;
mod service_tests;
