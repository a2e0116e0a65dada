pub mod config;
pub mod logging;

pub mod car_api;
pub mod constants;
pub mod image_url;
pub mod mock;
pub mod pricing;
pub mod query_state;
pub mod types;
