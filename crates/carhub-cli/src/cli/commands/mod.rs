//! CLI command handlers, one file per command.

mod image;
mod mock;
mod params;
mod rent;
mod search;
mod table;

pub use image::run_image;
pub use mock::run_mock;
pub use params::{run_delete_param, run_set_param};
pub use rent::run_rent;
pub use search::{run_search, SearchArgs};
