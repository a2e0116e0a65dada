//! `carhub set-param` / `carhub delete-param` – rewrite a location's query.

use carhub_core::query_state::{self, Location};

pub fn run_set_param(location: &str, key: &str, value: &str) {
    let location = Location::parse(location);
    println!("{}", query_state::update_search_params(&location, key, value));
}

pub fn run_delete_param(location: &str, key: &str) {
    let location = Location::parse(location);
    println!("{}", query_state::delete_search_params(&location, key));
}
