//! `carhub mock` – print generated mock cars.

use anyhow::Result;
use carhub_core::mock;

use super::table::print_cars;

pub fn run_mock(json: bool) -> Result<()> {
    let cars = mock::mock_cars();
    if json {
        println!("{}", serde_json::to_string_pretty(&cars)?);
    } else {
        print_cars(&cars);
    }
    Ok(())
}
