//! `carhub rent` – daily rate estimate.

use carhub_core::pricing;

pub fn run_rent(mpg: f64, year: i32) {
    println!("${}/day", pricing::calculate_car_rent(mpg, year));
}
