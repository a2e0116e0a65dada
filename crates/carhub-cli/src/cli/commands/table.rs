//! Plain-text car table shared by `search` and `mock`.

use carhub_core::pricing;
use carhub_core::types::Car;

pub fn print_cars(cars: &[Car]) {
    if cars.is_empty() {
        println!("No cars found.");
        return;
    }
    println!(
        "{:<14} {:<24} {:<6} {:>4} {:<6} {:<10} {:>8}",
        "MAKE", "MODEL", "YEAR", "MPG", "DRIVE", "TRANS", "RATE/DAY"
    );
    for car in cars {
        println!(
            "{:<14} {:<24} {:<6} {:>4} {:<6} {:<10} {:>8}",
            car.make,
            car.model,
            car.year,
            car.city_mpg,
            car.drive.to_string(),
            car.transmission.to_string(),
            format!("${}", pricing::calculate_car_rent(f64::from(car.city_mpg), car.year)),
        );
    }
}
