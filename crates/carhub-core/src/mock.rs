//! Synthetic cars for working without the car data API.
//!
//! Numbers are random within fixed ranges; the list order, `make` and `model`
//! are deterministic. Nothing is cached: every call draws fresh values.

use rand::Rng;

use crate::constants::MANUFACTURERS;
use crate::types::{Car, Drive, Transmission};

/// At most this many manufacturers are used.
pub const MAX_MOCK_CARS: usize = 10;

const DRIVES: [Drive; 3] = [Drive::Fwd, Drive::Rwd, Drive::Awd];

/// One mock car per manufacturer, taken from the first [`MAX_MOCK_CARS`] entries.
pub fn generate_mock_cars<S: AsRef<str>>(manufacturers: &[S]) -> Vec<Car> {
    generate_mock_cars_with_rng(&mut rand::thread_rng(), manufacturers)
}

/// Mock cars for the built-in manufacturer list.
pub fn mock_cars() -> Vec<Car> {
    generate_mock_cars(MANUFACTURERS)
}

/// Like [`generate_mock_cars`] with a caller-supplied random source.
pub fn generate_mock_cars_with_rng<R: Rng + ?Sized, S: AsRef<str>>(
    rng: &mut R,
    manufacturers: &[S],
) -> Vec<Car> {
    manufacturers
        .iter()
        .take(MAX_MOCK_CARS)
        .enumerate()
        .map(|(idx, make)| mock_car(rng, make.as_ref(), idx))
        .collect()
}

fn mock_car<R: Rng + ?Sized>(rng: &mut R, make: &str, idx: usize) -> Car {
    let displacement = (rng.gen::<f64>() * 3.0 + 1.0) * 10.0;
    Car {
        city_mpg: rng.gen_range(15..=40),
        class: "sedan".to_string(),
        combination_mpg: rng.gen_range(18..=38),
        cylinders: rng.gen_range(3..=8),
        displacement: displacement.round() / 10.0,
        drive: DRIVES[rng.gen_range(0..DRIVES.len())],
        fuel_type: "Gas".to_string(),
        highway_mpg: rng.gen_range(20..=45),
        make: make.to_string(),
        model: format!("Model {}", model_letter(idx)),
        transmission: if rng.gen_bool(0.5) {
            Transmission::Automatic
        } else {
            Transmission::Manual
        },
        year: rng.gen_range(2015..=2023),
    }
}

/// `0` → `A`, `1` → `B`, ...
fn model_letter(idx: usize) -> char {
    char::from(b'A' + idx as u8)
}
