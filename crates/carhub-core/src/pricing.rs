//! Daily rental rate estimate.

use chrono::Datelike;

/// Base rental price per day in dollars.
const BASE_PRICE_PER_DAY: f64 = 50.0;
/// Added per unit of fuel efficiency (mpg).
const MILEAGE_FACTOR: f64 = 0.1;
/// Added per year of vehicle age.
const AGE_FACTOR: f64 = 0.05;

/// Estimates the daily rate for a car against the current local year.
///
/// Returns whole dollars as text, e.g. `"53"`. See [`calculate_car_rent_for_year`].
pub fn calculate_car_rent(efficiency: f64, model_year: i32) -> String {
    calculate_car_rent_for_year(efficiency, model_year, chrono::Local::now().year())
}

/// `50 + efficiency * 0.1 + (current_year - model_year) * 0.05`, rounded half away from zero.
///
/// Model years in the future give a negative age term; the result is not clamped.
pub fn calculate_car_rent_for_year(efficiency: f64, model_year: i32, current_year: i32) -> String {
    let mileage_rate = efficiency * MILEAGE_FACTOR;
    let age_rate = f64::from(current_year - model_year) * AGE_FACTOR;
    let rate = BASE_PRICE_PER_DAY + mileage_rate + age_rate;
    // rate.round() is integral, so {:.0} never has to break a tie. Keeps "-0".
    format!("{:.0}", rate.round())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn this_year() -> i32 {
        chrono::Local::now().year()
    }

    #[test]
    fn thirty_mpg_new_car_is_53() {
        assert_eq!(calculate_car_rent(30.0, this_year()), "53");
        assert_eq!(calculate_car_rent_for_year(30.0, 2024, 2024), "53");
    }

    #[test]
    fn age_adds_five_cents_per_year() {
        // 50 + 2.3 + 10 * 0.05 = 52.8
        assert_eq!(calculate_car_rent_for_year(23.0, 2014, 2024), "53");
        // 50 + 1.5 + 0.2 = 51.7
        assert_eq!(calculate_car_rent_for_year(15.0, 2020, 2024), "52");
    }

    #[test]
    fn halves_round_up() {
        // 50 + 2.5 + 0 = 52.5
        assert_eq!(calculate_car_rent_for_year(25.0, 2024, 2024), "53");
        // 50 + 3.5 = 53.5
        assert_eq!(calculate_car_rent_for_year(35.0, 2024, 2024), "54");
    }

    #[test]
    fn never_below_base_for_past_years() {
        let now = this_year();
        for mpg in [0.0, 0.4, 12.0, 40.0, 120.0] {
            for year in [1950, 2000, 2015, now] {
                let rent: i64 = calculate_car_rent(mpg, year).parse().unwrap();
                assert!(rent >= 50, "mpg={mpg} year={year} rent={rent}");
            }
        }
    }

    #[test]
    fn future_model_year_is_not_clamped() {
        // 50 + 0 + (2024 - 3024) * 0.05 = 0
        assert_eq!(calculate_car_rent_for_year(0.0, 3024, 2024), "0");
        // 50 - 100 = -50
        assert_eq!(calculate_car_rent_for_year(0.0, 4024, 2024), "-50");
        assert_eq!(calculate_car_rent_for_year(0.0, 2026, 2024), "50");
    }

    #[test]
    fn small_negative_rate_renders_negative_zero() {
        // 50 + (2024 - 3030) * 0.05 = -0.3
        assert_eq!(calculate_car_rent_for_year(0.0, 3030, 2024), "-0");
    }
}
