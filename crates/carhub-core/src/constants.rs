//! Option lists shown by the front-end's filter widgets.

/// Manufacturers offered in the search box, in display order.
pub const MANUFACTURERS: &[&str] = &[
    "Acura",
    "Alfa Romeo",
    "Aston Martin",
    "Audi",
    "Bentley",
    "BMW",
    "Buick",
    "Cadillac",
    "Chevrolet",
    "Chrysler",
    "Citroen",
    "Dodge",
    "Ferrari",
    "Fiat",
    "Ford",
    "GMC",
    "Honda",
    "Hyundai",
    "Infiniti",
    "Jaguar",
    "Jeep",
    "Kia",
    "Lamborghini",
    "Land Rover",
    "Lexus",
    "Lincoln",
    "Maserati",
    "Mazda",
    "McLaren",
    "Mercedes-Benz",
    "MINI",
    "Mitsubishi",
    "Nissan",
    "Porsche",
    "Ram",
    "Rolls-Royce",
    "Subaru",
    "Tesla",
    "Toyota",
    "Volkswagen",
    "Volvo",
];

/// (label, query value) pairs for the fuel picker. The empty value clears the filter.
pub const FUELS: &[(&str, &str)] = &[("Fuel", ""), ("Gas", "Gas"), ("Electricity", "Electricity")];

/// Model years offered by the year picker.
pub const YEARS_OF_PRODUCTION: std::ops::RangeInclusive<i32> = 2015..=2023;

/// Returns the canonical spelling of a manufacturer, matched case-insensitively.
pub fn find_manufacturer(name: &str) -> Option<&'static str> {
    let name = name.trim();
    MANUFACTURERS
        .iter()
        .copied()
        .find(|m| m.eq_ignore_ascii_case(name))
}
