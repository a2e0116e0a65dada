//! Decode a car data response body.

use serde_json::Value;

use super::FetchError;
use crate::types::Car;

/// Decodes `body` as a JSON array of cars. `status` is kept for the error only;
/// a list body is accepted whatever the status.
///
/// Only a body that is not a JSON array is an error. Elements that do not
/// decode as a [`Car`] are logged and skipped; the rest are returned in order.
pub(crate) fn parse_cars(status: u32, body: &[u8]) -> Result<Vec<Car>, FetchError> {
    let records: Vec<Value> =
        serde_json::from_slice(body).map_err(|source| FetchError::Decode { status, source })?;
    let cars = records
        .into_iter()
        .enumerate()
        .filter_map(|(idx, record)| match serde_json::from_value::<Car>(record) {
            Ok(car) => Some(car),
            Err(err) => {
                tracing::warn!("skipping car record {}: {}", idx, err);
                None
            }
        })
        .collect();
    Ok(cars)
}
