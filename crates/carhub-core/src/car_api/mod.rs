//! Car data API client.
//!
//! One GET per call, built from [`CarFilters`], using the curl crate (libcurl).
//! Failures never reach the caller of [`CarApi::fetch_cars`]: they are logged
//! and turned into an empty list.

mod error;
mod parse;

pub use error::FetchError;

use std::time::Duration;
use url::Url;

use crate::config::{self, CarhubConfig};
use crate::types::{Car, CarFilters};

/// Client for the car data endpoint.
#[derive(Debug, Clone)]
pub struct CarApi {
    endpoint: Url,
    host: String,
    api_key: String,
    timeout: Option<Duration>,
}

impl CarApi {
    pub fn new(endpoint: Url, host: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint,
            host: host.into(),
            api_key: api_key.into(),
            timeout: None,
        }
    }

    /// Limit the whole transfer to `timeout`. Without it a request waits indefinitely.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Client from config; the API key comes from `RAPID_API_KEY`.
    pub fn from_config(cfg: &CarhubConfig) -> anyhow::Result<Self> {
        let endpoint = Url::parse(&cfg.cars_api_url)?;
        let mut api = Self::new(endpoint, cfg.cars_api_host.clone(), config::rapid_api_key());
        if let Some(secs) = cfg.request_timeout_secs {
            api = api.with_timeout(Duration::from_secs(secs));
        }
        Ok(api)
    }

    /// Request URL for `filters`.
    ///
    /// Appends `make`, `year`, `fuel_type`, `model` for the fields that are set
    /// (empty text and year 0 count as unset). `limit` is never sent.
    pub fn request_url(&self, filters: &CarFilters) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            if let Some(make) = non_empty(&filters.manufacturer) {
                query.append_pair("make", make);
            }
            if let Some(year) = filters.year.filter(|y| *y != 0) {
                query.append_pair("year", &year.to_string());
            }
            if let Some(fuel) = non_empty(&filters.fuel) {
                query.append_pair("fuel_type", fuel);
            }
            if let Some(model) = non_empty(&filters.model) {
                query.append_pair("model", model);
            }
        }
        // query_pairs_mut leaves a bare "?" when nothing was appended.
        if url.query() == Some("") {
            url.set_query(None);
        }
        url
    }

    /// Header lines in curl's `Name: value` form. An empty value uses curl's
    /// `Name;` form so the header is still sent.
    fn header_lines(&self) -> Vec<String> {
        [("x-rapidapi-key", self.api_key.as_str()), ("x-rapidapi-host", self.host.as_str())]
            .iter()
            .map(|(name, value)| {
                if value.is_empty() {
                    format!("{name};")
                } else {
                    format!("{name}: {value}")
                }
            })
            .collect()
    }

    /// Fetches cars matching `filters`, surfacing the failure cause.
    pub async fn try_fetch_cars(&self, filters: &CarFilters) -> Result<Vec<Car>, FetchError> {
        let url = self.request_url(filters);
        let headers = self.header_lines();
        let timeout = self.timeout;
        tracing::debug!("GET {}", url);

        let (status, body) =
            tokio::task::spawn_blocking(move || get(url.as_str(), &headers, timeout)).await??;
        if !(200..300).contains(&status) {
            tracing::warn!("car API returned HTTP {}", status);
        }
        tracing::debug!("car API body: {}", String::from_utf8_lossy(&body));
        parse::parse_cars(status, &body)
    }

    /// Fetches cars matching `filters`; any failure yields an empty list.
    pub async fn fetch_cars(&self, filters: &CarFilters) -> Vec<Car> {
        match self.try_fetch_cars(filters).await {
            Ok(cars) => {
                tracing::info!(count = cars.len(), "car API result");
                cars
            }
            Err(err) => {
                tracing::error!("car API request failed: {}", err);
                Vec::new()
            }
        }
    }
}

impl Default for CarApi {
    /// Default endpoint and host, API key from the environment.
    fn default() -> Self {
        let endpoint =
            Url::parse(config::DEFAULT_CARS_API_URL).expect("default cars API URL is valid");
        Self::new(endpoint, config::DEFAULT_CARS_API_HOST, config::rapid_api_key())
    }
}

/// [`CarApi::fetch_cars`] against the default endpoint.
pub async fn fetch_cars(filters: &CarFilters) -> Vec<Car> {
    CarApi::default().fetch_cars(filters).await
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Blocking GET returning (status, body). Follows redirects.
fn get(
    url: &str,
    header_lines: &[String],
    timeout: Option<Duration>,
) -> Result<(u32, Vec<u8>), FetchError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    if let Some(timeout) = timeout {
        easy.timeout(timeout)?;
    }

    let mut list = curl::easy::List::new();
    for line in header_lines {
        list.append(line)?;
    }
    easy.http_headers(list)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    Ok((status, body))
}
