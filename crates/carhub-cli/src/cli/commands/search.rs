//! `carhub search` – query the car data API (or mock data) and print results.

use anyhow::Result;
use carhub_core::car_api::CarApi;
use carhub_core::config::CarhubConfig;
use carhub_core::constants::{find_manufacturer, FUELS, YEARS_OF_PRODUCTION};
use carhub_core::mock;
use carhub_core::types::CarFilters;
use clap::Args;

use super::table::print_cars;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Manufacturer, sent as `make`.
    #[arg(long)]
    pub manufacturer: Option<String>,
    /// Model year.
    #[arg(long)]
    pub year: Option<i32>,
    /// Fuel type, sent as `fuel_type`.
    #[arg(long)]
    pub fuel: Option<String>,
    /// Model name.
    #[arg(long)]
    pub model: Option<String>,
    /// Page size kept with the filters; the API is not asked to limit results.
    #[arg(long)]
    pub limit: Option<u32>,
    /// Start from the filters in a location query string (e.g. "?manufacturer=BMW&year=2022").
    /// Flags given alongside override its values.
    #[arg(long, value_name = "QUERY")]
    pub from_query: Option<String>,
    /// Use generated mock cars instead of calling the API.
    #[arg(long)]
    pub mock: bool,
    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    pub fn filters(&self) -> CarFilters {
        let base = self
            .from_query
            .as_deref()
            .map(CarFilters::from_query)
            .unwrap_or_default();
        CarFilters {
            manufacturer: self.manufacturer.clone().or(base.manufacturer),
            year: self.year.or(base.year),
            fuel: self.fuel.clone().or(base.fuel),
            model: self.model.clone().or(base.model),
            limit: self.limit.or(base.limit),
        }
    }
}

/// Uses the picker's spelling for known manufacturers and warns about values
/// the front-end would never produce. Unknown values are still sent.
fn normalize(mut filters: CarFilters) -> CarFilters {
    if let Some(name) = filters.manufacturer.take() {
        filters.manufacturer = Some(match find_manufacturer(&name) {
            Some(canonical) => canonical.to_string(),
            None => {
                tracing::warn!("unknown manufacturer {:?}", name);
                name
            }
        });
    }
    if let Some(year) = filters.year {
        if !YEARS_OF_PRODUCTION.contains(&year) {
            tracing::warn!("year {} outside the picker range", year);
        }
    }
    if let Some(fuel) = filters.fuel.as_deref() {
        if !FUELS.iter().any(|(_, v)| !v.is_empty() && v.eq_ignore_ascii_case(fuel)) {
            tracing::warn!("unknown fuel {:?}", fuel);
        }
    }
    filters
}

pub async fn run_search(cfg: &CarhubConfig, args: &SearchArgs) -> Result<()> {
    let filters = normalize(args.filters());
    let cars = if args.mock {
        tracing::debug!("search using mock data, filters ignored: {:?}", filters);
        mock::mock_cars()
    } else {
        let api = CarApi::from_config(cfg)?;
        api.fetch_cars(&filters).await
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&cars)?);
    } else {
        print_cars(&cars);
    }
    Ok(())
}
