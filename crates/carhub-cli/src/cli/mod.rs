//! CLI for the CarHub helpers.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use carhub_core::config;

use commands::{
    run_delete_param, run_image, run_mock, run_rent, run_search, run_set_param, SearchArgs,
};

/// Top-level CLI for CarHub.
#[derive(Debug, Parser)]
#[command(name = "carhub")]
#[command(about = "CarHub: browse rental cars from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Estimate the daily rental rate of a car.
    Rent {
        /// City fuel efficiency (mpg).
        #[arg(long)]
        mpg: f64,
        /// Model year.
        #[arg(long)]
        year: i32,
    },

    /// Search the car data API (or mock data).
    Search(SearchArgs),

    /// Print the image CDN URL for a car.
    Image {
        #[arg(long)]
        make: String,
        /// Full model name; only the first word is sent.
        #[arg(long)]
        model: String,
        #[arg(long)]
        year: i32,
        /// Viewing angle code (e.g. 29, 33, 13).
        #[arg(long)]
        angle: Option<String>,
    },

    /// Set a query parameter on a location and print the new path.
    SetParam {
        /// Current location, e.g. "/?manufacturer=BMW".
        location: String,
        key: String,
        value: String,
    },

    /// Remove a query parameter from a location and print the new path.
    DeleteParam {
        /// Current location, e.g. "/?manufacturer=BMW&fuel=gas".
        location: String,
        key: String,
    },

    /// Print generated mock cars.
    Mock {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Rent { mpg, year } => run_rent(mpg, year),
            CliCommand::Search(args) => run_search(&cfg, &args).await?,
            CliCommand::Image {
                make,
                model,
                year,
                angle,
            } => run_image(&cfg, &make, &model, year, angle.as_deref())?,
            CliCommand::SetParam {
                location,
                key,
                value,
            } => run_set_param(&location, &key, &value),
            CliCommand::DeleteParam { location, key } => run_delete_param(&location, &key),
            CliCommand::Mock { json } => run_mock(json)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
