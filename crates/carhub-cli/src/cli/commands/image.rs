//! `carhub image` – print the CDN image URL for a car.

use anyhow::Result;
use carhub_core::config::CarhubConfig;
use carhub_core::image_url::ImageCdn;
use carhub_core::types::Car;

pub fn run_image(
    cfg: &CarhubConfig,
    make: &str,
    model: &str,
    year: i32,
    angle: Option<&str>,
) -> Result<()> {
    let cdn = ImageCdn::from_config(cfg)?;
    let car = Car {
        make: make.to_string(),
        model: model.to_string(),
        year,
        ..Default::default()
    };
    println!("{}", cdn.car_image_url(&car, angle));
    Ok(())
}
