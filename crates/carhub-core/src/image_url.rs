//! Image CDN URL construction. No network access.

use url::Url;

use crate::config::{self, CarhubConfig};
use crate::types::Car;

/// Zoom mode requested for every image.
const ZOOM_TYPE: &str = "fullscreen";
/// Sent when no angle is requested; the CDN treats it as its default view.
const ANGLE_UNSET: &str = "undefined";

/// Builds image URLs for one CDN customer.
#[derive(Debug, Clone)]
pub struct ImageCdn {
    base: Url,
    customer: String,
}

impl ImageCdn {
    pub fn new(base: Url, customer: impl Into<String>) -> Self {
        Self {
            base,
            customer: customer.into(),
        }
    }

    /// CDN from config; the customer key comes from `IMAGIN_API_KEY`.
    pub fn from_config(cfg: &CarhubConfig) -> anyhow::Result<Self> {
        let base = Url::parse(&cfg.image_cdn_url)?;
        Ok(Self::new(base, config::imagin_api_key()))
    }

    /// Image URL for `car` viewed from `angle`.
    ///
    /// Query order: `customer`, `make`, `modelFamily` (first space-delimited
    /// word of the model), `zoomType`, `modelYear`, `angle`.
    pub fn car_image_url(&self, car: &Car, angle: Option<&str>) -> String {
        let model_family = car.model.split(' ').next().unwrap_or_default();
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("customer", &self.customer)
            .append_pair("make", &car.make)
            .append_pair("modelFamily", model_family)
            .append_pair("zoomType", ZOOM_TYPE)
            .append_pair("modelYear", &car.year.to_string())
            .append_pair("angle", angle.unwrap_or(ANGLE_UNSET));
        url.into()
    }
}

impl Default for ImageCdn {
    fn default() -> Self {
        let base =
            Url::parse(config::DEFAULT_IMAGE_CDN_URL).expect("default image CDN URL is valid");
        Self::new(base, config::imagin_api_key())
    }
}

/// Image URL on the default CDN, with the customer key from the environment.
pub fn generate_car_image_url(car: &Car, angle: Option<&str>) -> String {
    ImageCdn::default().car_image_url(car, angle)
}
