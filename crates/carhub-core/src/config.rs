use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the car data API key (sent as `x-rapidapi-key`).
pub const RAPID_API_KEY_ENV: &str = "RAPID_API_KEY";
/// Environment variable holding the image CDN customer key.
pub const IMAGIN_API_KEY_ENV: &str = "IMAGIN_API_KEY";

pub const DEFAULT_CARS_API_URL: &str = "https://cars-by-api-ninjas.p.rapidapi.com/v1/cars";
pub const DEFAULT_CARS_API_HOST: &str = "cars-by-api-ninjas.p.rapidapi.com";
pub const DEFAULT_IMAGE_CDN_URL: &str = "https://cdn.imagin.studio/getimage";

/// Global configuration loaded from `~/.config/carhub/config.toml`.
///
/// Credentials are not stored here; see [`rapid_api_key`] and [`imagin_api_key`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarhubConfig {
    /// Car data endpoint queried by the search command.
    pub cars_api_url: String,
    /// Value of the `x-rapidapi-host` header.
    pub cars_api_host: String,
    /// Base URL of the image CDN.
    pub image_cdn_url: String,
    /// Optional whole-request timeout in seconds (None = wait indefinitely).
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for CarhubConfig {
    fn default() -> Self {
        Self {
            cars_api_url: DEFAULT_CARS_API_URL.to_string(),
            cars_api_host: DEFAULT_CARS_API_HOST.to_string(),
            image_cdn_url: DEFAULT_IMAGE_CDN_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("carhub")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CarhubConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CarhubConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<CarhubConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: CarhubConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// API key for the car data service, empty when unset.
pub fn rapid_api_key() -> String {
    env_or_empty(RAPID_API_KEY_ENV)
}

/// Customer key for the image CDN, empty when unset.
pub fn imagin_api_key() -> String {
    env_or_empty(IMAGIN_API_KEY_ENV)
}

fn env_or_empty(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = CarhubConfig::default();
        assert_eq!(cfg.cars_api_url, DEFAULT_CARS_API_URL);
        assert_eq!(cfg.cars_api_host, "cars-by-api-ninjas.p.rapidapi.com");
        assert_eq!(cfg.image_cdn_url, "https://cdn.imagin.studio/getimage");
        assert!(cfg.request_timeout_secs.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = CarhubConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: CarhubConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.cars_api_url, cfg.cars_api_url);
        assert_eq!(parsed.cars_api_host, cfg.cars_api_host);
        assert_eq!(parsed.image_cdn_url, cfg.image_cdn_url);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            cars_api_url = "http://127.0.0.1:8080/v1/cars"
            cars_api_host = "localhost"
            image_cdn_url = "http://127.0.0.1:8081/img"
            request_timeout_secs = 10
        "#;
        let cfg: CarhubConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.cars_api_url, "http://127.0.0.1:8080/v1/cars");
        assert_eq!(cfg.cars_api_host, "localhost");
        assert_eq!(cfg.request_timeout_secs, Some(10));
    }

    #[test]
    fn load_from_reads_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            "cars_api_url = \"http://x/cars\"\ncars_api_host = \"x\"\nimage_cdn_url = \"http://x/img\"\n"
        )
        .unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.cars_api_url, "http://x/cars");
        assert!(cfg.request_timeout_secs.is_none());
    }

    #[test]
    fn load_from_rejects_missing_fields() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "cars_api_url = \"http://x/cars\"\n").unwrap();
        f.flush().unwrap();
        assert!(load_from(f.path()).is_err());
    }
}
