// rest_api/src/config.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use models::{GeoCoordinate, UrgencyTier};

/// Defaults applied to clinic searches that omit origin, radius or urgency.
/// The shipped values centre the search on Dublin city centre.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchDefaults {
    #[serde(default = "default_origin_latitude")]
    pub origin_latitude: f64,
    #[serde(default = "default_origin_longitude")]
    pub origin_longitude: f64,
    #[serde(default = "default_max_distance_km")]
    pub max_distance_km: f64,
    #[serde(default = "default_urgency")]
    pub urgency: UrgencyTier,
}

impl SearchDefaults {
    pub fn origin(&self) -> GeoCoordinate {
        GeoCoordinate::new(self.origin_latitude, self.origin_longitude)
    }
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            origin_latitude: default_origin_latitude(),
            origin_longitude: default_origin_longitude(),
            max_distance_km: default_max_distance_km(),
            urgency: default_urgency(),
        }
    }
}

fn default_origin_latitude() -> f64 {
    53.3498
}

fn default_origin_longitude() -> f64 {
    -6.2603
}

fn default_max_distance_km() -> f64 {
    15.0
}

fn default_urgency() -> UrgencyTier {
    UrgencyTier::Routine
}

/// Configuration for the REST API server itself.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Optional override for the compiled-in clinic reference data.
    #[serde(default)]
    pub clinics_file: Option<PathBuf>,
    #[serde(default)]
    pub search: SearchDefaults,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            clinics_file: None,
            search: SearchDefaults::default(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

// Wrapper struct to match the 'server:' key in the YAML config.
#[derive(Debug, Deserialize)]
struct ServerConfigWrapper {
    server: ServerConfig,
}

/// Loads the server configuration from a YAML file, or returns the
/// compiled-in defaults when no file is given.
pub fn load_server_config(config_file_path: Option<&Path>) -> Result<ServerConfig> {
    let Some(path) = config_file_path else {
        return Ok(ServerConfig::default());
    };

    let config_content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read server config file {}", path.display()))?;

    let wrapper: ServerConfigWrapper = serde_yaml2::from_str(&config_content)
        .map_err(|e| anyhow::anyhow!("Failed to parse server config file {}: {}", path.display(), e))?;

    Ok(wrapper.server)
}
