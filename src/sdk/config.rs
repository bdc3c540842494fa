use crate::sdk::map::geo::LatLng;
use crate::sdk::routing::route::{ProviderKeys, VehicleProfile};
use std::{collections::HashMap, env, str::FromStr, time::Duration};
use thiserror::Error;

pub const SERVICE_URL_VAR: &str = "ROUTE_SERVICE_URL";
pub const SERVICE_TIMEOUT_VAR: &str = "ROUTE_SERVICE_TIMEOUT_SECS";
pub const FUEL_EFFICIENCY_VAR: &str = "VEHICLE_FUEL_EFFICIENCY";
pub const EMISSION_FACTOR_VAR: &str = "VEHICLE_EMISSION_FACTOR";
pub const API_KEY_PREFIX: &str = "ROUTE_API_KEY_";
pub const TILE_URL_VAR: &str = "MAP_TILE_URL";

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: String, value: String },
}

/// Everything the route client needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// `None` leaves the transport's own default in place.
    pub timeout: Option<Duration>,
    pub vehicle: VehicleProfile,
    pub provider_keys: ProviderKeys,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVICE_URL.to_string(),
            timeout: None,
            vehicle: VehicleProfile::default(),
            provider_keys: ProviderKeys::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::vars())
    }

    /// Builds the config from an explicit set of variables instead of the process environment.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: HashMap<String, String> = vars.into_iter().collect();
        let defaults = VehicleProfile::default();

        let base_url = match vars.get(SERVICE_URL_VAR) {
            Some(url) => {
                let trimmed = url.trim().trim_end_matches('/');
                if trimmed.is_empty() {
                    return Err(invalid(SERVICE_URL_VAR, url));
                }
                trimmed.to_string()
            }
            None => DEFAULT_SERVICE_URL.to_string(),
        };

        let timeout = parse_var::<u64>(&vars, SERVICE_TIMEOUT_VAR)?.map(Duration::from_secs);
        let vehicle = VehicleProfile {
            fuel_efficiency: parse_var(&vars, FUEL_EFFICIENCY_VAR)?
                .unwrap_or(defaults.fuel_efficiency),
            emission_factor: parse_var(&vars, EMISSION_FACTOR_VAR)?
                .unwrap_or(defaults.emission_factor),
        };

        let mut provider_keys = ProviderKeys::default();
        for (name, value) in &vars {
            if let Some(provider) = name.strip_prefix(API_KEY_PREFIX) {
                if !provider.is_empty() {
                    provider_keys.insert(provider.to_ascii_lowercase(), value.clone());
                }
            }
        }

        log::debug!(
            "Route service at {} with {} provider key(s)",
            base_url,
            provider_keys.len()
        );

        Ok(Self {
            base_url,
            timeout,
            vehicle,
            provider_keys,
        })
    }
}

#[derive(Debug, Clone)]
pub struct MapConfig {
    pub tile_url: String,
    pub default_center: LatLng,
    pub default_zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: DEFAULT_TILE_URL.to_string(),
            default_center: LatLng::new(51.505, -0.09),
            default_zoom: 13,
        }
    }
}

impl MapConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var(TILE_URL_VAR) {
            if !url.trim().is_empty() {
                config.tile_url = url;
            }
        }
        config
    }
}

fn parse_var<T: FromStr>(
    vars: &HashMap<String, String>,
    var: &str,
) -> Result<Option<T>, ConfigError> {
    match vars.get(var) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| invalid(var, raw)),
        None => Ok(None),
    }
}

fn invalid(var: &str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        var: var.to_string(),
        value: value.to_string(),
    }
}
