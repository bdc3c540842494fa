use super::coords::Coordinate;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

/// Fixed vehicle parameters sent with every request.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct VehicleProfile {
    pub fuel_efficiency: f64,
    pub emission_factor: f64,
}

impl Default for VehicleProfile {
    fn default() -> Self {
        Self {
            fuel_efficiency: 10.0,
            emission_factor: 2.31,
        }
    }
}

/// Third-party credentials forwarded verbatim to the service, keyed by provider name.
#[derive(Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct ProviderKeys(BTreeMap<String, String>);

impl ProviderKeys {
    pub fn insert(&mut self, provider: impl Into<String>, key: impl Into<String>) {
        self.0.insert(provider.into(), key.into());
    }

    pub fn get(&self, provider: &str) -> Option<&str> {
        self.0.get(provider).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ProviderKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.keys().map(|provider| (provider, "<redacted>")))
            .finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ProviderKeys {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Vehicle and credentials shared by every request a client makes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestProfile {
    pub vehicle: VehicleProfile,
    pub provider_keys: ProviderKeys,
}

impl RequestProfile {
    pub fn request(&self, start: Coordinate, end: Coordinate) -> RouteRequest {
        RouteRequest {
            start,
            end,
            vehicle: self.vehicle,
            provider_keys: self.provider_keys.clone(),
        }
    }
}

/// JSON body of `POST /optimize_route`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RouteRequest {
    #[serde(rename = "start_coords")]
    pub start: Coordinate,
    #[serde(rename = "end_coords")]
    pub end: Coordinate,
    #[serde(rename = "vehicle_data")]
    pub vehicle: VehicleProfile,
    #[serde(rename = "api_keys")]
    pub provider_keys: ProviderKeys,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TravelTime {
    pub seconds: Option<f64>,
    pub display_text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct WeatherSummary {
    pub average_aqi: f64,
    pub average_visibility_pct: f64,
    pub average_precipitation_mm: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RouteResult {
    /// Route path as `[longitude, latitude]` pairs, in travel order.
    pub geometry: Vec<[f64; 2]>,
    pub distance_km: f64,
    pub travel_time: TravelTime,
    pub time_period: String,
    pub total_emissions_grams: f64,
    /// 0..=1
    pub confidence_level: f64,
    pub weather: WeatherSummary,
}

impl RouteResult {
    /// `"morning_rush_hour"` -> `"morning rush hour"`
    pub fn time_period_label(&self) -> String {
        self.time_period.replace('_', " ")
    }

    pub fn distance_text(&self) -> String {
        format!("{:.2} km", self.distance_km)
    }

    pub fn emissions_text(&self) -> String {
        format!("{:.2} g CO₂", self.total_emissions_grams)
    }

    pub fn confidence_text(&self) -> String {
        format!("{:.1}%", self.confidence_level * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_service_contract() {
        let profile = RequestProfile {
            vehicle: VehicleProfile::default(),
            provider_keys: [("tomtom", "tt"), ("aqicn", "aq")].into_iter().collect(),
        };
        let request = profile.request(
            Coordinate::new(51.5074, -0.1278),
            Coordinate::new(48.8566, 2.3522),
        );

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "start_coords": [51.5074, -0.1278],
                "end_coords": [48.8566, 2.3522],
                "vehicle_data": {"fuel_efficiency": 10.0, "emission_factor": 2.31},
                "api_keys": {"aqicn": "aq", "tomtom": "tt"}
            })
        );
    }

    #[test]
    fn provider_keys_debug_hides_values() {
        let keys: ProviderKeys = [("tomtom", "secret-value")].into_iter().collect();
        let debug = format!("{keys:?}");
        assert!(debug.contains("tomtom"));
        assert!(!debug.contains("secret-value"));
    }

    #[test]
    fn formats_summary_values() {
        let result = RouteResult {
            geometry: vec![],
            distance_km: 343.456,
            travel_time: TravelTime {
                seconds: None,
                display_text: "4 hours 10 mins".to_string(),
            },
            time_period: "evening_rush_hour".to_string(),
            total_emissions_grams: 79_338.012,
            confidence_level: 0.875,
            weather: WeatherSummary {
                average_aqi: 0.0,
                average_visibility_pct: 0.0,
                average_precipitation_mm: 0.0,
            },
        };
        assert_eq!(result.distance_text(), "343.46 km");
        assert_eq!(result.emissions_text(), "79338.01 g CO₂");
        assert_eq!(result.confidence_text(), "87.5%");
        assert_eq!(result.time_period_label(), "evening rush hour");
    }
}
