use crate::sdk::routing::error::RoutingError;
use crate::sdk::routing::route::{RouteResult, TravelTime, WeatherSummary};
use serde::Deserialize;

// --- Wire format of a successful `/optimize_route` response ---

#[derive(Deserialize, Debug)]
pub struct OptimizeRouteResponse {
    #[serde(default)]
    pub route_geometry: Option<Vec<[f64; 2]>>,
    pub route_distance: f64,
    pub estimated_travel_time: TravelTimeDto,
    pub time_period: String,
    pub total_emissions: f64,
    pub confidence_level: f64,
    pub weather_conditions: WeatherConditionsDto,
}

#[derive(Deserialize, Debug)]
pub struct TravelTimeDto {
    #[serde(default)]
    pub seconds: Option<f64>,
    pub display_text: String,
}

#[derive(Deserialize, Debug)]
pub struct WeatherConditionsDto {
    pub average_aqi: f64,
    pub average_visibility: f64,
    pub average_precipitation: f64,
}

impl OptimizeRouteResponse {
    pub fn into_result(self) -> Result<RouteResult, RoutingError> {
        let geometry = self.route_geometry.ok_or(RoutingError::MissingGeometry)?;
        Ok(RouteResult {
            geometry,
            distance_km: self.route_distance,
            travel_time: TravelTime {
                seconds: self.estimated_travel_time.seconds,
                display_text: self.estimated_travel_time.display_text,
            },
            time_period: self.time_period,
            total_emissions_grams: self.total_emissions,
            confidence_level: self.confidence_level,
            weather: WeatherSummary {
                average_aqi: self.weather_conditions.average_aqi,
                average_visibility_pct: self.weather_conditions.average_visibility,
                average_precipitation_mm: self.weather_conditions.average_precipitation,
            },
        })
    }
}
