use super::model::RequestState;
use crate::sdk::routing::route::{RouteResult, WeatherSummary};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: &'static str,
    pub enabled: bool,
}

impl SubmitControl {
    pub fn for_state(state: &RequestState) -> Self {
        if state.is_pending() {
            Self {
                label: "Optimizing...",
                enabled: false,
            }
        } else {
            Self {
                label: "Optimize Route",
                enabled: true,
            }
        }
    }
}

/// "Route Details" summary shown under the map.
pub struct RouteDetails<'a>(pub &'a RouteResult);

impl RouteDetails<'_> {
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let result = self.0;
        vec![
            ("Distance", result.distance_text()),
            ("Travel Time", result.travel_time.display_text.clone()),
            ("Time Period", result.time_period_label()),
            ("Emissions", result.emissions_text()),
            ("Confidence", result.confidence_text()),
        ]
    }
}

pub struct WeatherPanel<'a>(pub &'a WeatherSummary);

impl WeatherPanel<'_> {
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let weather = self.0;
        vec![
            ("Air Quality (AQI)", format!("{:.1}", weather.average_aqi)),
            ("Visibility", format!("{:.1}%", weather.average_visibility_pct)),
            (
                "Precipitation",
                format!("{:.1}mm", weather.average_precipitation_mm),
            ),
        ]
    }
}

fn write_rows(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    rows: Vec<(&'static str, String)>,
) -> fmt::Result {
    write!(f, "{title}")?;
    for (label, value) in rows {
        write!(f, "\n  {label}: {value}")?;
    }
    Ok(())
}

impl fmt::Display for RouteDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, "Route Details", self.rows())
    }
}

impl fmt::Display for WeatherPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, "Weather Conditions", self.rows())
    }
}
