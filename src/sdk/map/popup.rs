use crate::sdk::routing::route::RouteResult;
use serde::Serialize;
use std::fmt;

const ROUTE_POPUP_TITLE: &str = "Optimized Route:";

/// Text bound to a map layer, shown when the layer is clicked or opened programmatically.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RoutePopup {
    pub title: Option<String>,
    pub lines: Vec<String>,
}

impl RoutePopup {
    pub fn label(text: impl Into<String>) -> Self {
        Self {
            title: None,
            lines: vec![text.into()],
        }
    }

    pub fn for_route(result: &RouteResult) -> Self {
        Self {
            title: Some(ROUTE_POPUP_TITLE.to_string()),
            lines: vec![
                format!("Distance: {}", result.distance_text()),
                format!("Travel Time: {}", result.travel_time.display_text),
                format!("Period: {}", result.time_period_label()),
                format!("Emissions: {}", result.emissions_text()),
                format!("Confidence: {}", result.confidence_text()),
            ],
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        if let Some(title) = &self.title {
            html.push_str(&format!("<b>{}</b><br />", escape_html(title)));
        }
        let body: Vec<String> = self.lines.iter().map(|l| escape_html(l)).collect();
        html.push_str(&body.join("<br />"));
        html
    }
}

impl fmt::Display for RoutePopup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = &self.title {
            writeln!(f, "{title}")?;
        }
        write!(f, "{}", self.lines.join("\n"))
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::routing::route::{TravelTime, WeatherSummary};

    fn result() -> RouteResult {
        RouteResult {
            geometry: vec![[2.3522, 48.8566], [-0.1278, 51.5074]],
            distance_km: 343.5,
            travel_time: TravelTime {
                seconds: Some(15_000.0),
                display_text: "4 hours 10 mins".to_string(),
            },
            time_period: "morning_rush_hour".to_string(),
            total_emissions_grams: 79_338.0,
            confidence_level: 0.5,
            weather: WeatherSummary {
                average_aqi: 40.0,
                average_visibility_pct: 90.0,
                average_precipitation_mm: 0.0,
            },
        }
    }

    #[test]
    fn route_popup_lists_summary() {
        let popup = RoutePopup::for_route(&result());
        assert_eq!(
            popup.to_string(),
            "Optimized Route:\n\
             Distance: 343.50 km\n\
             Travel Time: 4 hours 10 mins\n\
             Period: morning rush hour\n\
             Emissions: 79338.00 g CO₂\n\
             Confidence: 50.0%"
        );
    }

    #[test]
    fn html_form_uses_line_breaks() {
        let html = RoutePopup::for_route(&result()).to_html();
        assert!(html.starts_with("<b>Optimized Route:</b><br />Distance: 343.50 km<br />"));
        assert!(html.ends_with("Confidence: 50.0%"));
    }

    #[test]
    fn labels_have_no_title() {
        let popup = RoutePopup::label("Start");
        assert_eq!(popup.to_string(), "Start");
        assert_eq!(popup.to_html(), "Start");
    }
}
