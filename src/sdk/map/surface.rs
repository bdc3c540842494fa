use super::geo::{LatLng, LatLngBounds};
use super::popup::RoutePopup;
use serde::Serialize;
use std::fmt;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerId(pub u64);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer#{}", self.0)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PolylineStyle {
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
}

impl Default for PolylineStyle {
    fn default() -> Self {
        Self {
            color: "blue".to_string(),
            weight: 5.0,
            opacity: 0.7,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layer {
    /// Base slippy-map tiles. Never owned by the route controller.
    Tile { url_template: String },
    Polyline {
        points: Vec<LatLng>,
        style: PolylineStyle,
    },
    Marker { position: LatLng, label: String },
}

/// The stateful map a controller draws onto.
pub trait MapSurface {
    /// False until the underlying map has finished initialising.
    fn is_ready(&self) -> bool;

    fn add_layer(&mut self, layer: Layer) -> LayerId;

    /// Removing an unknown id is a no-op.
    fn remove_layer(&mut self, id: LayerId);

    /// Binds popup content to a layer, optionally opening it straight away.
    fn bind_popup(&mut self, id: LayerId, popup: RoutePopup, open: bool);

    fn fit_bounds(&mut self, bounds: LatLngBounds);
}
