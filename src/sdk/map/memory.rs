use super::geo::{LatLng, LatLngBounds};
use super::popup::RoutePopup;
use super::surface::{Layer, LayerId, MapSurface};
use crate::sdk::config::MapConfig;
use crate::sdk::routing::coords::Coordinate;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashMap};

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Viewport {
    Center { center: LatLng, zoom: u8 },
    Fitted { bounds: LatLngBounds },
}

/// Headless map: keeps the layer stack, bound popups and viewport in memory.
#[derive(Debug)]
pub struct InMemoryMap {
    ready: bool,
    next_id: u64,
    layers: BTreeMap<LayerId, Layer>,
    popups: HashMap<LayerId, RoutePopup>,
    open_popup: Option<LayerId>,
    viewport: Viewport,
}

impl InMemoryMap {
    /// A ready map with the base tile layer already in place.
    ///
    /// Centred on `start` unless its latitude is exactly 0, in which case the
    /// configured default centre is used.
    pub fn new(config: &MapConfig, start: Option<Coordinate>) -> Self {
        let center = match start {
            Some(coord) if coord.latitude != 0.0 => LatLng::new(coord.latitude, coord.longitude),
            _ => config.default_center,
        };

        let mut map = Self {
            ready: true,
            next_id: 0,
            layers: BTreeMap::new(),
            popups: HashMap::new(),
            open_popup: None,
            viewport: Viewport::Center {
                center,
                zoom: config.default_zoom,
            },
        };
        map.add_layer(Layer::Tile {
            url_template: config.tile_url.clone(),
        });
        map
    }

    /// Same as [`InMemoryMap::new`] but not ready until [`InMemoryMap::initialize`] is called.
    pub fn uninitialized(config: &MapConfig, start: Option<Coordinate>) -> Self {
        let mut map = Self::new(config, start);
        map.ready = false;
        map
    }

    pub fn initialize(&mut self) {
        self.ready = true;
    }

    pub fn layers(&self) -> impl Iterator<Item = (LayerId, &Layer)> {
        self.layers.iter().map(|(id, layer)| (*id, layer))
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(&id)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn tile_layers(&self) -> Vec<&str> {
        self.layers
            .values()
            .filter_map(|layer| match layer {
                Layer::Tile { url_template } => Some(url_template.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn polylines(&self) -> Vec<&[LatLng]> {
        self.layers
            .values()
            .filter_map(|layer| match layer {
                Layer::Polyline { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }

    pub fn markers(&self) -> Vec<(LatLng, &str)> {
        self.layers
            .values()
            .filter_map(|layer| match layer {
                Layer::Marker { position, label } => Some((*position, label.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn popup(&self, id: LayerId) -> Option<&RoutePopup> {
        self.popups.get(&id)
    }

    pub fn open_popup(&self) -> Option<&RoutePopup> {
        self.open_popup.and_then(|id| self.popups.get(&id))
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Overlays (polylines and markers) as a GeoJSON `FeatureCollection`.
    pub fn to_geojson(&self) -> Value {
        let features: Vec<Value> = self
            .layers
            .iter()
            .filter_map(|(id, layer)| {
                let popup = self.popups.get(id);
                let popup_text = popup.map(|p| p.to_string());
                let popup_html = popup.map(RoutePopup::to_html);
                match layer {
                    Layer::Tile { .. } => None,
                    Layer::Polyline { points, style } => Some(json!({
                        "type": "Feature",
                        "geometry": {
                            "type": "LineString",
                            "coordinates": points.iter().map(|p| p.to_lon_lat()).collect::<Vec<_>>(),
                        },
                        "properties": {
                            "layer": id.0,
                            "stroke": style.color,
                            "stroke-width": style.weight,
                            "stroke-opacity": style.opacity,
                            "popup": popup_text,
                            "popup_html": popup_html,
                        },
                    })),
                    Layer::Marker { position, label } => Some(json!({
                        "type": "Feature",
                        "geometry": {
                            "type": "Point",
                            "coordinates": position.to_lon_lat(),
                        },
                        "properties": {
                            "layer": id.0,
                            "label": label,
                            "popup": popup_text,
                            "popup_html": popup_html,
                        },
                    })),
                }
            })
            .collect();

        json!({
            "type": "FeatureCollection",
            "features": features,
            "viewport": self.viewport,
        })
    }
}

impl MapSurface for InMemoryMap {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn add_layer(&mut self, layer: Layer) -> LayerId {
        self.next_id += 1;
        let id = LayerId(self.next_id);
        self.layers.insert(id, layer);
        id
    }

    fn remove_layer(&mut self, id: LayerId) {
        self.layers.remove(&id);
        self.popups.remove(&id);
        if self.open_popup == Some(id) {
            self.open_popup = None;
        }
    }

    fn bind_popup(&mut self, id: LayerId, popup: RoutePopup, open: bool) {
        if !self.layers.contains_key(&id) {
            log::warn!("Ignoring popup for unknown {}", id);
            return;
        }
        self.popups.insert(id, popup);
        if open {
            self.open_popup = Some(id);
        }
    }

    fn fit_bounds(&mut self, bounds: LatLngBounds) {
        self.viewport = Viewport::Fitted { bounds };
    }
}
