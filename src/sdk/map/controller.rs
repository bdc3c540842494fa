use super::geo::{LatLng, LatLngBounds};
use super::popup::RoutePopup;
use super::surface::{Layer, LayerId, MapSurface, PolylineStyle};
use crate::sdk::routing::route::RouteResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Route polyline, endpoint markers and popup are on the map.
    Drawn,
    /// Nothing to draw; any previous route layers were removed.
    Cleared,
    /// The map is not ready yet; the result is kept for [`MapLayerController::flush`].
    Deferred,
}

/// Layers currently drawn for the latest route. Only these are ever removed.
#[derive(Debug, Default)]
pub struct MapLayerSet {
    polyline: Option<LayerId>,
    markers: Vec<LayerId>,
}

impl MapLayerSet {
    pub fn polyline(&self) -> Option<LayerId> {
        self.polyline
    }

    pub fn markers(&self) -> &[LayerId] {
        &self.markers
    }

    pub fn is_empty(&self) -> bool {
        self.polyline.is_none() && self.markers.is_empty()
    }

    /// Removes every owned layer from `map`, leaving the set empty.
    fn release<M: MapSurface + ?Sized>(&mut self, map: &mut M) {
        for id in self.polyline.take().into_iter().chain(self.markers.drain(..)) {
            map.remove_layer(id);
        }
    }

    /// Releases the current layers, then owns whatever `draw` puts on the map.
    fn replace<M, F>(&mut self, map: &mut M, draw: F)
    where
        M: MapSurface + ?Sized,
        F: FnOnce(&mut M) -> MapLayerSet,
    {
        self.release(map);
        *self = draw(map);
    }
}

/// Keeps a map's route overlay in step with the latest [`RouteResult`].
#[derive(Debug, Default)]
pub struct MapLayerController {
    layers: MapLayerSet,
    pending: Option<Option<RouteResult>>,
    style: PolylineStyle,
}

impl MapLayerController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layers(&self) -> &MapLayerSet {
        &self.layers
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replaces whatever route is drawn with `result`.
    ///
    /// `None` or an empty geometry just clears the previous route. Calling
    /// this twice with the same result leaves exactly one set of layers.
    pub fn render<M: MapSurface + ?Sized>(
        &mut self,
        map: &mut M,
        result: Option<&RouteResult>,
    ) -> RenderOutcome {
        if !map.is_ready() {
            log::debug!("Map not ready; deferring route render");
            self.pending = Some(result.cloned());
            return RenderOutcome::Deferred;
        }
        self.pending = None;
        self.apply(map, result)
    }

    /// Applies a deferred render once the map is ready. `None` if nothing was waiting.
    pub fn flush<M: MapSurface + ?Sized>(&mut self, map: &mut M) -> Option<RenderOutcome> {
        if !map.is_ready() {
            return None;
        }
        let pending = self.pending.take()?;
        Some(self.apply(map, pending.as_ref()))
    }

    fn apply<M: MapSurface + ?Sized>(
        &mut self,
        map: &mut M,
        result: Option<&RouteResult>,
    ) -> RenderOutcome {
        let Some(result) = result.filter(|r| !r.geometry.is_empty()) else {
            self.layers.release(map);
            log::debug!("Cleared route layers");
            return RenderOutcome::Cleared;
        };

        let points: Vec<LatLng> = result
            .geometry
            .iter()
            .copied()
            .map(LatLng::from_lon_lat)
            .collect();
        let first = points[0];
        let last = points[points.len() - 1];
        let bounds = LatLngBounds::from_points(&points);

        let style = self.style.clone();
        self.layers.replace(map, |map| {
            let polyline = map.add_layer(Layer::Polyline { points, style });
            let markers = [(first, "Start"), (last, "End")]
                .into_iter()
                .map(|(position, label)| {
                    let id = map.add_layer(Layer::Marker {
                        position,
                        label: label.to_string(),
                    });
                    map.bind_popup(id, RoutePopup::label(label), false);
                    id
                })
                .collect();

            if let Some(bounds) = bounds {
                map.fit_bounds(bounds);
            }
            map.bind_popup(polyline, RoutePopup::for_route(result), true);

            MapLayerSet {
                polyline: Some(polyline),
                markers,
            }
        });
        log::debug!(
            "Drew route with {} point(s), {}",
            result.geometry.len(),
            result.distance_text()
        );
        RenderOutcome::Drawn
    }
}
