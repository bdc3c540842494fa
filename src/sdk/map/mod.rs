pub mod controller;
pub mod geo;
pub mod memory;
pub mod popup;
pub mod surface;

pub use controller::{MapLayerController, MapLayerSet, RenderOutcome};
pub use geo::{LatLng, LatLngBounds};
pub use memory::{InMemoryMap, Viewport};
pub use popup::RoutePopup;
pub use surface::{Layer, LayerId, MapSurface, PolylineStyle};

use crate::sdk::routing::route::RouteResult;
use crate::sdk::view::RouteObserver;

/// A map surface paired with the controller that owns its route layers.
///
/// Routes that arrive before the surface is ready are held back. Once the
/// surface has been initialized the owner must call [`RouteMap::flush`] to
/// draw them.
#[derive(Debug)]
pub struct RouteMap<M> {
    surface: M,
    controller: MapLayerController,
}

impl<M: MapSurface> RouteMap<M> {
    pub fn new(surface: M) -> Self {
        Self {
            surface,
            controller: MapLayerController::new(),
        }
    }

    pub fn surface(&self) -> &M {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut M {
        &mut self.surface
    }

    pub fn render(&mut self, result: Option<&RouteResult>) -> RenderOutcome {
        self.controller.render(&mut self.surface, result)
    }

    /// Call once the surface reports ready to draw anything that was deferred.
    pub fn flush(&mut self) -> Option<RenderOutcome> {
        self.controller.flush(&mut self.surface)
    }
}

impl<M: MapSurface> RouteObserver for RouteMap<M> {
    fn route_changed(&mut self, result: &RouteResult) {
        self.render(Some(result));
    }
}
