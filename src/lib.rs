pub mod sdk;

pub use sdk::config::{ClientConfig, MapConfig};
pub use sdk::map::{InMemoryMap, MapLayerController, MapSurface, RouteMap};
pub use sdk::routing::{
    parse_coordinates, Coordinate, RemoteRouteOptimizer, RouteOptimizer, RouteResult,
};
pub use sdk::view::{RequestState, RouteViewModel};
