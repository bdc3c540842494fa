pub mod coords;
pub mod error;
pub mod provider;
pub mod route;
pub mod service;

pub use coords::{parse_coordinates, Coordinate, CoordinateError, INVALID_COORDINATES_MESSAGE};
pub use error::{RoutingError, ROUTE_FAILURE_MESSAGE};
pub use provider::RemoteRouteOptimizer;
pub use route::{
    ProviderKeys, RequestProfile, RouteRequest, RouteResult, TravelTime, VehicleProfile,
    WeatherSummary,
};
pub use service::RouteOptimizer;
