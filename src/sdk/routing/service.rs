use super::coords::Coordinate;
use super::error::RoutingError;
use super::route::{RouteRequest, RouteResult};
use std::future::Future;

pub trait RouteOptimizer: Send + Sync {
    /// Fills in the fixed vehicle profile and provider keys for a coordinate pair.
    fn build_request(&self, start: Coordinate, end: Coordinate) -> RouteRequest;

    /// Submits one request and resolves with the optimised route or a failure.
    fn optimize_route(
        &self,
        request: &RouteRequest,
    ) -> impl Future<Output = Result<RouteResult, RoutingError>> + Send;
}
