use super::types::OptimizeRouteResponse;
use crate::sdk::config::ClientConfig;
use crate::sdk::routing::coords::Coordinate;
use crate::sdk::routing::error::RoutingError;
use crate::sdk::routing::route::{RequestProfile, RouteRequest, RouteResult};
use crate::sdk::routing::service::RouteOptimizer;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

/// Talks to the optimisation service over HTTP.
pub struct RemoteRouteOptimizer {
    client: Client,
    base_url: String,
    profile: RequestProfile,
}

impl RemoteRouteOptimizer {
    pub fn new(config: ClientConfig) -> Result<Self, RoutingError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url,
            profile: RequestProfile {
                vehicle: config.vehicle,
                provider_keys: config.provider_keys,
            },
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/optimize_route", self.base_url)
    }
}

impl RouteOptimizer for RemoteRouteOptimizer {
    fn build_request(&self, start: Coordinate, end: Coordinate) -> RouteRequest {
        self.profile.request(start, end)
    }

    async fn optimize_route(&self, request: &RouteRequest) -> Result<RouteResult, RoutingError> {
        let url = self.endpoint();
        log::debug!(
            "[PROVIDER] Calling optimize_route for {} -> {}",
            request.start,
            request.end
        );

        let response = match self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                log::error!("Failed to send POST request. URL: {}\nError: {}", url, e);
                return Err(e.into());
            }
        };

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            log::error!("Failed to read response body. URL: {}\nError: {}", url, e);
            e
        })?;

        if !status.is_success() {
            log::error!(
                "Service returned non-success status: {}. Body: {}",
                status,
                text
            );
            return Err(RoutingError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let body: OptimizeRouteResponse = serde_json::from_str(&text).map_err(|e| {
            log::error!(
                "Failed to parse optimize_route response. URL: {}\nError: {}. Body: {}",
                url,
                e,
                text
            );
            e
        })?;

        body.into_result().map_err(|e| {
            log::error!("Rejected optimize_route response from {}: {}", url, e);
            e
        })
    }
}
