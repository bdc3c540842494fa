mod common;

use axum::http::StatusCode;
use common::{closed_port, config, london_paris_body, route_body, spawn_service, Reply};
use eco_route_viz::sdk::routing::{
    Coordinate, RemoteRouteOptimizer, RouteOptimizer, RoutingError, ROUTE_FAILURE_MESSAGE,
};
use serde_json::json;

fn london() -> Coordinate {
    Coordinate::new(51.5074, -0.1278)
}

fn paris() -> Coordinate {
    Coordinate::new(48.8566, 2.3522)
}

#[tokio::test]
async fn posts_documented_body_and_decodes_route() {
    let (base_url, seen) = spawn_service(Reply::Ok(london_paris_body())).await;
    let client = RemoteRouteOptimizer::new(config(base_url.clone())).unwrap();
    assert_eq!(client.endpoint(), format!("{base_url}/optimize_route"));

    let request = client.build_request(london(), paris());
    let result = client.optimize_route(&request).await.unwrap();

    assert_eq!(result.geometry.len(), 3);
    assert_eq!(result.geometry[0], [-0.1278, 51.5074]);
    assert_eq!(result.distance_km, 343.5);
    assert_eq!(result.travel_time.display_text, "4 hours 10 mins");
    assert_eq!(result.time_period_label(), "morning rush hour");
    assert_eq!(result.weather.average_aqi, 42.0);

    let bodies = seen.bodies.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(
        bodies[0],
        json!({
            "start_coords": [51.5074, -0.1278],
            "end_coords": [48.8566, 2.3522],
            "vehicle_data": {"fuel_efficiency": 10.0, "emission_factor": 2.31},
            "api_keys": {"aqicn": "aq-key", "tomtom": "tt-key"}
        })
    );
    assert_eq!(
        seen.content_types.lock().unwrap().as_slice(),
        ["application/json"]
    );
}

#[tokio::test]
async fn non_success_status_is_an_api_error() {
    let (base_url, _) =
        spawn_service(Reply::Status(StatusCode::INTERNAL_SERVER_ERROR, "boom")).await;
    let client = RemoteRouteOptimizer::new(config(base_url)).unwrap();

    let err = client
        .optimize_route(&client.build_request(london(), paris()))
        .await
        .unwrap_err();

    match &err {
        RoutingError::Api { status, body } => {
            assert_eq!(*status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.user_message(), ROUTE_FAILURE_MESSAGE);
    assert!(!err.is_malformed_response());
}

#[tokio::test]
async fn unparseable_body_is_malformed() {
    let (base_url, _) = spawn_service(Reply::Raw("<html>not json</html>")).await;
    let client = RemoteRouteOptimizer::new(config(base_url)).unwrap();

    let err = client
        .optimize_route(&client.build_request(london(), paris()))
        .await
        .unwrap_err();

    assert!(matches!(err, RoutingError::Decode(_)));
    assert!(err.is_malformed_response());
    assert_eq!(err.user_message(), ROUTE_FAILURE_MESSAGE);
}

#[tokio::test]
async fn missing_geometry_is_rejected() {
    let mut body = route_body(json!(null));
    body.as_object_mut().unwrap().remove("route_geometry");
    let (base_url, _) = spawn_service(Reply::Ok(body)).await;
    let client = RemoteRouteOptimizer::new(config(base_url)).unwrap();

    let err = client
        .optimize_route(&client.build_request(london(), paris()))
        .await
        .unwrap_err();

    assert!(matches!(err, RoutingError::MissingGeometry));
}

#[tokio::test]
async fn unreachable_service_is_a_request_error() {
    let client = RemoteRouteOptimizer::new(config(closed_port().await)).unwrap();

    let err = client
        .optimize_route(&client.build_request(london(), paris()))
        .await
        .unwrap_err();

    assert!(matches!(err, RoutingError::Request(_)));
    assert_eq!(err.user_message(), ROUTE_FAILURE_MESSAGE);
}
