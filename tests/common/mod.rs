#![allow(dead_code)]

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use eco_route_viz::sdk::config::ClientConfig;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// What the fake optimisation service answers with.
#[derive(Clone)]
pub enum Reply {
    Ok(Value),
    Status(StatusCode, &'static str),
    Raw(&'static str),
}

#[derive(Clone, Default)]
pub struct Seen {
    pub bodies: Arc<Mutex<Vec<Value>>>,
    pub content_types: Arc<Mutex<Vec<String>>>,
}

#[derive(Clone)]
struct AppState {
    reply: Reply,
    seen: Seen,
}

pub fn route_body(geometry: Value) -> Value {
    json!({
        "route_geometry": geometry,
        "route_distance": 343.5,
        "estimated_travel_time": {"seconds": 15000, "display_text": "4 hours 10 mins"},
        "time_period": "morning_rush_hour",
        "total_emissions": 79338.0,
        "confidence_level": 0.5,
        "weather_conditions": {
            "average_aqi": 42.0,
            "average_visibility": 95.5,
            "average_precipitation": 0.3
        }
    })
}

pub fn london_paris_body() -> Value {
    route_body(json!([[-0.1278, 51.5074], [1.0, 50.5], [2.3522, 48.8566]]))
}

async fn optimize(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) {
        state
            .seen
            .content_types
            .lock()
            .unwrap()
            .push(content_type.to_string());
    }
    state.seen.bodies.lock().unwrap().push(body);

    match state.reply {
        Reply::Ok(value) => Json(value).into_response(),
        Reply::Status(status, text) => (status, text).into_response(),
        Reply::Raw(text) => (StatusCode::OK, text).into_response(),
    }
}

/// Serves `POST /optimize_route` on an ephemeral port and returns its base URL.
pub async fn spawn_service(reply: Reply) -> (String, Seen) {
    let seen = Seen::default();
    let app = Router::new()
        .route("/optimize_route", post(optimize))
        .with_state(AppState {
            reply,
            seen: seen.clone(),
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), seen)
}

/// A base URL nothing is listening on.
pub async fn closed_port() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn config(base_url: String) -> ClientConfig {
    ClientConfig {
        base_url,
        provider_keys: [("tomtom", "tt-key"), ("aqicn", "aq-key")]
            .into_iter()
            .collect(),
        ..ClientConfig::default()
    }
}
