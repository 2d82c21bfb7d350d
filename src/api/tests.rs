use crate::api::client::HttpGameApi;
use crate::api::{ApiError, GameApi};
use crate::game::models::{LatLng, Target};
use crate::game::tests::fake_target;
use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use url::Url;

/// In-memory upstream. Distances are handed out in order; `None` entries
/// simulate a failed check. An empty queue fails every check.
pub struct FakeGameApi {
    target: Option<Target>,
    distances: Mutex<VecDeque<Option<f64>>>,
    gate: Option<CheckGate>,
}

/// Holds distance checks in flight: `started` fires once a check reached the
/// upstream, which then waits for `release` before answering.
#[derive(Clone, Default)]
pub struct CheckGate {
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
}

impl FakeGameApi {
    pub fn new(distances: &[Option<f64>]) -> Self {
        Self {
            target: Some(fake_target()),
            distances: Mutex::new(distances.iter().copied().collect()),
            gate: None,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            target: None,
            distances: Mutex::new(VecDeque::new()),
            gate: None,
        }
    }

    pub fn gated(distances: &[Option<f64>]) -> (Self, CheckGate) {
        let gate = CheckGate::default();
        let api = Self {
            gate: Some(gate.clone()),
            ..Self::new(distances)
        };
        (api, gate)
    }
}

#[async_trait]
impl GameApi for FakeGameApi {
    async fn get_location(&self) -> Result<Target, ApiError> {
        self.target
            .clone()
            .ok_or(ApiError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE))
    }

    async fn check_distance(&self, _target: LatLng, _guess: LatLng) -> Result<f64, ApiError> {
        if let Some(gate) = &self.gate {
            gate.started.notify_one();
            gate.release.notified().await;
        }
        self.distances
            .lock()
            .expect("Fake distances lock was poisoned.")
            .pop_front()
            .flatten()
            .ok_or(ApiError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE))
    }
}

async fn spawn_upstream(router: Router) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake upstream.");
    let address = listener
        .local_addr()
        .expect("Fake upstream has no local address.");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Fake upstream crashed.");
    });
    Url::parse(&format!("http://{address}")).expect("Failed to construct fake upstream URL.")
}

fn client(base_url: &Url) -> HttpGameApi {
    HttpGameApi::new(base_url, Duration::from_secs(5)).expect("Failed to build API client.")
}

#[tokio::test]
async fn test_get_location() {
    let router = Router::new().route(
        "/api/get-location",
        get(|| async {
            Json(json!({
                "image": "https://example.com/street.jpg",
                "name": "Street View",
                "lat": 42.3601,
                "lng": -71.0589,
            }))
        }),
    );
    let api = client(&spawn_upstream(router).await);

    let target = api.get_location().await.expect("Location should be fetched.");

    assert_eq!(target, fake_target());
}

#[tokio::test]
async fn test_check_distance_sends_both_coordinates() {
    let router = Router::new().route(
        "/api/check-distance",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(
                body,
                json!({
                    "target_lat": 42.3601,
                    "target_lng": -71.0589,
                    "user_lat": 42.361,
                    "user_lng": -71.0589,
                })
            );
            Json(json!({ "distance": 0.1, "unit": "km" }))
        }),
    );
    let api = client(&spawn_upstream(router).await);

    let distance = api
        .check_distance(
            fake_target().latlng(),
            LatLng {
                lat: 42.361,
                lng: -71.0589,
            },
        )
        .await
        .expect("Distance should be fetched.");

    assert_eq!(distance, 0.1);
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let router = Router::new().route(
        "/api/get-location",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let api = client(&spawn_upstream(router).await);

    let result = api.get_location().await;

    assert!(matches!(
        result,
        Err(ApiError::Status(status)) if status == reqwest::StatusCode::INTERNAL_SERVER_ERROR
    ));
}

#[tokio::test]
async fn test_base_url_path_is_kept() {
    let router = Router::new().route(
        "/game/api/get-location",
        get(|| async {
            Json(json!({
                "image": "https://example.com/street.jpg",
                "name": "Street View",
                "lat": 42.3601,
                "lng": -71.0589,
            }))
        }),
    );
    let base_url = spawn_upstream(router)
        .await
        .join("game")
        .expect("Failed to construct nested URL.");
    let api = client(&base_url);

    assert!(api.get_location().await.is_ok());
}
