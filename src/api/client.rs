use crate::api::requests::CheckDistanceRequest;
use crate::api::responses::{CheckDistanceResponse, LocationResponse};
use crate::api::{ApiError, GameApi};
use crate::game::models::{LatLng, Target};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

const GET_LOCATION_PATH: &str = "api/get-location";
const CHECK_DISTANCE_PATH: &str = "api/check-distance";

#[derive(Clone)]
pub struct HttpGameApi {
    http_client: Client,
    get_location_url: Url,
    check_distance_url: Url,
}

impl HttpGameApi {
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, ApiError> {
        let mut base_url = base_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            get_location_url: base_url.join(GET_LOCATION_PATH)?,
            check_distance_url: base_url.join(CHECK_DISTANCE_PATH)?,
        })
    }
}

#[async_trait]
impl GameApi for HttpGameApi {
    async fn get_location(&self) -> Result<Target, ApiError> {
        let response = self
            .http_client
            .get(self.get_location_url.clone())
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        let location: LocationResponse = response.json().await?;
        Ok(location.into())
    }

    async fn check_distance(&self, target: LatLng, guess: LatLng) -> Result<f64, ApiError> {
        let response = self
            .http_client
            .post(self.check_distance_url.clone())
            .json(&CheckDistanceRequest::new(target, guess))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        let CheckDistanceResponse { distance } = response.json().await?;
        if !distance.is_finite() {
            return Err(ApiError::InvalidDistance);
        }
        Ok(distance)
    }
}
