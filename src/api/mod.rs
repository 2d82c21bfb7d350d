use crate::game::models::{LatLng, Target};
use async_trait::async_trait;
use thiserror::Error;

pub mod client;
pub mod requests;
pub mod responses;
#[cfg(test)]
pub mod tests;

/// Upstream service that picks the daily location and measures guesses.
#[async_trait]
pub trait GameApi: Send + Sync {
    async fn get_location(&self) -> Result<Target, ApiError>;

    /// Kilometers between the target and the guess.
    async fn check_distance(&self, target: LatLng, guess: LatLng) -> Result<f64, ApiError>;
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to the location API failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("location API answered with status {0}")]
    Status(reqwest::StatusCode),
    #[error("invalid location API URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("location API returned a non-finite distance")]
    InvalidDistance,
}
