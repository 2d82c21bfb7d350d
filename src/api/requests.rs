use crate::game::models::LatLng;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CheckDistanceRequest {
    pub target_lat: f64,
    pub target_lng: f64,
    pub user_lat: f64,
    pub user_lng: f64,
}

impl CheckDistanceRequest {
    pub fn new(target: LatLng, guess: LatLng) -> Self {
        CheckDistanceRequest {
            target_lat: target.lat,
            target_lng: target.lng,
            user_lat: guess.lat,
            user_lng: guess.lng,
        }
    }
}
