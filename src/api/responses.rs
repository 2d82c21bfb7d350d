use crate::game::models::Target;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LocationResponse {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    pub image: String,
}

impl From<LocationResponse> for Target {
    fn from(location: LocationResponse) -> Self {
        Target {
            lat: location.lat,
            lng: location.lng,
            name: location.name,
            image: location.image,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckDistanceResponse {
    /// Kilometers.
    pub distance: f64,
}
