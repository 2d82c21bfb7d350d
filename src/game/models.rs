use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// The answer of a puzzle, as handed out by the location API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    pub image: String,
}

impl Target {
    pub fn latlng(&self) -> LatLng {
        LatLng {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Guess {
    pub latlng: LatLng,
    /// Kilometers to the target, `None` until the distance check answers.
    pub distance: Option<f64>,
    pub check_failed: bool,
}

impl Guess {
    pub fn new(latlng: LatLng) -> Self {
        Guess {
            latlng,
            distance: None,
            check_failed: false,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        self.distance.is_none()
    }
}
