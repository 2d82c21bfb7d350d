use crate::game::consts::{KM_TO_FEET, KM_TO_MILES};

/// Human-readable distance: miles from one mile up, whole feet below that.
pub fn format_distance(km: f64) -> String {
    let miles = km * KM_TO_MILES;
    if miles >= 1.0 {
        return format!("{miles:.2} miles");
    }
    let feet = km * KM_TO_FEET;
    format!("{} ft", feet.round() as i64)
}
