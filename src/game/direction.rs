use crate::game::consts::{AXIS_DOMINANCE_RATIO, DIRECTION_THRESHOLD_DEG};
use crate::game::models::LatLng;

/// Where the target lies as seen from a guess.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    VeryClose,
    /// No axis produced a token. Unreachable for finite coordinates.
    Undetermined,
}

impl Direction {
    pub fn from_guess(target: LatLng, guess: LatLng) -> Self {
        let lat_diff = target.lat - guess.lat;
        let lng_diff = target.lng - guess.lng;
        let abs_lat = lat_diff.abs();
        let abs_lng = lng_diff.abs();

        if abs_lat < DIRECTION_THRESHOLD_DEG && abs_lng < DIRECTION_THRESHOLD_DEG {
            return Direction::VeryClose;
        }

        let lat_dominates = abs_lat > abs_lng * AXIS_DOMINANCE_RATIO;
        let lng_dominates = abs_lng > abs_lat * AXIS_DOMINANCE_RATIO;

        let north =
            (!lng_dominates && abs_lat >= DIRECTION_THRESHOLD_DEG).then_some(lat_diff > 0.0);
        let east =
            (!lat_dominates && abs_lng >= DIRECTION_THRESHOLD_DEG).then_some(lng_diff > 0.0);

        match (north, east) {
            (Some(true), Some(true)) => Direction::NorthEast,
            (Some(true), Some(false)) => Direction::NorthWest,
            (Some(false), Some(true)) => Direction::SouthEast,
            (Some(false), Some(false)) => Direction::SouthWest,
            (Some(true), None) => Direction::North,
            (Some(false), None) => Direction::South,
            (None, Some(true)) => Direction::East,
            (None, Some(false)) => Direction::West,
            (None, None) => Direction::Undetermined,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::NorthEast => "north-east",
            Direction::NorthWest => "north-west",
            Direction::SouthEast => "south-east",
            Direction::SouthWest => "south-west",
            Direction::VeryClose => "very close",
            Direction::Undetermined => "",
        }
    }

    pub fn share_arrow(self) -> &'static str {
        match self {
            Direction::North => "⬆️",
            Direction::South => "⬇️",
            Direction::East => "➡️",
            Direction::West => "⬅️",
            Direction::NorthEast => "↗️",
            Direction::NorthWest => "↖️",
            Direction::SouthEast => "↘️",
            Direction::SouthWest => "↙️",
            Direction::VeryClose | Direction::Undetermined => "⬜",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(lat: f64, lng: f64) -> LatLng {
        LatLng { lat, lng }
    }

    #[test]
    fn test_guess_north_of_target_points_south() {
        let direction = Direction::from_guess(at(42.3601, -71.0589), at(42.3610, -71.0589));
        assert_eq!(direction, Direction::South);
        assert_eq!(direction.as_str(), "south");
    }

    #[test]
    fn test_tiny_offsets_are_very_close() {
        let direction = Direction::from_guess(at(42.36010, -71.05890), at(42.36011, -71.05891));
        assert_eq!(direction, Direction::VeryClose);
        assert_eq!(direction.as_str(), "very close");
    }

    #[test]
    fn test_dominant_longitude_drops_latitude_token() {
        // lng offset is more than 1.5x the lat offset.
        let direction = Direction::from_guess(at(0.0, 0.0), at(0.001, 0.01));
        assert_eq!(direction, Direction::West);
    }

    #[test]
    fn test_comparable_offsets_give_diagonal() {
        assert_eq!(
            Direction::from_guess(at(0.0, 0.0), at(-0.001, -0.0012)),
            Direction::NorthEast
        );
        assert_eq!(
            Direction::from_guess(at(0.0, 0.0), at(0.001, -0.0012)),
            Direction::SouthEast
        );
        assert_eq!(
            Direction::from_guess(at(0.0, 0.0), at(-0.001, 0.0012)),
            Direction::NorthWest
        );
        assert_eq!(
            Direction::from_guess(at(0.0, 0.0), at(0.001, 0.0012)),
            Direction::SouthWest
        );
        assert_eq!(
            Direction::from_guess(at(0.0, 0.0), at(0.0, -0.01)),
            Direction::East
        );
        assert_eq!(
            Direction::from_guess(at(0.0, 0.0), at(-0.01, 0.0)),
            Direction::North
        );
    }

    #[test]
    fn test_sub_threshold_axis_is_left_out_of_diagonal() {
        // Neither axis dominates, but only longitude clears the threshold.
        let direction = Direction::from_guess(at(0.0, 0.0), at(-0.00025, -0.00035));
        assert_eq!(direction, Direction::East);
    }

    #[test]
    fn test_non_finite_guess_is_undetermined() {
        let direction = Direction::from_guess(at(0.0, 0.0), at(f64::NAN, f64::NAN));
        assert_eq!(direction, Direction::Undetermined);
        assert_eq!(direction.as_str(), "");
        assert_eq!(direction.share_arrow(), "⬜");
    }
}
