use crate::game::consts::{ORANGE_BAND_KM, RED_BAND_KM, WIN_THRESHOLD_KM, YELLOW_BAND_KM};
use serde::{Deserialize, Serialize};

/// Colour band of a guess, from "on target" (green) to "far away" (blue).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Proximity {
    /// Distance not known yet.
    Gray,
    Green,
    Red,
    Orange,
    Yellow,
    Blue,
}

impl Proximity {
    pub fn classify(distance_km: Option<f64>) -> Self {
        let Some(km) = distance_km else {
            return Proximity::Gray;
        };
        if km <= WIN_THRESHOLD_KM {
            Proximity::Green
        } else if km <= RED_BAND_KM {
            Proximity::Red
        } else if km <= ORANGE_BAND_KM {
            Proximity::Orange
        } else if km <= YELLOW_BAND_KM {
            Proximity::Yellow
        } else {
            Proximity::Blue
        }
    }

    pub fn share_glyph(self) -> &'static str {
        match self {
            Proximity::Green => "🟩",
            Proximity::Red => "🟥",
            Proximity::Orange => "🟧",
            Proximity::Yellow => "🟨",
            Proximity::Blue => "🟦",
            Proximity::Gray => "⬜",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_distance_is_gray() {
        assert_eq!(Proximity::classify(None), Proximity::Gray);
    }

    #[test]
    fn test_band_upper_bounds_are_inclusive() {
        assert_eq!(Proximity::classify(Some(0.0)), Proximity::Green);
        assert_eq!(Proximity::classify(Some(0.1524)), Proximity::Green);
        assert_eq!(Proximity::classify(Some(0.1525)), Proximity::Red);
        assert_eq!(Proximity::classify(Some(0.3)), Proximity::Red);
        assert_eq!(Proximity::classify(Some(0.30001)), Proximity::Orange);
        assert_eq!(Proximity::classify(Some(1.0)), Proximity::Orange);
        assert_eq!(Proximity::classify(Some(1.5)), Proximity::Yellow);
        assert_eq!(Proximity::classify(Some(2.0)), Proximity::Yellow);
        assert_eq!(Proximity::classify(Some(2.01)), Proximity::Blue);
        assert_eq!(Proximity::classify(Some(12_000.0)), Proximity::Blue);
    }

    #[test]
    fn test_bands_never_go_back_as_distance_grows() {
        let order = [
            Proximity::Green,
            Proximity::Red,
            Proximity::Orange,
            Proximity::Yellow,
            Proximity::Blue,
        ];
        let rank = |p: Proximity| order.iter().position(|&o| o == p).unwrap();
        let mut previous = 0;
        for step in 0..3000 {
            let km = step as f64 * 0.001;
            let current = rank(Proximity::classify(Some(km)));
            assert!(current >= previous, "band went back at {km} km");
            assert_eq!(Proximity::classify(Some(km)), Proximity::classify(Some(km)));
            previous = current;
        }
    }
}
