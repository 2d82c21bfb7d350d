pub const MAX_GUESSES: usize = 5;
/// 500 ft.
pub const WIN_THRESHOLD_KM: f64 = 0.1524;

pub const RED_BAND_KM: f64 = 0.3;
pub const ORANGE_BAND_KM: f64 = 1.0;
pub const YELLOW_BAND_KM: f64 = 2.0;

/// Roughly 30 m in either axis.
pub const DIRECTION_THRESHOLD_DEG: f64 = 0.0003;
pub const AXIS_DOMINANCE_RATIO: f64 = 1.5;

pub const KM_TO_MILES: f64 = 0.621371;
pub const KM_TO_FEET: f64 = 3280.84;

pub const WIN_FEEDBACK: &str = "Correct!";
pub const EXHAUSTED_FEEDBACK: &str = "Out of guesses! Revealing answer.";

pub const SHARE_TITLE: &str = "Beantown Browser";
pub const SHARE_PROMPT: &str = "Where do you think this picture was taken?";
pub const DEFAULT_SHARE_LINK: &str = "https://beantownbrowser.com";
pub const MILLIS_PER_DAY: i64 = 86_400_000;
