use crate::game::consts::{MILLIS_PER_DAY, SHARE_PROMPT, SHARE_TITLE};
use crate::game::direction::Direction;
use crate::game::proximity::Proximity;
use crate::game::session::{Session, SessionStatus};
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShareError {
    #[error("results can only be shared once the puzzle is over")]
    NotFinished,
}

/// Number of the daily puzzle: whole days since the Unix epoch.
pub fn puzzle_index(now: DateTime<Utc>) -> i64 {
    now.timestamp_millis().div_euclid(MILLIS_PER_DAY)
}

/// Emoji summary of a finished session, one line per guess.
pub fn share_text(session: &Session, puzzle_index: i64, link: &str) -> Result<String, ShareError> {
    let target = match (session.is_revealed(), session.target()) {
        (true, Some(target)) => target.latlng(),
        _ => return Err(ShareError::NotFinished),
    };
    let won = session.status() == SessionStatus::Won;
    let guesses = session.guesses();

    let mut text = format!("{SHARE_TITLE} #{puzzle_index}\n{SHARE_PROMPT}\n");
    for (index, guess) in guesses.iter().enumerate() {
        text.push_str(Proximity::classify(guess.distance).share_glyph());
        let winning_line = won && index + 1 == guesses.len();
        if !winning_line {
            text.push_str(Direction::from_guess(target, guess.latlng).share_arrow());
        }
        text.push('\n');
    }
    text.push('\n');
    text.push_str(link);
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_puzzle_index_counts_whole_days() {
        let epoch = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(puzzle_index(epoch), 0);
        let day = Utc.with_ymd_and_hms(2024, 3, 15, 23, 59, 59).unwrap();
        assert_eq!(puzzle_index(day), 19797);
        let next_day = Utc.with_ymd_and_hms(2024, 3, 16, 0, 0, 0).unwrap();
        assert_eq!(puzzle_index(next_day), 19798);
    }

    #[test]
    fn test_unfinished_session_cannot_be_shared() {
        let session = Session::default();
        assert_eq!(
            share_text(&session, 1, "https://example.com"),
            Err(ShareError::NotFinished)
        );
    }
}
