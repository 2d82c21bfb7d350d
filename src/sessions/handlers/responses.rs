use crate::game::format::format_distance;
use crate::game::models::Guess;
use crate::game::proximity::Proximity;
use crate::game::session::{Session, SessionError, SessionStatus};
use crate::storage::sessions::DispatchError;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionErrorCode>,
    pub session_id: String,
    pub session: SessionView,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionErrorCode>,
    /// Present whenever the session exists, even if the request failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionView>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionErrorCode {
    SessionNotFound,
    NoPuzzleLoaded,
    /// The puzzle is over or every guess was already used.
    GuessRejected,
    GuessNotFound,
    NothingToRetry,
    /// A newer puzzle replaced the one this request was working on.
    PuzzleChanged,
    SessionNotFinished,
    UpstreamUnavailable,
}

impl From<DispatchError> for SessionErrorCode {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::SessionNotFound => SessionErrorCode::SessionNotFound,
            DispatchError::Rejected(SessionError::NoPuzzleLoaded) => {
                SessionErrorCode::NoPuzzleLoaded
            }
            DispatchError::Rejected(SessionError::Finished | SessionError::OutOfGuesses) => {
                SessionErrorCode::GuessRejected
            }
            DispatchError::Rejected(SessionError::GuessNotFound(_)) => {
                SessionErrorCode::GuessNotFound
            }
            DispatchError::Rejected(SessionError::NothingToRetry(_)) => {
                SessionErrorCode::NothingToRetry
            }
            DispatchError::Rejected(
                SessionError::StalePuzzle(_) | SessionError::StaleResult(_),
            ) => SessionErrorCode::PuzzleChanged,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub status: SessionStatus,
    pub puzzle_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub guesses: Vec<GuessView>,
    /// Direction hint while playing, final verdict once revealed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_label: Option<String>,
    /// Only revealed once the puzzle is over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<AnswerView>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessView {
    /// 1-based.
    pub number: usize,
    pub lat: f64,
    pub lng: f64,
    pub proximity: Proximity,
    /// Kilometers, hidden until the puzzle is over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_label: Option<String>,
    pub check_failed: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerView {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
}

impl GuessView {
    fn new(index: usize, guess: &Guess, revealed: bool) -> Self {
        let distance = guess.distance.filter(|_| revealed);
        GuessView {
            number: index + 1,
            lat: guess.latlng.lat,
            lng: guess.latlng.lng,
            proximity: Proximity::classify(guess.distance),
            distance,
            distance_label: distance.map(format_distance),
            check_failed: guess.check_failed,
        }
    }
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        let revealed = session.is_revealed();
        let guesses = session
            .guesses()
            .iter()
            .enumerate()
            .map(|(index, guess)| GuessView::new(index, guess, revealed))
            .collect();
        let answer = session.target().filter(|_| revealed).map(|target| AnswerView {
            lat: target.lat,
            lng: target.lng,
            name: target.name.clone(),
        });
        SessionView {
            status: session.status(),
            puzzle_id: session.puzzle_id(),
            image: session.target().map(|target| target.image.clone()),
            guesses,
            feedback: session.feedback().map(str::to_string),
            distance: session.distance(),
            distance_label: session.distance().map(format_distance),
            answer,
        }
    }
}
