use crate::game::consts::{EXHAUSTED_FEEDBACK, MAX_GUESSES, WIN_FEEDBACK, WIN_THRESHOLD_KM};
use crate::game::direction::Direction;
use crate::game::models::{Guess, LatLng, Target};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionStatus {
    /// No puzzle loaded yet.
    Idle,
    Active,
    Won,
    Exhausted,
}

impl SessionStatus {
    pub fn is_terminated(self) -> bool {
        matches!(self, SessionStatus::Won | SessionStatus::Exhausted)
    }
}

/// Everything that can happen to a session. Completions of upstream calls
/// carry the ticket or puzzle id they were issued under so late answers can
/// be told apart from current ones.
#[derive(Clone, Debug)]
pub enum SessionEvent {
    PuzzleRequested,
    PuzzleLoaded {
        ticket: u64,
        target: Target,
    },
    GuessPlaced {
        latlng: LatLng,
    },
    DistanceResolved {
        puzzle_id: u64,
        index: usize,
        distance: f64,
    },
    DistanceFailed {
        puzzle_id: u64,
        index: usize,
    },
    RetryRequested {
        index: usize,
    },
}

/// Follow-up work the caller has to perform after an event was applied.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    None,
    FetchPuzzle { ticket: u64 },
    CheckDistance(DistanceCheck),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DistanceCheck {
    pub puzzle_id: u64,
    pub index: usize,
    pub target: LatLng,
    pub guess: LatLng,
}

/// Reasons an event was refused. The session is left untouched in every case.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no puzzle is loaded")]
    NoPuzzleLoaded,
    #[error("the puzzle is already finished")]
    Finished,
    #[error("all {} guesses were already placed", MAX_GUESSES)]
    OutOfGuesses,
    #[error("puzzle ticket {0} was superseded by a newer request")]
    StalePuzzle(u64),
    #[error("result belongs to puzzle {0}, which is no longer current")]
    StaleResult(u64),
    #[error("there is no guess #{}", .0 + 1)]
    GuessNotFound(usize),
    #[error("guess #{} has no failed distance check", .0 + 1)]
    NothingToRetry(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    latest_ticket: u64,
    puzzle_id: u64,
    target: Option<Target>,
    guesses: Vec<Guess>,
    status: SessionStatus,
    feedback: Option<String>,
    distance: Option<f64>,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            latest_ticket: 0,
            puzzle_id: 0,
            target: None,
            guesses: Vec::with_capacity(MAX_GUESSES),
            status: SessionStatus::Idle,
            feedback: None,
            distance: None,
        }
    }
}

impl Session {
    pub fn apply(&mut self, event: SessionEvent) -> Result<Effect, SessionError> {
        match event {
            SessionEvent::PuzzleRequested => Ok(self.request_puzzle()),
            SessionEvent::PuzzleLoaded { ticket, target } => self.load_puzzle(ticket, target),
            SessionEvent::GuessPlaced { latlng } => self.place_guess(latlng),
            SessionEvent::DistanceResolved {
                puzzle_id,
                index,
                distance,
            } => self.resolve_distance(puzzle_id, index, distance),
            SessionEvent::DistanceFailed { puzzle_id, index } => {
                self.fail_distance(puzzle_id, index)
            }
            SessionEvent::RetryRequested { index } => self.retry(index),
        }
    }

    fn request_puzzle(&mut self) -> Effect {
        self.latest_ticket += 1;
        Effect::FetchPuzzle {
            ticket: self.latest_ticket,
        }
    }

    fn load_puzzle(&mut self, ticket: u64, target: Target) -> Result<Effect, SessionError> {
        if ticket != self.latest_ticket {
            return Err(SessionError::StalePuzzle(ticket));
        }
        self.puzzle_id = ticket;
        self.target = Some(target);
        self.guesses.clear();
        self.status = SessionStatus::Active;
        self.feedback = None;
        self.distance = None;
        Ok(Effect::None)
    }

    fn place_guess(&mut self, latlng: LatLng) -> Result<Effect, SessionError> {
        let target = self.target.as_ref().ok_or(SessionError::NoPuzzleLoaded)?;
        if self.status.is_terminated() {
            return Err(SessionError::Finished);
        }
        if self.guesses.len() >= MAX_GUESSES {
            return Err(SessionError::OutOfGuesses);
        }
        let check = DistanceCheck {
            puzzle_id: self.puzzle_id,
            index: self.guesses.len(),
            target: target.latlng(),
            guess: latlng,
        };
        self.guesses.push(Guess::new(latlng));
        Ok(Effect::CheckDistance(check))
    }

    fn resolve_distance(
        &mut self,
        puzzle_id: u64,
        index: usize,
        distance: f64,
    ) -> Result<Effect, SessionError> {
        if puzzle_id != self.puzzle_id {
            return Err(SessionError::StaleResult(puzzle_id));
        }
        let target = self
            .target
            .as_ref()
            .ok_or(SessionError::NoPuzzleLoaded)?
            .latlng();
        let guess = self
            .guesses
            .get_mut(index)
            .ok_or(SessionError::GuessNotFound(index))?;
        guess.distance = Some(distance);
        guess.check_failed = false;
        let latlng = guess.latlng;

        if self.status.is_terminated() {
            return Ok(Effect::None);
        }
        if distance <= WIN_THRESHOLD_KM {
            self.terminate(SessionStatus::Won, WIN_FEEDBACK, distance);
        } else if index + 1 >= MAX_GUESSES {
            self.terminate(SessionStatus::Exhausted, EXHAUSTED_FEEDBACK, distance);
        } else {
            let direction = Direction::from_guess(target, latlng);
            self.feedback = Some(format!("Try a bit more {}.", direction.as_str()));
        }
        Ok(Effect::None)
    }

    fn fail_distance(&mut self, puzzle_id: u64, index: usize) -> Result<Effect, SessionError> {
        if puzzle_id != self.puzzle_id {
            return Err(SessionError::StaleResult(puzzle_id));
        }
        let guess = self
            .guesses
            .get_mut(index)
            .ok_or(SessionError::GuessNotFound(index))?;
        if guess.is_unresolved() {
            guess.check_failed = true;
        }
        Ok(Effect::None)
    }

    fn retry(&mut self, index: usize) -> Result<Effect, SessionError> {
        let target = self
            .target
            .as_ref()
            .ok_or(SessionError::NoPuzzleLoaded)?
            .latlng();
        let guess = self
            .guesses
            .get_mut(index)
            .ok_or(SessionError::GuessNotFound(index))?;
        if !(guess.check_failed && guess.is_unresolved()) {
            return Err(SessionError::NothingToRetry(index));
        }
        guess.check_failed = false;
        Ok(Effect::CheckDistance(DistanceCheck {
            puzzle_id: self.puzzle_id,
            index,
            target,
            guess: guess.latlng,
        }))
    }

    fn terminate(&mut self, status: SessionStatus, feedback: &str, distance: f64) {
        self.status = status;
        self.feedback = Some(feedback.to_string());
        self.distance = Some(distance);
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_revealed(&self) -> bool {
        self.status.is_terminated()
    }

    pub fn puzzle_id(&self) -> u64 {
        self.puzzle_id
    }

    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    /// Distance of the guess that ended the puzzle.
    pub fn distance(&self) -> Option<f64> {
        self.distance
    }
}
