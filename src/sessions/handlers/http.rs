use crate::app_context::{AppContext, RequestContext};
use crate::game::models::LatLng;
use crate::game::session::{DistanceCheck, Effect, Session, SessionEvent};
use crate::game::share::{self, ShareError};
use crate::sessions::handlers::responses::{
    CreateSessionResponse, SessionErrorCode, SessionResponse, SessionView, ShareResponse,
};
use crate::storage::sessions::DispatchError;
use chrono::{DateTime, Utc};

pub struct CreateSessionHttpHandler {
    app_context: AppContext,
}

impl CreateSessionHttpHandler {
    pub fn new(app_context: AppContext) -> Self {
        Self { app_context }
    }

    /// Creates a session and immediately loads today's puzzle into it.
    pub async fn create(&self) -> CreateSessionResponse {
        let session_id = self.app_context.sessions.create().await;
        tracing::info!(task = "session_created", session_id = %session_id);
        let request_context = RequestContext { session_id };
        let response = SessionHttpHandler::new(self.app_context.clone(), &request_context)
            .new_puzzle()
            .await;
        CreateSessionResponse {
            error: response.error,
            error_code: response.error_code,
            session_id: request_context.session_id,
            session: response.session.unwrap_or_else(|| SessionView::from(&Session::default())),
        }
    }
}

/// Drives one session: turns requests into [`SessionEvent`]s, performs the
/// upstream calls they ask for and feeds the answers back in.
pub struct SessionHttpHandler<'a> {
    app_context: AppContext,
    request_context: &'a RequestContext,
}

impl<'a> SessionHttpHandler<'a> {
    pub fn new(app_context: AppContext, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    pub async fn state(&self) -> SessionResponse {
        self.respond(Ok(())).await
    }

    pub async fn new_puzzle(&self) -> SessionResponse {
        let outcome = self.load_puzzle().await;
        self.respond(outcome).await
    }

    pub async fn place_guess(&self, latlng: LatLng) -> SessionResponse {
        let outcome = match self.dispatch(SessionEvent::GuessPlaced { latlng }).await {
            Ok(Effect::CheckDistance(check)) => self.check_distance(check).await,
            Ok(_) => Ok(()),
            Err(err) => {
                tracing::debug!(
                    session_id = %self.request_context.session_id,
                    reason = %err,
                    "Ignoring guess."
                );
                Err(err.into())
            }
        };
        self.respond(outcome).await
    }

    /// `guess_number` is 1-based, as shown to the player.
    pub async fn retry(&self, guess_number: usize) -> SessionResponse {
        let Some(index) = guess_number.checked_sub(1) else {
            return self.respond(Err(SessionErrorCode::GuessNotFound)).await;
        };
        let outcome = match self.dispatch(SessionEvent::RetryRequested { index }).await {
            Ok(Effect::CheckDistance(check)) => self.check_distance(check).await,
            Ok(_) => Ok(()),
            Err(err) => Err(err.into()),
        };
        self.respond(outcome).await
    }

    pub async fn share(&self, now: DateTime<Utc>) -> ShareResponse {
        let Some(session) = self
            .app_context
            .sessions
            .snapshot(&self.request_context.session_id)
            .await
        else {
            return ShareResponse {
                error: true,
                error_code: Some(SessionErrorCode::SessionNotFound),
                text: None,
            };
        };
        let puzzle_index = share::puzzle_index(now);
        match share::share_text(&session, puzzle_index, &self.app_context.share_link) {
            Ok(text) => ShareResponse {
                error: false,
                error_code: None,
                text: Some(text),
            },
            Err(ShareError::NotFinished) => ShareResponse {
                error: true,
                error_code: Some(SessionErrorCode::SessionNotFinished),
                text: None,
            },
        }
    }

    async fn load_puzzle(&self) -> Result<(), SessionErrorCode> {
        let Effect::FetchPuzzle { ticket } = self.dispatch(SessionEvent::PuzzleRequested).await?
        else {
            return Ok(());
        };
        match self.app_context.api.get_location().await {
            Ok(target) => {
                self.dispatch(SessionEvent::PuzzleLoaded { ticket, target })
                    .await?;
                tracing::info!(
                    task = "puzzle_loaded",
                    session_id = %self.request_context.session_id,
                    puzzle_id = ticket,
                );
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    task = "puzzle_fetch_failed",
                    session_id = %self.request_context.session_id,
                    error = %err,
                );
                Err(SessionErrorCode::UpstreamUnavailable)
            }
        }
    }

    async fn check_distance(&self, check: DistanceCheck) -> Result<(), SessionErrorCode> {
        let DistanceCheck {
            puzzle_id, index, ..
        } = check;
        match self
            .app_context
            .api
            .check_distance(check.target, check.guess)
            .await
        {
            Ok(distance) => {
                self.dispatch(SessionEvent::DistanceResolved {
                    puzzle_id,
                    index,
                    distance,
                })
                .await?;
                tracing::info!(
                    task = "guess_resolved",
                    session_id = %self.request_context.session_id,
                    puzzle_id,
                    guess_number = index + 1,
                    distance_km = distance,
                );
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    task = "distance_check_failed",
                    session_id = %self.request_context.session_id,
                    puzzle_id,
                    guess_number = index + 1,
                    error = %err,
                );
                self.dispatch(SessionEvent::DistanceFailed { puzzle_id, index })
                    .await?;
                Err(SessionErrorCode::UpstreamUnavailable)
            }
        }
    }

    async fn dispatch(&self, event: SessionEvent) -> Result<Effect, DispatchError> {
        self.app_context
            .sessions
            .dispatch(&self.request_context.session_id, event)
            .await
    }

    async fn respond(&self, outcome: Result<(), SessionErrorCode>) -> SessionResponse {
        let Some(session) = self
            .app_context
            .sessions
            .snapshot(&self.request_context.session_id)
            .await
        else {
            return SessionResponse {
                error: true,
                error_code: Some(SessionErrorCode::SessionNotFound),
                session: None,
            };
        };
        let error_code = outcome.err();
        SessionResponse {
            error: error_code.is_some(),
            error_code,
            session: Some(SessionView::from(&session)),
        }
    }
}
