use crate::app_context::{AppContext, RequestContext};
use crate::game::models::LatLng;
use crate::sessions::handlers::http::SessionHttpHandler;
use crate::sessions::handlers::responses::SessionResponse;
use axum::extract::{Path, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn place(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext>,
    Json(guess): Json<LatLng>,
) -> Json<SessionResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .place_guess(guess)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn retry(
    Path((session_id, guess_number)): Path<(String, usize)>,
    State(app_context): State<AppContext>,
) -> Json<SessionResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .retry(guess_number)
        .await;
    Json(response)
}
