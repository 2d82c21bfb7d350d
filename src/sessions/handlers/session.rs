use crate::app_context::{AppContext, RequestContext};
use crate::sessions::handlers::http::{CreateSessionHttpHandler, SessionHttpHandler};
use crate::sessions::handlers::responses::{
    CreateSessionResponse, SessionResponse, ShareResponse,
};
use axum::extract::{Path, State};
use axum::response::Json;
use chrono::Utc;

#[axum::debug_handler]
pub async fn create(State(app_context): State<AppContext>) -> Json<CreateSessionResponse> {
    let response = CreateSessionHttpHandler::new(app_context).create().await;
    Json(response)
}

#[axum::debug_handler]
pub async fn state(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext>,
) -> Json<SessionResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .state()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn new_puzzle(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext>,
) -> Json<SessionResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .new_puzzle()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn share(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext>,
) -> Json<ShareResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .share(Utc::now())
        .await;
    Json(response)
}
