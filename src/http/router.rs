use crate::app_context::AppContext;
use crate::cli::Args;
use crate::http::{cors, middleware};
use crate::{health, sessions};
use axum::{
    routing::{get, post},
    Router,
};

pub fn new(args: &Args, app_context: AppContext) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let guesses_routes = Router::new()
        .route("/", post(sessions::handlers::guesses::place))
        .route(
            "/:guess-number/retry",
            post(sessions::handlers::guesses::retry),
        );
    let sessions_routes = Router::new()
        .route("/", post(sessions::handlers::session::create))
        .route("/:session-id", get(sessions::handlers::session::state))
        .route(
            "/:session-id/puzzle",
            post(sessions::handlers::session::new_puzzle),
        )
        .route("/:session-id/share", get(sessions::handlers::session::share))
        .nest("/:session-id/guesses", guesses_routes);

    Router::new()
        .nest("/health", health_routes)
        .nest("/sessions", sessions_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(middleware::tracing))
}
