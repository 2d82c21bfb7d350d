use crate::api::client::HttpGameApi;
use crate::api::GameApi;
use crate::cli::Args;
use crate::storage::sessions::HashMapSessionsStorage;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppContext {
    pub sessions: HashMapSessionsStorage,
    pub api: Arc<dyn GameApi>,
    pub share_link: Arc<str>,
}

impl AppContext {
    pub fn new(api: Arc<dyn GameApi>, share_link: &str, session_ttl: Duration) -> Self {
        Self {
            sessions: HashMapSessionsStorage::new(session_ttl),
            api,
            share_link: Arc::from(share_link),
        }
    }
}

pub struct RequestContext {
    pub session_id: String,
}

pub fn init(args: &Args) -> AppContext {
    let api = HttpGameApi::new(&args.api_url, Duration::from_millis(args.api_timeout_ms))
        .expect("Failed to build the location API client.");
    tracing::info!(api_url = %args.api_url, "Initialized location API client.");
    let app_context = AppContext::new(
        Arc::new(api),
        &args.share_link,
        Duration::from_secs(args.session_ttl_secs),
    );
    app_context.sessions.spawn_eviction();
    app_context
}
