use crate::game::session::{Effect, Session, SessionError, SessionEvent};
use rand::{distributions::Alphanumeric, Rng};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::RwLock;

const SESSION_ID_LENGTH: usize = 10;
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);
const EVICTION_PERIOD: Duration = Duration::from_secs(10 * 60);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("session not found")]
    SessionNotFound,
    #[error(transparent)]
    Rejected(#[from] SessionError),
}

struct StoredSession {
    session: Session,
    last_touched: Instant,
}

impl StoredSession {
    fn new(now: Instant) -> Self {
        Self {
            session: Session::default(),
            last_touched: now,
        }
    }
}

/// Player sessions keyed by id. Every mutation goes through
/// [`Session::apply`] under the write lock, which is never held while
/// waiting on the location API.
///
/// Sessions nobody dispatched to for longer than `ttl` are dropped whenever
/// a new one is created.
#[derive(Clone)]
pub struct HashMapSessionsStorage {
    storage: Arc<RwLock<HashMap<String, StoredSession>>>,
    ttl: Duration,
}

impl Default for HashMapSessionsStorage {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TTL)
    }
}

impl HashMapSessionsStorage {
    pub fn new(ttl: Duration) -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub async fn create(&self) -> String {
        let now = Instant::now();
        let mut storage = self.storage.write().await;
        evict_expired(&mut storage, now, self.ttl);
        let mut session_id = generate_session_id();
        while storage.contains_key(&session_id) {
            session_id = generate_session_id();
        }
        storage.insert(session_id.clone(), StoredSession::new(now));
        session_id
    }

    /// Drops sessions idle for longer than the configured time to live, as
    /// seen from `now`. Returns how many were removed.
    pub async fn evict_expired(&self, now: Instant) -> usize {
        let mut storage = self.storage.write().await;
        evict_expired(&mut storage, now, self.ttl)
    }

    /// Sweeps expired sessions periodically so memory is given back even
    /// when no new sessions are being created.
    pub fn spawn_eviction(&self) {
        let sessions = self.clone();
        tokio::spawn(async move {
            let mut ticks = tokio::time::interval(EVICTION_PERIOD);
            loop {
                ticks.tick().await;
                sessions.evict_expired(Instant::now()).await;
            }
        });
    }

    pub async fn count(&self) -> usize {
        self.storage.read().await.len()
    }

    pub async fn dispatch(
        &self,
        session_id: &str,
        event: SessionEvent,
    ) -> Result<Effect, DispatchError> {
        let mut storage = self.storage.write().await;
        let stored = storage
            .get_mut(session_id)
            .ok_or(DispatchError::SessionNotFound)?;
        stored.last_touched = Instant::now();
        Ok(stored.session.apply(event)?)
    }

    pub async fn snapshot(&self, session_id: &str) -> Option<Session> {
        self.storage
            .read()
            .await
            .get(session_id)
            .map(|stored| stored.session.clone())
    }
}

fn evict_expired(
    storage: &mut HashMap<String, StoredSession>,
    now: Instant,
    ttl: Duration,
) -> usize {
    let before = storage.len();
    storage.retain(|_, stored| now.saturating_duration_since(stored.last_touched) <= ttl);
    let evicted = before - storage.len();
    if evicted > 0 {
        tracing::info!(
            task = "sessions_evicted",
            evicted,
            remaining = storage.len()
        );
    }
    evicted
}

fn generate_session_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LENGTH)
        .map(char::from)
        .collect()
}
