use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "baa_session";

/// How long a session stays valid after login.
pub const SESSION_MAX_AGE: Duration = Duration::from_secs(7 * 24 * 60 * 60);

struct Session {
    spotify_id: String,
    opened: Instant
}

/// Maps session cookie values to the Spotify user they were opened for.
/// Sessions older than the store's max age no longer resolve and are dropped
/// on the next `open`.
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Session>>,
    max_age: Duration
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_max_age(SESSION_MAX_AGE)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_age(max_age: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            max_age
        }
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    pub async fn open(&self, spotify_id: &str) -> String {
        let session_id = Uuid::new_v4().simple().to_string();

        let mut sessions = self.sessions.lock().await;
        sessions.retain(|_, session| session.opened.elapsed() < self.max_age);
        sessions.insert(session_id.clone(), Session {
            spotify_id: spotify_id.to_string(),
            opened: Instant::now()
        });

        session_id
    }

    pub async fn resolve(&self, session_id: &str) -> Option<String> {
        self.sessions.lock().await.get(session_id)
            .filter(|session| session.opened.elapsed() < self.max_age)
            .map(|session| session.spotify_id.clone())
    }

    pub async fn close(&self, session_id: &str) {
        self.sessions.lock().await.remove(session_id);
    }

    #[cfg(test)]
    pub async fn count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}
