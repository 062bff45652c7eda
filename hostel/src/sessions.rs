//! Server-side login sessions
//!
//! A session token is an opaque UUID handed out at login. It maps to the
//! [`RequestContext`] of the user who logged in until it expires or the user
//! logs out.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use hostel_core::RequestContext;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Session {
    pub context: RequestContext,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<String, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// Open a session and return its token
    pub async fn create(&self, context: RequestContext) -> (String, Session) {
        let token = Uuid::new_v4().to_string();
        let session = Session {
            context,
            expires_at: Utc::now() + self.ttl,
        };
        debug!("Opened session for {}", session.context.user_id);
        self.sessions
            .lock()
            .await
            .insert(token.clone(), session.clone());
        (token, session)
    }

    /// The identity behind a token, if the session is still valid
    pub async fn resolve(&self, token: &str) -> Option<RequestContext> {
        let mut sessions = self.sessions.lock().await;
        match sessions.get(token) {
            Some(session) if session.is_expired(Utc::now()) => {
                sessions.remove(token);
                None
            }
            Some(session) => Some(session.context.clone()),
            None => None,
        }
    }

    pub async fn remove(&self, token: &str) -> bool {
        self.sessions.lock().await.remove(token).is_some()
    }

    pub async fn cleanup_expired(&self) -> usize {
        let mut sessions = self.sessions.lock().await;
        let initial_count = sessions.len();
        let now = Utc::now();
        sessions.retain(|_, session| !session.is_expired(now));

        let removed_count = initial_count - sessions.len();
        if removed_count > 0 {
            info!(
                "Cleaned up {} expired session(s), {} remaining",
                removed_count,
                sessions.len()
            );
        }
        removed_count
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostel_core::Role;

    #[tokio::test]
    async fn test_resolve_and_logout() {
        let store = SessionStore::new(Duration::hours(1));
        let (token, _) = store
            .create(RequestContext::new("abc123", Role::Student))
            .await;

        let context = store.resolve(&token).await.unwrap();
        assert_eq!(context.user_id, "abc123");
        assert_eq!(context.role, Role::Student);

        assert!(store.remove(&token).await);
        assert!(store.resolve(&token).await.is_none());
        assert!(!store.remove(&token).await);
    }

    #[tokio::test]
    async fn test_expired_sessions_are_dropped() {
        let store = SessionStore::new(Duration::seconds(-1));
        let (token, _) = store
            .create(RequestContext::new("abc123", Role::Admin))
            .await;
        store
            .create(RequestContext::new("xyz789", Role::Staff))
            .await;

        assert!(store.resolve(&token).await.is_none());
        assert_eq!(store.cleanup_expired().await, 1);
        assert_eq!(store.len().await, 0);
    }
}
