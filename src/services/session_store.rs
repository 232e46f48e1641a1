//! In-memory store for quiz sessions.

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::domain::QuizSession;

/// Holds each session's current quiz. Writes are wholesale replacements
/// with last-write-wins semantics: a regenerate racing a grade never
/// observes a partially merged question list.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, QuizSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn replace(&self, session: QuizSession) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id, session);
    }

    pub async fn get(&self, id: &Uuid) -> Option<QuizSession> {
        let sessions = self.sessions.read().await;
        sessions.get(id).cloned()
    }

    pub async fn remove(&self, id: &Uuid) -> Option<QuizSession> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(id)
    }
}
