//! In-memory session storage.
//!
//! Sessions deliberately live only as long as the process: there is no
//! on-disk persistence in the product. This is the only shipped
//! [`SessionRepository`] implementation.

use async_trait::async_trait;
use caliber_core::error::Result;
use caliber_core::session::{ArenaSession, SessionRepository};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-lifetime session store backed by a `HashMap`.
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<String, ArenaSession>>,
}

impl InMemorySessionRepository {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn save(&self, session: &ArenaSession) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id.clone(), session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: &str) -> Result<Option<ArenaSession>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(session_id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<ArenaSession>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.values().cloned().collect())
    }

    async fn delete(&self, session_id: &str) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(session_id);
        Ok(())
    }
}
