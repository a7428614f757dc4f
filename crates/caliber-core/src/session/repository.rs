//! Session repository trait.
//!
//! Defines the interface for session storage. Caliber ships only an
//! in-memory implementation (sessions are process-lifetime by design), but
//! the trait keeps the storage seam explicit and mockable.

use super::model::ArenaSession;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract store for finished and in-flight sessions.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Saves a session, replacing any previous version with the same ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    async fn save(&self, session: &ArenaSession) -> Result<()>;

    /// Finds a session by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(session))`: Session found
    /// - `Ok(None)`: Session not found
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_by_id(&self, session_id: &str) -> Result<Option<ArenaSession>>;

    /// Lists all stored sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    async fn list_all(&self) -> Result<Vec<ArenaSession>>;

    /// Deletes a session. Deleting a missing session is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    async fn delete(&self, session_id: &str) -> Result<()>;
}
