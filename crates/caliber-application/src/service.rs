//! Arena use case.
//!
//! `ArenaService` coordinates the live runner and the session store: it
//! starts sessions for a track, finishes and archives them, and serves the
//! completed-session list for the dashboard view.

use crate::runner::ArenaRunner;
use caliber_core::config::ArenaConfig;
use caliber_core::error::Result;
use caliber_core::report::ScoutingReport;
use caliber_core::session::{SessionEvent, SessionRepository, SessionSummary};
use caliber_core::track::Track;
use caliber_roleplay::{Counterpart, ScriptedCounterpart};
use std::sync::Arc;
use tokio::sync::{RwLock, mpsc};

/// Use case for running and archiving arena sessions.
///
/// At most one session is live at a time; starting a new one finishes and
/// archives the previous one first (the product's "reset" edge).
pub struct ArenaService {
    /// Store for finished sessions
    repository: Arc<dyn SessionRepository>,
    /// Timing and scoring knobs shared by all sessions
    config: ArenaConfig,
    /// The currently live runner, if any
    active: RwLock<Option<Arc<ArenaRunner>>>,
}

impl ArenaService {
    /// Creates a new `ArenaService`.
    pub fn new(repository: Arc<dyn SessionRepository>, config: ArenaConfig) -> Self {
        Self {
            repository,
            config,
            active: RwLock::new(None),
        }
    }

    /// Starts a new session against the given track's scripted counterpart.
    ///
    /// Any previous live session is ended and archived first.
    ///
    /// # Errors
    ///
    /// Returns an error if archiving the previous session fails.
    pub async fn start_session(
        &self,
        track: Track,
    ) -> Result<(Arc<ArenaRunner>, mpsc::Receiver<SessionEvent>)> {
        self.finish_active().await?;

        let counterpart: Arc<dyn Counterpart> = Arc::new(ScriptedCounterpart::new(track));
        let (runner, events) = ArenaRunner::start(track, counterpart, self.config.clone()).await?;

        *self.active.write().await = Some(Arc::clone(&runner));
        tracing::info!(track = %track, "arena session started");
        Ok((runner, events))
    }

    /// The currently live runner, if any.
    pub async fn active(&self) -> Option<Arc<ArenaRunner>> {
        self.active.read().await.clone()
    }

    /// Ends the live session (if any), archives it, and returns its report.
    ///
    /// Idempotent: with no live session this returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be saved to the store.
    pub async fn finish_active(&self) -> Result<Option<ScoutingReport>> {
        let Some(runner) = self.active.write().await.take() else {
            return Ok(None);
        };

        let report = runner.end_call().await;
        let snapshot = runner.snapshot().await;
        self.repository.save(&snapshot).await?;
        tracing::info!(session_id = %snapshot.id, score = snapshot.score, "session archived");
        Ok(report)
    }

    /// Completed-session summaries, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub async fn list_completed(&self) -> Result<Vec<SessionSummary>> {
        let sessions = self.repository.list_all().await?;
        let mut summaries: Vec<SessionSummary> =
            sessions.iter().filter_map(|s| s.summary()).collect();
        summaries.sort_by(|a, b| b.ended_at.cmp(&a.ended_at));
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemorySessionRepository;
    use caliber_core::config::{DelayRange, DeltaRange};

    fn service() -> ArenaService {
        let config = ArenaConfig {
            session_secs: 600,
            starting_score: 50,
            tick_interval_ms: 20,
            reply_delay_ms: DelayRange { min: 5, max: 10 },
            score_delta: DeltaRange { min: 2, max: 2 },
        };
        ArenaService::new(Arc::new(InMemorySessionRepository::new()), config)
    }

    #[tokio::test]
    async fn test_start_and_finish_session() {
        let service = service();

        let (_runner, _events) = service.start_session(Track::B2bEnterprise).await.unwrap();
        assert!(service.active().await.is_some());

        let report = service.finish_active().await.unwrap().unwrap();
        assert_eq!(report.final_score, 50);
        assert!(service.active().await.is_none());

        let completed = service.list_completed().await.unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].final_score, 50);
    }

    #[tokio::test]
    async fn test_finish_without_active_is_noop() {
        let service = service();
        assert!(service.finish_active().await.unwrap().is_none());
        assert!(service.list_completed().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_starting_new_session_archives_previous() {
        let service = service();

        let (first, _rx1) = service.start_session(Track::B2bEnterprise).await.unwrap();
        let first_id = first.snapshot().await.id;

        let (second, _rx2) = service.start_session(Track::B2cHighTicket).await.unwrap();
        assert_ne!(second.snapshot().await.id, first_id);

        // The first session was ended and archived by the reset edge
        assert!(first.snapshot().await.is_ended());
        let completed = service.list_completed().await.unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, first_id);

        service.finish_active().await.unwrap();
        assert_eq!(service.list_completed().await.unwrap().len(), 2);
    }
}
