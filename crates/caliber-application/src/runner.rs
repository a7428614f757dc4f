//! Live session driver.
//!
//! `ArenaRunner` owns the async side of a call: the one-second countdown,
//! the delayed counterpart replies, and teardown. All session state itself
//! lives in [`ArenaSession`]; the runner only schedules when its methods
//! run and fans events out to the frontend.
//!
//! Cancellation contract: at most one pending reply exists per operator
//! turn, each guarded by a child of the runner's root token. Ending the
//! call or shutting the runner down cancels the root, and a callback that
//! fires anyway finds the session out of `Running` and does nothing.

use caliber_core::config::ArenaConfig;
use caliber_core::error::Result;
use caliber_core::report::ScoutingReport;
use caliber_core::session::{ArenaSession, SessionEvent};
use caliber_core::track::Track;
use caliber_roleplay::{Counterpart, CounterpartPersona, sample_reply_delay, sample_score_delta};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, mpsc};
use tokio_util::sync::CancellationToken;

/// Buffered events between the runner and its frontend.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Drives one live arena session.
pub struct ArenaRunner {
    session: Arc<Mutex<ArenaSession>>,
    config: ArenaConfig,
    counterpart: Arc<dyn Counterpart>,
    events: mpsc::Sender<SessionEvent>,
    cancel: CancellationToken,
    pending_reply: Mutex<Option<CancellationToken>>,
}

impl ArenaRunner {
    /// Starts a session: transitions it to running, emits the counterpart's
    /// opener, and spawns the countdown task.
    ///
    /// Returns the runner and the receiving end of its event stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be started (never happens for
    /// a freshly constructed session).
    pub async fn start(
        track: Track,
        counterpart: Arc<dyn Counterpart>,
        config: ArenaConfig,
    ) -> Result<(Arc<Self>, mpsc::Receiver<SessionEvent>)> {
        let (events, events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

        let mut session = ArenaSession::new(track, &config);
        session.begin()?;
        let opener = counterpart.opener();
        session.record_counterpart_turn(&opener, 0);
        let remaining_secs = session.remaining_secs;

        let runner = Arc::new(Self {
            session: Arc::new(Mutex::new(session)),
            config,
            counterpart,
            events: events.clone(),
            cancel: CancellationToken::new(),
            pending_reply: Mutex::new(None),
        });

        let _ = events
            .send(SessionEvent::SessionStarted {
                track,
                remaining_secs,
            })
            .await;
        let _ = events.send(SessionEvent::CounterpartTurn { text: opener }).await;

        runner.spawn_countdown();
        Ok((runner, events_rx))
    }

    /// Submits an operator utterance and schedules the counterpart's reply.
    ///
    /// A still-pending reply from a previous submission is cancelled first,
    /// so at most one reply is ever in flight.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for empty text and an invalid-phase
    /// error once the session has ended. Frontends treat both as a local
    /// no-op.
    pub async fn submit(&self, text: &str) -> Result<()> {
        {
            let mut session = self.session.lock().await;
            session.submit_operator_turn(text)?;
        }
        let _ = self
            .events
            .send(SessionEvent::OperatorTurn {
                text: text.trim().to_string(),
            })
            .await;
        let _ = self.events.send(SessionEvent::CounterpartTyping).await;

        let reply_guard = self.cancel.child_token();
        {
            let mut pending = self.pending_reply.lock().await;
            if let Some(previous) = pending.replace(reply_guard.clone()) {
                previous.cancel();
            }
        }

        let (delay, delta) = {
            let mut rng = rand::thread_rng();
            (
                sample_reply_delay(&self.config.reply_delay_ms, &mut rng),
                sample_score_delta(&self.config.score_delta, &mut rng),
            )
        };
        let reply = self.counterpart.reply();
        self.spawn_delayed_reply(reply, delta, delay, reply_guard);
        Ok(())
    }

    /// Ends the call immediately, freezing the score and cancelling all
    /// pending timers. Idempotent. Returns the stored report.
    pub async fn end_call(&self) -> Option<ScoutingReport> {
        let (transitioned, report) = {
            let mut session = self.session.lock().await;
            let was_running = session.is_running();
            let report = session.end_call(&mut rand::thread_rng()).cloned();
            (was_running, report)
        };
        if transitioned {
            if let Some(report) = report.clone() {
                let _ = self.events.send(SessionEvent::SessionEnded { report }).await;
            }
        }
        self.cancel.cancel();
        report
    }

    /// Tears the runner down without finishing the session.
    ///
    /// Models navigating away mid-call: all timers are cancelled and any
    /// late callback becomes a no-op. Safe to call any number of times.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    /// Clone of the current session state.
    pub async fn snapshot(&self) -> ArenaSession {
        self.session.lock().await.clone()
    }

    /// Current running score.
    pub async fn score(&self) -> u8 {
        self.session.lock().await.score
    }

    /// Seconds left on the call clock.
    pub async fn remaining_secs(&self) -> u32 {
        self.session.lock().await.remaining_secs
    }

    /// Persona card of the counterpart on this call.
    pub fn persona(&self) -> &CounterpartPersona {
        self.counterpart.persona()
    }

    fn spawn_countdown(&self) {
        let session = Arc::clone(&self.session);
        let events = self.events.clone();
        let cancel = self.cancel.clone();
        let tick = self.config.tick_interval();

        tokio::spawn(async move {
            let start = tokio::time::Instant::now() + tick;
            let mut ticker = tokio::time::interval_at(start, tick);
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = ticker.tick() => {
                        let (remaining_secs, ended, report) = {
                            let mut session = session.lock().await;
                            session.tick(&mut rand::thread_rng());
                            (
                                session.remaining_secs,
                                session.is_ended(),
                                session.report.clone(),
                            )
                        };
                        if ended {
                            if let Some(report) = report {
                                let _ = events.send(SessionEvent::SessionEnded { report }).await;
                            }
                            cancel.cancel();
                            break;
                        }
                        let _ = events
                            .send(SessionEvent::CountdownTick { remaining_secs })
                            .await;
                    }
                }
            }
            tracing::debug!("countdown task finished");
        });
    }

    fn spawn_delayed_reply(
        &self,
        reply: String,
        delta: i32,
        delay: Duration,
        guard: CancellationToken,
    ) {
        let session = Arc::clone(&self.session);
        let events = self.events.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = guard.cancelled() => {
                    tracing::trace!("pending reply cancelled");
                    return;
                }
                _ = tokio::time::sleep(delay) => {}
            }
            let score = {
                let mut session = session.lock().await;
                if !session.is_running() {
                    // The call ended while we were "thinking"
                    return;
                }
                session.record_counterpart_turn(&reply, delta);
                session.score
            };
            let _ = events.send(SessionEvent::CounterpartTurn { text: reply }).await;
            let _ = events.send(SessionEvent::ScoreChanged { score, delta }).await;
        });
    }
}

impl Drop for ArenaRunner {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caliber_core::config::{DelayRange, DeltaRange};
    use caliber_core::session::Speaker;
    use caliber_roleplay::ScriptedCounterpart;
    use tokio::time::timeout;

    /// Millisecond-scale config so the tests run fast.
    fn fast_config() -> ArenaConfig {
        ArenaConfig {
            session_secs: 3,
            starting_score: 50,
            tick_interval_ms: 20,
            reply_delay_ms: DelayRange { min: 5, max: 10 },
            score_delta: DeltaRange { min: 2, max: 2 },
        }
    }

    fn counterpart() -> Arc<dyn Counterpart> {
        Arc::new(ScriptedCounterpart::new(Track::B2bEnterprise))
    }

    async fn wait_for<F>(
        rx: &mut mpsc::Receiver<SessionEvent>,
        mut predicate: F,
    ) -> Option<SessionEvent>
    where
        F: FnMut(&SessionEvent) -> bool,
    {
        timeout(Duration::from_secs(2), async {
            while let Some(event) = rx.recv().await {
                if predicate(&event) {
                    return Some(event);
                }
            }
            None
        })
        .await
        .ok()
        .flatten()
    }

    #[tokio::test]
    async fn test_start_emits_opener() {
        let (runner, mut rx) =
            ArenaRunner::start(Track::B2bEnterprise, counterpart(), fast_config())
                .await
                .unwrap();

        let started = rx.recv().await.unwrap();
        assert!(matches!(started, SessionEvent::SessionStarted { remaining_secs: 3, .. }));
        let opener = rx.recv().await.unwrap();
        assert!(matches!(opener, SessionEvent::CounterpartTurn { .. }));

        let snapshot = runner.snapshot().await;
        assert!(snapshot.is_running());
        assert_eq!(snapshot.transcript.len(), 1);
        runner.shutdown();
    }

    #[tokio::test]
    async fn test_countdown_ends_session() {
        let (runner, mut rx) =
            ArenaRunner::start(Track::B2bEnterprise, counterpart(), fast_config())
                .await
                .unwrap();

        let ended = wait_for(&mut rx, |e| matches!(e, SessionEvent::SessionEnded { .. }))
            .await
            .expect("session should end when the clock runs out");
        let SessionEvent::SessionEnded { report } = ended else {
            unreachable!()
        };
        assert_eq!(report.final_score, 50);

        let snapshot = runner.snapshot().await;
        assert!(snapshot.is_ended());
        assert_eq!(snapshot.remaining_secs, 0);
    }

    #[tokio::test]
    async fn test_submit_produces_reply_and_score_change() {
        let (runner, mut rx) =
            ArenaRunner::start(Track::B2bEnterprise, counterpart(), fast_config())
                .await
                .unwrap();

        runner.submit("hello, thanks for taking the call").await.unwrap();

        let operator = wait_for(&mut rx, |e| matches!(e, SessionEvent::OperatorTurn { .. }))
            .await
            .unwrap();
        assert!(matches!(operator, SessionEvent::OperatorTurn { ref text }
            if text == "hello, thanks for taking the call"));

        let changed = wait_for(&mut rx, |e| matches!(e, SessionEvent::ScoreChanged { .. }))
            .await
            .expect("reply should land and move the score");
        // Delta range is pinned to 2..=2 in the test config
        assert!(matches!(changed, SessionEvent::ScoreChanged { score: 52, delta: 2 }));

        let snapshot = runner.snapshot().await;
        let speakers: Vec<Speaker> = snapshot.transcript.iter().map(|t| t.speaker).collect();
        assert_eq!(
            speakers,
            vec![Speaker::Counterpart, Speaker::Operator, Speaker::Counterpart]
        );
        runner.shutdown();
    }

    #[tokio::test]
    async fn test_empty_submit_is_rejected() {
        let (runner, _rx) =
            ArenaRunner::start(Track::B2bEnterprise, counterpart(), fast_config())
                .await
                .unwrap();

        let err = runner.submit("   ").await.unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(runner.snapshot().await.transcript.len(), 1);
        runner.shutdown();
    }

    #[tokio::test]
    async fn test_end_call_cancels_pending_reply() {
        let mut config = fast_config();
        config.session_secs = 600;
        config.reply_delay_ms = DelayRange { min: 100, max: 150 };
        let (runner, _rx) =
            ArenaRunner::start(Track::B2bEnterprise, counterpart(), config)
                .await
                .unwrap();

        runner.submit("pitch").await.unwrap();
        let report = runner.end_call().await.expect("report derived at end");
        assert_eq!(report.final_score, 50);

        // Give the cancelled reply timer ample time to have fired
        tokio::time::sleep(Duration::from_millis(300)).await;

        let snapshot = runner.snapshot().await;
        assert_eq!(snapshot.score, 50);
        // Opener + operator turn, no late counterpart reply
        assert_eq!(snapshot.transcript.len(), 2);
    }

    #[tokio::test]
    async fn test_end_call_is_idempotent() {
        let (runner, _rx) =
            ArenaRunner::start(Track::B2bEnterprise, counterpart(), fast_config())
                .await
                .unwrap();

        let first = runner.end_call().await.unwrap();
        let second = runner.end_call().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_shutdown_prevents_late_mutation() {
        let mut config = fast_config();
        config.session_secs = 600;
        config.reply_delay_ms = DelayRange { min: 100, max: 150 };
        let (runner, _rx) =
            ArenaRunner::start(Track::B2bEnterprise, counterpart(), config)
                .await
                .unwrap();

        runner.submit("are you there?").await.unwrap();
        runner.shutdown();
        tokio::time::sleep(Duration::from_millis(300)).await;

        let snapshot = runner.snapshot().await;
        assert_eq!(snapshot.score, 50);
        assert_eq!(snapshot.transcript.len(), 2);
        // Countdown was cancelled too: the clock is frozen mid-call
        assert!(snapshot.is_running());
    }

    #[tokio::test]
    async fn test_resubmission_cancels_previous_pending_reply() {
        let mut config = fast_config();
        config.session_secs = 600;
        config.reply_delay_ms = DelayRange { min: 100, max: 150 };
        let (runner, _rx) =
            ArenaRunner::start(Track::B2bEnterprise, counterpart(), config)
                .await
                .unwrap();

        runner.submit("first point").await.unwrap();
        runner.submit("second point").await.unwrap();
        tokio::time::sleep(Duration::from_millis(400)).await;

        let snapshot = runner.snapshot().await;
        let replies = snapshot
            .transcript
            .iter()
            .filter(|t| t.speaker == Speaker::Counterpart)
            .count();
        // Opener plus exactly one reply: the first pending one was cancelled
        assert_eq!(replies, 2);
        assert_eq!(snapshot.transcript.len(), 4);
        runner.shutdown();
    }
}
