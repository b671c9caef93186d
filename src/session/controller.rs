use super::aggregator::TranscriptAggregator;
use super::config::SessionConfig;
use super::snapshot::{SessionNotification, SessionState, TranscriptSnapshot};
use super::stats::SessionStats;
use crate::recognition::{ErrorKind, RecognitionCapability, RecognitionEvent};
use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Mutable controller state, touched only by start/stop and the event
/// task
#[derive(Debug, Default)]
struct Inner {
    phase: SessionState,
    aggregator: TranscriptAggregator,
    last_error: Option<ErrorKind>,
    started_at: Option<chrono::DateTime<Utc>>,
    batches_processed: usize,
}

impl Inner {
    fn snapshot(&self) -> TranscriptSnapshot {
        TranscriptSnapshot {
            final_text: self.aggregator.final_text().to_string(),
            interim_text: self.aggregator.interim_text().to_string(),
            session_state: self.phase,
            last_error: self.last_error.clone(),
        }
    }
}

/// A recognition session controller that manages capability activation,
/// transcript aggregation, and lifecycle notifications
///
/// At most one session is active at a time. `start` and `stop` return
/// immediately; activation and termination complete asynchronously and
/// are observed via the notification channel returned by `new`.
pub struct SessionController {
    /// Session configuration
    config: SessionConfig,

    /// Recognition capability driving the session
    capability: Arc<Mutex<Box<dyn RecognitionCapability>>>,

    /// State shared with the event task
    inner: Arc<Mutex<Inner>>,

    /// Channel for lifecycle and transcript notifications
    notify_tx: mpsc::Sender<SessionNotification>,

    /// Handle for the event-processing task
    event_task: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl SessionController {
    /// Create a new session controller
    ///
    /// Returns the controller plus the receiver the UI layer drains for
    /// `SessionNotification`s.
    pub fn new(
        config: SessionConfig,
        capability: Box<dyn RecognitionCapability>,
    ) -> (Self, mpsc::Receiver<SessionNotification>) {
        let (notify_tx, notify_rx) = mpsc::channel(64);

        let controller = Self {
            config,
            capability: Arc::new(Mutex::new(capability)),
            inner: Arc::new(Mutex::new(Inner::default())),
            notify_tx,
            event_task: Arc::new(Mutex::new(None)),
        };

        (controller, notify_rx)
    }

    /// Start a recognition session
    ///
    /// No-op unless the controller is Idle. Clears the previous error
    /// and transcript, activates the capability, and spawns the event
    /// task. An activation failure is recorded in the snapshot,
    /// reported once via an `Error` notification, and returned; the
    /// controller stays Idle and does not retry.
    pub async fn start(&self) -> Result<()> {
        {
            let mut inner = self.inner.lock().await;
            if inner.phase != SessionState::Idle {
                warn!("Session start requested while {:?}; ignoring", inner.phase);
                return Ok(());
            }

            inner.phase = SessionState::Active;
            inner.last_error = None;
            inner.aggregator.reset();
            inner.started_at = Some(Utc::now());
            inner.batches_processed = 0;
        }

        info!("Starting recognition session: {}", self.config.session_id);

        let settings = self.config.activation_settings();
        let activation = {
            let mut capability = self.capability.lock().await;
            capability.activate(&settings).await
        };

        let mut events = match activation {
            Ok(events) => events,
            Err(kind) => {
                warn!("Failed to activate recognition capability: {}", kind);

                {
                    let mut inner = self.inner.lock().await;
                    inner.phase = SessionState::Idle;
                    inner.last_error = Some(kind.clone());
                }

                let _ = self
                    .notify_tx
                    .send(SessionNotification::Error(kind.clone()))
                    .await;

                return Err(kind.into());
            }
        };

        // Spawn event processing task
        let inner = Arc::clone(&self.inner);
        let notify_tx = self.notify_tx.clone();
        let session_id = self.config.session_id.clone();

        let task = tokio::spawn(async move {
            info!("Recognition event task started");

            while let Some(event) = events.recv().await {
                match event {
                    RecognitionEvent::Activated => {
                        info!("Capability confirmed activation for {}", session_id);
                        let _ = notify_tx.send(SessionNotification::Started).await;
                    }

                    RecognitionEvent::Results(batch) => {
                        let snapshot = {
                            let mut inner = inner.lock().await;

                            // Batches already in flight when stop() was
                            // requested are still aggregated; only a
                            // session that has fully ended drops them.
                            if inner.phase == SessionState::Idle {
                                warn!("Dropping result batch delivered after session end");
                                continue;
                            }

                            inner.aggregator.on_result_batch(&batch);
                            inner.batches_processed += 1;
                            inner.snapshot()
                        };

                        let _ = notify_tx
                            .send(SessionNotification::Transcript(snapshot))
                            .await;
                    }

                    RecognitionEvent::Error(kind) => {
                        error!("Recognition session {} failed: {}", session_id, kind);

                        {
                            let mut inner = inner.lock().await;
                            inner.phase = SessionState::Idle;
                            inner.aggregator.clear_interim();
                            inner.last_error = Some(kind.clone());
                        }

                        let _ = notify_tx.send(SessionNotification::Error(kind)).await;
                        break;
                    }

                    RecognitionEvent::Ended => {
                        info!("Recognition session {} ended", session_id);

                        {
                            let mut inner = inner.lock().await;
                            inner.phase = SessionState::Idle;
                            inner.aggregator.clear_interim();
                        }

                        let _ = notify_tx.send(SessionNotification::Ended).await;
                        break;
                    }
                }
            }

            // The capability closed its channel without a terminal
            // event; treat it like an unprompted end.
            let ended_without_event = {
                let mut inner = inner.lock().await;
                if inner.phase != SessionState::Idle {
                    inner.phase = SessionState::Idle;
                    inner.aggregator.clear_interim();
                    true
                } else {
                    false
                }
            };

            if ended_without_event {
                warn!("Capability closed its event channel without Ended");
                let _ = notify_tx.send(SessionNotification::Ended).await;
            }

            info!("Recognition event task stopped");
        });

        {
            let mut handle = self.event_task.lock().await;
            *handle = Some(task);
        }

        Ok(())
    }

    /// Stop the active recognition session
    ///
    /// No-op unless the controller is Active. Transitions to
    /// Terminating and requests deactivation; the session returns to
    /// Idle (and `Ended` is emitted) once the capability confirms.
    pub async fn stop(&self) -> Result<()> {
        {
            let mut inner = self.inner.lock().await;
            if inner.phase != SessionState::Active {
                warn!("Session stop requested while {:?}; ignoring", inner.phase);
                return Ok(());
            }

            inner.phase = SessionState::Terminating;
        }

        info!("Stopping recognition session: {}", self.config.session_id);

        let result = {
            let mut capability = self.capability.lock().await;
            capability.deactivate().await
        };

        if let Err(kind) = result {
            error!("Failed to deactivate recognition capability: {}", kind);
        }

        Ok(())
    }

    /// Get the current transcript snapshot
    pub async fn snapshot(&self) -> TranscriptSnapshot {
        self.inner.lock().await.snapshot()
    }

    /// Get current session statistics
    pub async fn stats(&self) -> SessionStats {
        let inner = self.inner.lock().await;

        let duration_secs = inner
            .started_at
            .map(|started| {
                let elapsed = Utc::now().signed_duration_since(started);
                elapsed.num_milliseconds() as f64 / 1000.0
            })
            .unwrap_or(0.0);

        SessionStats {
            session_state: inner.phase,
            started_at: inner.started_at,
            duration_secs,
            batches_processed: inner.batches_processed,
            chunks_finalized: inner.aggregator.chunks_finalized(),
        }
    }

    /// Wait for the current session's event task to finish
    pub async fn join(&self) {
        let task = { self.event_task.lock().await.take() };

        if let Some(task) = task {
            if let Err(e) = task.await {
                error!("Recognition event task panicked: {}", e);
            }
        }
    }

    /// Session configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
