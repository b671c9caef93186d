use super::capability::{ActivationSettings, RecognitionCapability};
use super::events::{ErrorKind, RecognitionEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

/// Recognition capability that replays a fixed event sequence
///
/// Emits `Activated`, then the scripted events spaced by a short delay,
/// then `Ended` unless the script already ended with a terminal event.
/// Used for demos and end-to-end tests; no audio is involved.
pub struct ScriptedCapability {
    script: Vec<RecognitionEvent>,
    event_delay: Duration,
    active: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl ScriptedCapability {
    pub fn new(script: Vec<RecognitionEvent>) -> Self {
        Self {
            script,
            event_delay: Duration::from_millis(10),
            active: Arc::new(AtomicBool::new(false)),
            task: None,
        }
    }

    /// Override the delay between replayed events
    pub fn with_event_delay(mut self, delay: Duration) -> Self {
        self.event_delay = delay;
        self
    }
}

#[async_trait::async_trait]
impl RecognitionCapability for ScriptedCapability {
    async fn activate(
        &mut self,
        settings: &ActivationSettings,
    ) -> Result<mpsc::Receiver<RecognitionEvent>, ErrorKind> {
        if self.is_active() {
            return Err(ErrorKind::ActivationFailed(
                "scripted capability already active".to_string(),
            ));
        }

        info!(
            "Activating scripted capability ({} events, language={})",
            self.script.len(),
            settings.language
        );

        let (tx, rx) = mpsc::channel(64);

        self.active.store(true, Ordering::SeqCst);

        let active = Arc::clone(&self.active);
        let script = self.script.clone();
        let delay = self.event_delay;

        let task = tokio::spawn(async move {
            if tx.send(RecognitionEvent::Activated).await.is_err() {
                active.store(false, Ordering::SeqCst);
                return;
            }

            for event in script {
                // Deactivation cuts the replay short; Ended is still
                // delivered below.
                if !active.load(Ordering::SeqCst) {
                    break;
                }

                tokio::time::sleep(delay).await;

                let terminal =
                    matches!(event, RecognitionEvent::Error(_) | RecognitionEvent::Ended);

                if tx.send(event).await.is_err() {
                    active.store(false, Ordering::SeqCst);
                    return;
                }

                if terminal {
                    active.store(false, Ordering::SeqCst);
                    return;
                }
            }

            let _ = tx.send(RecognitionEvent::Ended).await;
            active.store(false, Ordering::SeqCst);
        });

        self.task = Some(task);

        Ok(rx)
    }

    async fn deactivate(&mut self) -> Result<(), ErrorKind> {
        self.active.store(false, Ordering::SeqCst);

        if let Some(task) = self.task.take() {
            // Let the replay task flush its Ended event.
            let _ = task.await;
        }

        Ok(())
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
