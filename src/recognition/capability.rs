use super::events::{ErrorKind, RecognitionEvent};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Settings passed to the capability on activation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationSettings {
    /// BCP 47 language tag (e.g. "en-US", "ja-JP")
    pub language: String,

    /// Keep listening across pauses instead of ending after the first
    /// phrase
    pub continuous: bool,

    /// Deliver provisional (non-final) results as they form
    pub interim_results: bool,

    /// Maximum number of alternative transcriptions per chunk
    pub max_alternatives: u32,
}

impl Default for ActivationSettings {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            continuous: true,
            interim_results: true,
            max_alternatives: 1,
        }
    }
}

/// Streaming speech-recognition capability trait
///
/// Implementations wrap whatever engine the host provides. The engine
/// itself is out of scope here; the controller only consumes the event
/// stream this trait hands back.
#[async_trait::async_trait]
pub trait RecognitionCapability: Send + Sync {
    /// Activate recognition
    ///
    /// Returns a channel receiver that will receive recognition events,
    /// starting with `Activated` once the engine confirms. Fails with
    /// `Unsupported` when no engine is present and `ActivationFailed`
    /// on permission or device errors.
    async fn activate(
        &mut self,
        settings: &ActivationSettings,
    ) -> Result<mpsc::Receiver<RecognitionEvent>, ErrorKind>;

    /// Request a graceful stop; completion is signaled via the `Ended`
    /// event on the receiver returned by `activate`
    async fn deactivate(&mut self) -> Result<(), ErrorKind>;

    /// Check if the capability is currently active
    fn is_active(&self) -> bool;

    /// Get capability name for logging
    fn name(&self) -> &str;
}

/// Recognition capability factory
pub struct RecognitionCapabilityFactory;

impl RecognitionCapabilityFactory {
    /// Create a capability based on the requested source
    pub fn create(source: RecognitionSource) -> Result<Box<dyn RecognitionCapability>, ErrorKind> {
        match source {
            // Host engines (platform speech services) register here.
            // None is linked in this build, which surfaces as the
            // Unsupported condition the controller reports.
            RecognitionSource::Host => Err(ErrorKind::Unsupported),

            RecognitionSource::Scripted(events) => {
                Ok(Box::new(super::scripted::ScriptedCapability::new(events)))
            }
        }
    }
}

/// Recognition source type
pub enum RecognitionSource {
    /// Speech engine provided by the host platform
    Host,

    /// Replay a fixed event sequence (for testing/demo)
    Scripted(Vec<RecognitionEvent>),
}
