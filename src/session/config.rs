use crate::recognition::ActivationSettings;
use serde::{Deserialize, Serialize};

/// Configuration for a recognition session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Unique session identifier (e.g., "caption-2025-10-28-standup")
    pub session_id: String,

    /// BCP 47 language tag passed to the capability
    pub language: String,

    /// Keep listening across pauses instead of ending after the first
    /// phrase
    pub continuous: bool,

    /// Request provisional (non-final) results as they form
    pub interim_results: bool,

    /// Maximum number of alternative transcriptions per chunk
    pub max_alternatives: u32,
}

impl SessionConfig {
    /// Settings forwarded to the capability on activation
    pub fn activation_settings(&self) -> ActivationSettings {
        ActivationSettings {
            language: self.language.clone(),
            continuous: self.continuous,
            interim_results: self.interim_results,
            max_alternatives: self.max_alternatives,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: format!("caption-{}", uuid::Uuid::new_v4()),
            language: "en-US".to_string(),
            continuous: true,
            interim_results: true,
            max_alternatives: 1,
        }
    }
}
