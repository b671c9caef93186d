use crate::recognition::ErrorKind;
use serde::{Deserialize, Serialize};

/// Lifecycle state of the recognition session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No session running; start requests are accepted
    Idle,

    /// Capability activated (or activating); results may arrive
    Active,

    /// Stop requested, waiting for the capability to confirm the end
    /// of the session
    Terminating,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Immutable, display-ready projection of controller + aggregator state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptSnapshot {
    /// Finalized transcript, append-only for the lifetime of a session
    pub final_text: String,

    /// In-progress transcript, replaced on every result batch
    pub interim_text: String,

    /// Current session lifecycle state
    pub session_state: SessionState,

    /// Last reported error, cleared by the next start request
    pub last_error: Option<ErrorKind>,
}

/// Notifications emitted by the session controller
///
/// UI affordances (button enablement, error banners) are driven off
/// these rather than off the synchronous `start`/`stop` returns, since
/// activation and termination complete asynchronously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionNotification {
    /// The capability confirmed activation
    Started,

    /// The transcript changed; carries the fresh snapshot
    Transcript(TranscriptSnapshot),

    /// The session ended with an error
    Error(ErrorKind),

    /// The session ended, on request or on the capability's own
    /// initiative
    Ended,
}
