use super::snapshot::SessionState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Statistics about a recognition session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    /// Current session lifecycle state
    pub session_state: SessionState,

    /// When the current (or most recent) session started
    pub started_at: Option<DateTime<Utc>>,

    /// Seconds elapsed since the session started
    pub duration_secs: f64,

    /// Number of result batches processed so far
    pub batches_processed: usize,

    /// Number of chunks finalized into the transcript
    pub chunks_finalized: usize,
}
