use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One indexed unit of recognized text, either final (immutable) or
/// interim (provisional, may be revised by a later batch)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultChunk {
    /// Recognized text for this chunk
    pub text: String,

    /// Whether this chunk's text is now immutable
    #[serde(rename = "final")]
    pub is_final: bool,
}

/// A batch of recognition results delivered by the capability
///
/// Covers chunk indices `[start_index, start_index + chunks.len())`.
/// The capability redelivers the complete set of currently-non-final
/// chunks on every batch, so interim text is replaced per batch rather
/// than accumulated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultBatch {
    /// Index of the first chunk included in this delivery
    pub start_index: usize,

    /// Chunks in ascending index order starting at `start_index`
    pub chunks: Vec<ResultChunk>,
}

impl ResultBatch {
    /// Iterate chunks paired with their absolute index in the session's
    /// result sequence
    pub fn indexed_chunks(&self) -> impl Iterator<Item = (usize, &ResultChunk)> {
        self.chunks
            .iter()
            .enumerate()
            .map(|(offset, chunk)| (self.start_index + offset, chunk))
    }
}

/// Error conditions reported by the recognition capability
///
/// All of these are terminal for the current session; none are retried
/// automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ErrorKind {
    /// No recognition implementation is available on this host
    #[error("speech recognition is not available on this host")]
    Unsupported,

    /// The capability timed out without hearing any audio
    #[error("no speech detected")]
    NoSpeechDetected,

    /// Permission denial or device error during activation
    #[error("recognition could not be activated: {0}")]
    ActivationFailed(String),

    /// Any other capability-reported error code, surfaced verbatim
    #[error("recognition error: {0}")]
    Other(String),
}

/// Events emitted by an active recognition session
///
/// This is the complete event taxonomy; the session controller matches
/// exhaustively on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    /// The capability confirmed activation and is listening
    Activated,

    /// A batch of partial and/or finalized results
    Results(ResultBatch),

    /// A fatal error; no further results will follow
    Error(ErrorKind),

    /// The session ended, either on request or on the capability's own
    /// initiative (e.g. silence timeout)
    Ended,
}
