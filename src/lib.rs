pub mod config;
pub mod recognition;
pub mod session;

pub use config::Config;
pub use recognition::{
    ActivationSettings, ErrorKind, RecognitionCapability, RecognitionCapabilityFactory,
    RecognitionEvent, RecognitionSource, ResultBatch, ResultChunk, ScriptedCapability,
};
pub use session::{
    SessionConfig, SessionController, SessionNotification, SessionState, SessionStats,
    TranscriptAggregator, TranscriptSnapshot,
};
