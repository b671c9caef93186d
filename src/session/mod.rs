//! Recognition session management
//!
//! This module provides the `SessionController` abstraction that manages:
//! - Capability activation and deactivation
//! - The Idle / Active / Terminating lifecycle state machine
//! - Transcript aggregation into (final, interim) display text
//! - Lifecycle and transcript notifications for UI layers
//! - Session statistics

mod aggregator;
mod config;
mod controller;
mod snapshot;
mod stats;

pub use aggregator::TranscriptAggregator;
pub use config::SessionConfig;
pub use controller::SessionController;
pub use snapshot::{SessionNotification, SessionState, TranscriptSnapshot};
pub use stats::SessionStats;
