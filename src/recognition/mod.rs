pub mod capability;
pub mod events;
pub mod scripted;

pub use capability::{
    ActivationSettings, RecognitionCapability, RecognitionCapabilityFactory, RecognitionSource,
};
pub use events::{ErrorKind, RecognitionEvent, ResultBatch, ResultChunk};
pub use scripted::ScriptedCapability;
