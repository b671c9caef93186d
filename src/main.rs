use anyhow::Result;
use live_caption::{
    Config, RecognitionCapabilityFactory, RecognitionEvent, RecognitionSource, ResultBatch,
    ResultChunk, SessionConfig, SessionController, SessionNotification,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cfg = Config::load("config/live-caption")?;

    info!("Live Caption v0.1.0");
    info!("Loaded config: {}", cfg.service.name);
    info!("Recognition language: {}", cfg.recognition.language);

    let session_config = SessionConfig {
        language: cfg.recognition.language.clone(),
        continuous: cfg.recognition.continuous,
        interim_results: cfg.recognition.interim_results,
        max_alternatives: cfg.recognition.max_alternatives,
        ..SessionConfig::default()
    };

    // No host speech engine is linked in this build; fall back to a
    // scripted session so the caption surface can be exercised end to
    // end.
    let capability = match RecognitionCapabilityFactory::create(RecognitionSource::Host) {
        Ok(capability) => capability,
        Err(kind) => {
            info!("Host capability unavailable ({}); running scripted demo", kind);
            RecognitionCapabilityFactory::create(RecognitionSource::Scripted(demo_script()))
                .map_err(anyhow::Error::from)?
        }
    };

    let (controller, mut notifications) = SessionController::new(session_config, capability);

    controller.start().await?;

    while let Some(notification) = notifications.recv().await {
        match notification {
            SessionNotification::Started => {
                info!("Session started");
            }
            SessionNotification::Transcript(snapshot) => {
                if snapshot.interim_text.is_empty() {
                    println!("\n{}", snapshot.final_text);
                } else {
                    print!("\r{}{}", snapshot.final_text, snapshot.interim_text);
                    std::io::Write::flush(&mut std::io::stdout()).ok();
                }
            }
            SessionNotification::Error(kind) => {
                eprintln!("\nsession error: {}", kind);
                break;
            }
            SessionNotification::Ended => {
                info!("Session ended");
                break;
            }
        }
    }

    controller.join().await;

    let stats = controller.stats().await;
    info!(
        "Processed {} batches, finalized {} chunks in {:.1}s",
        stats.batches_processed, stats.chunks_finalized, stats.duration_secs
    );

    Ok(())
}

/// A short interim-then-final sequence, the shape a host engine would
/// deliver for two spoken phrases
fn demo_script() -> Vec<RecognitionEvent> {
    vec![
        RecognitionEvent::Results(ResultBatch {
            start_index: 0,
            chunks: vec![ResultChunk {
                text: "hello".to_string(),
                is_final: false,
            }],
        }),
        RecognitionEvent::Results(ResultBatch {
            start_index: 0,
            chunks: vec![ResultChunk {
                text: "hello world".to_string(),
                is_final: false,
            }],
        }),
        RecognitionEvent::Results(ResultBatch {
            start_index: 0,
            chunks: vec![ResultChunk {
                text: "hello world. ".to_string(),
                is_final: true,
            }],
        }),
        RecognitionEvent::Results(ResultBatch {
            start_index: 1,
            chunks: vec![ResultChunk {
                text: "this is live".to_string(),
                is_final: false,
            }],
        }),
        RecognitionEvent::Results(ResultBatch {
            start_index: 1,
            chunks: vec![ResultChunk {
                text: "this is live captioning.".to_string(),
                is_final: true,
            }],
        }),
    ]
}
