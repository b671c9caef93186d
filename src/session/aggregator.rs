use crate::recognition::ResultBatch;

/// Folds indexed recognition chunks into the displayable transcript pair
///
/// Finalized chunks are a closed fact: they are appended to `final_text`
/// exactly once, in index order, and never revisited. Interim chunks are
/// provisional: the capability redelivers the complete set of currently
/// non-final chunks on every batch, so `interim_text` is replaced
/// wholesale per batch. Treating interim text as append-only would
/// duplicate it.
#[derive(Debug, Default)]
pub struct TranscriptAggregator {
    final_text: String,
    interim_text: String,

    /// First chunk index not yet finalized. Chunks below this are
    /// skipped, which tolerates a capability that redelivers an
    /// already-finalized index.
    next_index: usize,
}

impl TranscriptAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear both transcripts; invoked on every session start
    pub fn reset(&mut self) {
        self.final_text.clear();
        self.interim_text.clear();
        self.next_index = 0;
    }

    /// Fold one result batch into the transcript pair
    pub fn on_result_batch(&mut self, batch: &ResultBatch) {
        let mut interim = String::new();

        for (index, chunk) in batch.indexed_chunks() {
            // Already finalized; a later event may not reuse the index.
            if index < self.next_index {
                continue;
            }

            if chunk.is_final {
                self.final_text.push_str(&chunk.text);
                self.next_index = index + 1;
            } else {
                interim.push_str(&chunk.text);
            }
        }

        // Full replacement. An empty batch legitimately clears interim
        // text whose chunks have since been finalized.
        self.interim_text = interim;
    }

    /// Drop provisional text, keeping everything already finalized;
    /// invoked when a session ends or errors out
    pub fn clear_interim(&mut self) {
        self.interim_text.clear();
    }

    /// Stable finalized transcript, append-only across a session
    pub fn final_text(&self) -> &str {
        &self.final_text
    }

    /// Volatile in-progress transcript; may shrink, grow, or vanish
    /// between batches
    pub fn interim_text(&self) -> &str {
        &self.interim_text
    }

    /// Number of chunk indices finalized so far
    pub fn chunks_finalized(&self) -> usize {
        self.next_index
    }
}
