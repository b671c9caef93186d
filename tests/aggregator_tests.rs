// Unit tests for transcript aggregation
//
// These tests verify the append-only final transcript, the
// replace-per-batch interim transcript, and the defensive handling of
// redelivered chunk indices.

use live_caption::{ResultBatch, ResultChunk, TranscriptAggregator};

fn chunk(text: &str, is_final: bool) -> ResultChunk {
    ResultChunk {
        text: text.to_string(),
        is_final,
    }
}

fn batch(start_index: usize, chunks: Vec<ResultChunk>) -> ResultBatch {
    ResultBatch {
        start_index,
        chunks,
    }
}

#[test]
fn test_final_chunks_append_in_index_order() {
    let mut agg = TranscriptAggregator::new();

    agg.on_result_batch(&batch(0, vec![chunk("one ", true)]));
    agg.on_result_batch(&batch(1, vec![chunk("two ", true)]));
    agg.on_result_batch(&batch(2, vec![chunk("three", true)]));

    assert_eq!(agg.final_text(), "one two three");
    assert_eq!(agg.interim_text(), "");
    assert_eq!(agg.chunks_finalized(), 3);
}

#[test]
fn test_final_text_is_monotonic_across_batches() {
    let mut agg = TranscriptAggregator::new();

    let batches = vec![
        batch(0, vec![chunk("a", true)]),
        batch(1, vec![chunk("bb", false)]),
        batch(1, vec![chunk("bb", true), chunk("c", false)]),
        batch(2, vec![]),
        batch(2, vec![chunk("cc", true)]),
    ];

    let mut previous_len = 0;
    for b in &batches {
        agg.on_result_batch(b);
        let current = agg.final_text().to_string();
        assert!(current.len() >= previous_len, "final text shrank");
        previous_len = current.len();
    }

    assert_eq!(agg.final_text(), "abbcc");
}

#[test]
fn test_interim_is_replaced_not_appended() {
    let mut agg = TranscriptAggregator::new();

    agg.on_result_batch(&batch(0, vec![chunk("hel", false)]));
    assert_eq!(agg.interim_text(), "hel");

    agg.on_result_batch(&batch(0, vec![chunk("hello", false)]));
    assert_eq!(agg.interim_text(), "hello");

    // Interim may shrink between batches
    agg.on_result_batch(&batch(0, vec![chunk("he", false)]));
    assert_eq!(agg.interim_text(), "he");

    assert_eq!(agg.final_text(), "");
}

#[test]
fn test_interim_concatenates_multiple_nonfinal_chunks() {
    let mut agg = TranscriptAggregator::new();

    agg.on_result_batch(&batch(
        0,
        vec![chunk("first ", false), chunk("second", false)],
    ));

    assert_eq!(agg.interim_text(), "first second");
}

#[test]
fn test_mixed_batch_splits_final_and_interim() {
    let mut agg = TranscriptAggregator::new();

    agg.on_result_batch(&batch(
        0,
        vec![chunk("done. ", true), chunk("in progress", false)],
    ));

    assert_eq!(agg.final_text(), "done. ");
    assert_eq!(agg.interim_text(), "in progress");
}

#[test]
fn test_empty_batch_clears_interim() {
    let mut agg = TranscriptAggregator::new();

    agg.on_result_batch(&batch(0, vec![chunk("provisional", false)]));
    assert_eq!(agg.interim_text(), "provisional");

    agg.on_result_batch(&batch(1, vec![]));
    assert_eq!(agg.interim_text(), "");
}

#[test]
fn test_already_finalized_index_is_skipped_on_redelivery() {
    let mut agg = TranscriptAggregator::new();

    agg.on_result_batch(&batch(0, vec![chunk("fixed. ", true)]));
    assert_eq!(agg.final_text(), "fixed. ");

    // A redelivering capability repeats index 0; it must not be
    // appended again, as final or as interim.
    agg.on_result_batch(&batch(0, vec![chunk("fixed. ", true), chunk("next", false)]));

    assert_eq!(agg.final_text(), "fixed. ");
    assert_eq!(agg.interim_text(), "next");
    assert_eq!(agg.chunks_finalized(), 1);
}

#[test]
fn test_interim_upgrade_to_final() {
    // Scenario from the host capability's documented behavior: a
    // provisional Japanese prefix upgraded to a finalized phrase.
    let mut agg = TranscriptAggregator::new();

    agg.on_result_batch(&batch(0, vec![chunk("こん", false)]));
    assert_eq!(agg.final_text(), "");
    assert_eq!(agg.interim_text(), "こん");

    agg.on_result_batch(&batch(0, vec![chunk("こんにちは", true)]));
    assert_eq!(agg.final_text(), "こんにちは");
    assert_eq!(agg.interim_text(), "");
}

#[test]
fn test_reset_behaves_like_fresh_aggregator() {
    let mut used = TranscriptAggregator::new();
    used.on_result_batch(&batch(0, vec![chunk("old. ", true), chunk("stale", false)]));
    used.reset();

    let mut fresh = TranscriptAggregator::new();

    let b = batch(0, vec![chunk("new. ", true), chunk("typing", false)]);
    used.on_result_batch(&b);
    fresh.on_result_batch(&b);

    assert_eq!(used.final_text(), fresh.final_text());
    assert_eq!(used.interim_text(), fresh.interim_text());
    assert_eq!(used.chunks_finalized(), fresh.chunks_finalized());
}

#[test]
fn test_clear_interim_preserves_final_text() {
    let mut agg = TranscriptAggregator::new();

    agg.on_result_batch(&batch(0, vec![chunk("kept. ", true), chunk("dropped", false)]));
    agg.clear_interim();

    assert_eq!(agg.final_text(), "kept. ");
    assert_eq!(agg.interim_text(), "");
}

#[test]
fn test_result_chunk_wire_shape() {
    // Host bridges deliver chunks as JSON with a "final" flag.
    let parsed: ResultChunk = serde_json::from_str(r#"{"text":"hello","final":true}"#).unwrap();

    assert_eq!(parsed, chunk("hello", true));

    let batch: ResultBatch =
        serde_json::from_str(r#"{"start_index":2,"chunks":[{"text":"hi","final":false}]}"#)
            .unwrap();

    assert_eq!(batch.start_index, 2);
    assert_eq!(batch.chunks.len(), 1);
    assert!(!batch.chunks[0].is_final);
}
