//! Tests for fields module

use super::*;
use pretty_assertions::assert_eq;

fn catalog(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

#[test]
fn test_every_chunk_has_forced_fields() {
    let chunker = FieldChunker::default();
    let chunks: Vec<_> = chunker.chunks().collect();
    assert!(!chunks.is_empty());

    for chunk in &chunks {
        assert!(chunk.fields().iter().any(|f| f == DATE_RANGE_FIELD));
        assert!(chunk.fields().iter().any(|f| f == PIVOT_VALUES_FIELD));
    }
}

#[test]
fn test_chunk_size_bound() {
    let chunker = FieldChunker::default();
    for chunk in chunker.chunks() {
        // Up to two forced extras beyond the configured size
        assert!(chunk.len() <= DEFAULT_CHUNK_SIZE + 2);
    }
}

#[test]
fn test_concatenation_reproduces_catalog_in_order() {
    let chunker = FieldChunker::default();
    let mut reproduced = Vec::new();

    for chunk in chunker.chunks() {
        let run_len = chunk
            .len()
            .min(DEFAULT_CHUNK_SIZE)
            .min(chunker.catalog().len() - reproduced.len());
        reproduced.extend_from_slice(&chunk.fields()[..run_len]);
    }

    assert_eq!(reproduced, chunker.catalog());
}

#[test]
fn test_forced_fields_not_duplicated() {
    // dateRange and pivotValues sit in the catalog; chunks already holding
    // them must not gain a second copy
    let chunker = FieldChunker::new(catalog(&["clicks", "dateRange", "pivotValues"]), 18);
    let chunks: Vec<_> = chunker.chunks().collect();

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].fields(), catalog(&["clicks", "dateRange", "pivotValues"]));
}

#[test]
fn test_final_run_may_be_shorter() {
    let chunker = FieldChunker::new(catalog(&["a", "b", "c", "d", "e"]), 2);
    let chunks: Vec<_> = chunker.chunks().collect();

    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0].fields(), catalog(&["a", "b", "dateRange", "pivotValues"]));
    assert_eq!(chunks[2].fields(), catalog(&["e", "dateRange", "pivotValues"]));
}

#[test]
fn test_chunks_are_restartable() {
    let chunker = FieldChunker::default();
    let first: Vec<_> = chunker.chunks().collect();
    let second: Vec<_> = chunker.chunks().collect();
    assert_eq!(first, second);
}

#[test]
fn test_to_param_joins_with_commas() {
    let chunker = FieldChunker::new(catalog(&["clicks", "impressions"]), 18);
    let chunk = chunker.chunks().next().unwrap();
    assert_eq!(chunk.to_param(), "clicks,impressions,dateRange,pivotValues");
}

#[test]
fn test_zero_chunk_size_clamped() {
    let chunker = FieldChunker::new(catalog(&["a", "b"]), 0);
    assert_eq!(chunker.chunk_size(), 1);
    assert_eq!(chunker.chunks().count(), 2);
}
