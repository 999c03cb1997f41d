//! Tests for engine module

use super::*;
use crate::fetch::FetchResponse;
use crate::types::ValueMap;
use async_trait::async_trait;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns the same page for every request
struct StubFetcher {
    elements: Vec<JsonValue>,
    calls: AtomicUsize,
}

impl StubFetcher {
    fn new(elements: Vec<JsonValue>) -> Self {
        Self {
            elements,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Fetcher for StubFetcher {
    async fn fetch(
        &self,
        _params: &ValueMap,
        _page_token: Option<&str>,
    ) -> Result<FetchResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(FetchResponse::last_page(self.elements.clone()))
    }
}

fn test_config() -> SyncConfig {
    SyncConfig {
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: Some(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()),
        ..SyncConfig::default()
    }
}

fn tiny_chunker() -> FieldChunker {
    FieldChunker::new(vec!["clicks".to_string()], 18)
}

#[tokio::test]
async fn test_sync_emits_records_and_state() {
    let fetcher = StubFetcher::new(vec![
        json!({"pivotValues": ["p1"], "lastModified": "2024-01-15T00:00:00Z", "clicks": 3}),
    ]);
    let mut engine = SyncEngine::new(fetcher, StateManager::in_memory(), test_config())
        .with_chunker(tiny_chunker());

    let messages = engine.sync_stream("ad_analytics").await.unwrap();

    // Two windows: 01-01..01-30 and 01-31..01-31
    let record_batches: Vec<_> = messages.iter().filter(|m| m.is_record()).collect();
    assert_eq!(record_batches.len(), 2);
    assert_eq!(messages.iter().filter(|m| m.is_state()).count(), 2);

    assert_eq!(engine.stats().partitions_synced, 2);
    assert_eq!(engine.stats().records_synced, 2);
    assert!(engine
        .state()
        .is_partition_completed("ad_analytics", "2024-01-01_2024-01-30")
        .await);
}

#[tokio::test]
async fn test_cursor_advanced_to_max_observed() {
    let fetcher = StubFetcher::new(vec![
        json!({"pivotValues": ["p1"], "lastModified": "2024-01-10T00:00:00Z"}),
        json!({"pivotValues": ["p2"], "lastModified": "2024-01-20T00:00:00Z"}),
    ]);
    let mut engine = SyncEngine::new(fetcher, StateManager::in_memory(), test_config())
        .with_chunker(tiny_chunker());

    engine.sync_stream("ad_analytics").await.unwrap();

    assert_eq!(
        engine
            .state()
            .get_partition_cursor("ad_analytics", "2024-01-01_2024-01-30")
            .await
            .as_deref(),
        Some("2024-01-20T00:00:00Z")
    );
}

#[tokio::test]
async fn test_second_run_skips_completed_partitions() {
    let fetcher = StubFetcher::new(vec![
        json!({"pivotValues": ["p1"], "lastModified": "2024-01-15T00:00:00Z"}),
    ]);
    let state = StateManager::in_memory();
    let mut engine =
        SyncEngine::new(fetcher, state, test_config()).with_chunker(tiny_chunker());

    engine.sync_stream("ad_analytics").await.unwrap();
    let calls_after_first = engine.fetcher.calls.load(Ordering::SeqCst);

    engine.sync_stream("ad_analytics").await.unwrap();
    assert_eq!(engine.fetcher.calls.load(Ordering::SeqCst), calls_after_first);
    assert_eq!(engine.stats().partitions_skipped, 2);
    assert_eq!(engine.stats().partitions_synced, 0);
}

#[tokio::test]
async fn test_records_before_start_date_filtered() {
    let fetcher = StubFetcher::new(vec![
        json!({"pivotValues": ["p1"], "lastModified": "2024-01-15T00:00:00Z"}),
        json!({"pivotValues": ["p2"], "lastModified": "2023-06-01T00:00:00Z"}),
    ]);
    let mut engine = SyncEngine::new(fetcher, StateManager::in_memory(), test_config())
        .with_chunker(tiny_chunker());

    engine.sync_stream("ad_analytics").await.unwrap();

    assert_eq!(engine.stats().records_synced, 2);
    assert_eq!(engine.stats().records_filtered, 2);
}

#[tokio::test]
async fn test_persisted_cursor_filters_on_resume() {
    let fetcher = StubFetcher::new(vec![
        json!({"pivotValues": ["p1"], "lastModified": "2024-01-05T00:00:00Z"}),
        json!({"pivotValues": ["p2"], "lastModified": "2024-01-25T00:00:00Z"}),
    ]);
    // Partition has a cursor but is not completed (e.g. a prior run died
    // between cursor advancement and completion)
    let state = StateManager::from_json(
        r#"{"streams":{"ad_analytics":{"partitions":{
            "2024-01-01_2024-01-30":{"cursor":"2024-01-20T00:00:00Z","completed":false}
        }}}}"#,
    )
    .unwrap();
    let mut engine =
        SyncEngine::new(fetcher, state, test_config()).with_chunker(tiny_chunker());

    let messages = engine.sync_stream("ad_analytics").await.unwrap();

    let first_batch = messages
        .iter()
        .find_map(|m| match m {
            Message::Record { records, .. } => Some(records),
            _ => None,
        })
        .unwrap();
    assert_eq!(first_batch.len(), 1);
    assert_eq!(first_batch[0]["pivotValues"], json!(["p2"]));
}

#[tokio::test]
async fn test_invalid_config_rejected_before_fetching() {
    let fetcher = StubFetcher::new(vec![]);
    let config = SyncConfig {
        chunk_size: 0,
        ..test_config()
    };
    let mut engine = SyncEngine::new(fetcher, StateManager::in_memory(), config);

    assert!(engine.sync_stream("ad_analytics").await.is_err());
    assert_eq!(engine.fetcher.calls.load(Ordering::SeqCst), 0);
}
