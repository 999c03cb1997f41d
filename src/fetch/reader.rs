//! Slice reader: page loop plus merge-by-key

use super::types::{Fetcher, NormalizePolicy};
use crate::error::Result;
use crate::normalize::RecordNormalizer;
use crate::partition::PartitionSlice;
use crate::types::{JsonObject, JsonValue};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Reads every record for one partition slice.
///
/// Chunk requests are issued sequentially in slice order; within a request,
/// pages are fetched until the API stops returning a next-page token.
/// Records from different chunks sharing a composite key are unioned
/// field-by-field, later chunks overwriting earlier ones.
pub struct SliceReader<'a, F: Fetcher + ?Sized> {
    fetcher: &'a F,
    normalizer: RecordNormalizer,
    policy: NormalizePolicy,
}

impl<'a, F: Fetcher + ?Sized> SliceReader<'a, F> {
    /// Create a reader over the given fetcher
    pub fn new(fetcher: &'a F, normalizer: RecordNormalizer) -> Self {
        Self {
            fetcher,
            normalizer,
            policy: NormalizePolicy::default(),
        }
    }

    /// Set the normalization failure policy
    #[must_use]
    pub fn with_policy(mut self, policy: NormalizePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Fetch, normalize and merge all records for `slice`.
    ///
    /// Returned records preserve first-seen key order, so output is
    /// deterministic for a deterministic fetcher.
    pub async fn read_slice(&self, slice: &PartitionSlice) -> Result<Vec<JsonValue>> {
        let window_end = slice.window.end.format("%Y-%m-%d").to_string();
        let mut merged: HashMap<String, JsonObject> = HashMap::new();
        let mut key_order: Vec<String> = Vec::new();

        for request in &slice.requests {
            let mut page_token: Option<String> = None;
            let mut pages = 0_u32;

            // Page until the response carries no next-page token
            loop {
                let response = self
                    .fetcher
                    .fetch(&request.params, page_token.as_deref())
                    .await?;
                pages += 1;

                for raw in response.elements {
                    let record = match self.normalizer.normalize(raw) {
                        Ok(record) => record,
                        Err(err) => match self.policy {
                            NormalizePolicy::Abort => return Err(err),
                            NormalizePolicy::Skip => {
                                warn!(slice = slice.id.as_str(), error = %err, "skipping record");
                                continue;
                            }
                        },
                    };

                    let Value::Object(fields) = record else {
                        warn!(slice = slice.id.as_str(), "skipping non-object record");
                        continue;
                    };

                    let key = composite_key(&window_end, &fields);
                    let entry = merged.entry(key.clone()).or_insert_with(|| {
                        key_order.push(key);
                        JsonObject::new()
                    });
                    // Last write wins per field, in chunk iteration order
                    for (name, value) in fields {
                        entry.insert(name, value);
                    }
                }

                match response.next_page_token {
                    Some(token) if !token.is_empty() => page_token = Some(token),
                    _ => break,
                }
            }

            debug!(slice = slice.id.as_str(), pages, "chunk request complete");
        }

        Ok(key_order
            .into_iter()
            .filter_map(|key| merged.remove(&key).map(Value::Object))
            .collect())
    }
}

/// Composite identity of one analytics row: window end date plus the pivot
/// dimension values
fn composite_key(window_end: &str, record: &JsonObject) -> String {
    let pivot = record
        .get("pivotValues")
        .map_or_else(|| "null".to_string(), ToString::to_string);
    format!("{window_end}-{pivot}")
}
