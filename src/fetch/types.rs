//! Fetch collaborator types

use crate::error::Result;
use crate::types::{JsonValue, ValueMap};
use async_trait::async_trait;

/// One page of a reporting API response
#[derive(Debug, Clone, Default)]
pub struct FetchResponse {
    /// Extracted records from this page
    pub elements: Vec<JsonValue>,
    /// Token for the next page; absent when this is the last page
    pub next_page_token: Option<String>,
}

impl FetchResponse {
    /// Create a final page with no continuation
    pub fn last_page(elements: Vec<JsonValue>) -> Self {
        Self {
            elements,
            next_page_token: None,
        }
    }

    /// Create a page with a continuation token
    pub fn with_next(elements: Vec<JsonValue>, token: impl Into<String>) -> Self {
        Self {
            elements,
            next_page_token: Some(token.into()),
        }
    }
}

/// External HTTP collaborator executing one request.
///
/// Contract: idempotent per (params, page token) pair. Implementations
/// classify failures via [`crate::Error::is_retryable`]; retry policy lives
/// outside this crate.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Execute one request for the given parameter set and page token
    async fn fetch(&self, params: &ValueMap, page_token: Option<&str>) -> Result<FetchResponse>;
}

/// What to do when a record fails normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizePolicy {
    /// Propagate the error and abort the slice
    #[default]
    Abort,
    /// Drop the record with a warning and keep going
    Skip,
}
