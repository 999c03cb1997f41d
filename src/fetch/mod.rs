//! Paginated fetch loop and merge-by-key
//!
//! For one partition slice, every chunked request is paged to completion
//! through the external fetcher collaborator, records are normalized, and
//! multi-chunk responses are unioned into one record per
//! (window end, pivot value) composite key.
//!
//! This module performs no retries: retryable failures propagate upward to
//! whatever retry policy wraps the fetcher.

mod reader;
mod types;

pub use reader::SliceReader;
pub use types::{FetchResponse, Fetcher, NormalizePolicy};
