//! HTTP fetcher adapter
//!
//! A thin `reqwest`-based implementation of the [`crate::fetch::Fetcher`]
//! collaborator. It builds one GET per (params, page token) pair, classifies
//! failures as retryable or fatal, and extracts the elements array and
//! next-page token from the response body. It performs no retries and no
//! backoff; that policy belongs to the caller wrapping the fetch.

mod client;

pub use client::{extract_json_path, ReportClient, ReportClientBuilder};
