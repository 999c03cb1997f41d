//! # Pivotstream
//!
//! A Rust-native core for incremental, paginated extraction of
//! time-partitioned analytics data from rate-limited, field-constrained
//! REST reporting APIs.
//!
//! ## Features
//!
//! - **Date Range Partitioning**: Walk a date interval in calendar steps,
//!   one independently-fetchable slice per window
//! - **Field Chunking**: Split a large metric-field catalog into bounded
//!   request groups for APIs with field-count limits
//! - **Semi-Incremental Sync**: Client-side cursor filtering for endpoints
//!   that cannot filter or sort natively
//! - **Merge-by-Key**: Union multi-chunk responses into one record per
//!   (window end, pivot value) composite key
//! - **Record Normalization**: Rewrite date-time fields to canonical RFC3339
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pivotstream::{Result, SyncConfig, SyncEngine};
//! use pivotstream::http::ReportClient;
//! use pivotstream::state::StateManager;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = SyncConfig::from_yaml(yaml)?;
//!     let client = ReportClient::builder("https://api.example.com")
//!         .path("/rest/adAnalytics")
//!         .build()?;
//!     let state = StateManager::from_file("state.json")?;
//!
//!     let mut engine = SyncEngine::new(client, state, config);
//!     for msg in engine.sync_stream("ad_analytics").await? {
//!         // Process record / state / log messages
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         SyncEngine                          │
//! │  partition windows → chunked requests → merged records      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌───────────┬───────────┬────┴──────┬───────────┬────────────┐
//! │ Partition │  Fields   │   Fetch   │  Cursor   │ Normalize  │
//! ├───────────┼───────────┼───────────┼───────────┼────────────┤
//! │ DateWindow│ Chunker   │ Page loop │ Cutoff    │ RFC3339    │
//! │ Slices    │ Catalog   │ Merge-key │ Filter    │ rewrite    │
//! └───────────┴───────────┴───────────┴───────────┴────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Sync configuration surface
pub mod config;

/// Schema merging and JSON Schema shaping
pub mod schema;

/// Reportable-field catalog and chunking
pub mod fields;

/// Date range partitioning
pub mod partition;

/// Semi-incremental cursor filtering
pub mod cursor;

/// Record normalization (date-time canonicalization)
pub mod normalize;

/// Paginated fetch loop and merge-by-key
pub mod fetch;

/// HTTP fetcher adapter
pub mod http;

/// Cursor state persistence
pub mod state;

/// Main execution engine
pub mod engine;

pub use config::SyncConfig;
pub use engine::{Message, SyncEngine, SyncStats};
pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
