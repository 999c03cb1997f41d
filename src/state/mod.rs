//! Cursor state persistence
//!
//! The extraction core reads per-partition cursors and never writes them;
//! cursor advancement happens here, driven by the engine after successful
//! emission. State is serialized to JSON and persisted between runs.

mod manager;
mod types;

pub use manager::StateManager;
pub use types::{PartitionState, State, StreamState};
