//! Semi-incremental cursor filtering
//!
//! Endpoints that cannot filter or sort natively get incremental behavior
//! emulated client-side: records below the effective cutoff (the later of
//! the configured start date and the persisted per-partition cursor) are
//! dropped before emission. The boundary is inclusive; a record exactly at
//! the cutoff is re-emitted and downstream primary-key deduplication is
//! assumed.

use crate::config::SyncConfig;
use crate::types::{CursorFormat, JsonValue};
use chrono::NaiveDate;
use tracing::warn;

/// Filters records against the effective per-partition cutoff.
///
/// The persisted state store is read by the caller and handed in; this
/// filter never mutates state.
#[derive(Debug, Clone)]
pub struct CursorFilter {
    cursor_field: String,
    format: CursorFormat,
    start_date: Option<NaiveDate>,
}

/// A cursor value in its comparison domain
#[derive(Debug, Clone, PartialEq, PartialOrd)]
enum CursorValue {
    Text(String),
    Millis(i64),
}

impl CursorFilter {
    /// Create a filter with explicit parts
    pub fn new(
        cursor_field: impl Into<String>,
        format: CursorFormat,
        start_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            cursor_field: cursor_field.into(),
            format,
            start_date,
        }
    }

    /// Create a filter from a sync config
    pub fn from_config(config: &SyncConfig) -> Self {
        Self::new(
            config.cursor_field.clone(),
            config.cursor_format,
            Some(config.start_date),
        )
    }

    /// The configured cursor field name
    pub fn cursor_field(&self) -> &str {
        &self.cursor_field
    }

    /// Filter `records` for one partition.
    ///
    /// `persisted_cursor` is the last-synced cursor value for this partition
    /// from the state store, if any. With no start date and no persisted
    /// cursor, records pass through unchanged.
    ///
    /// Records missing the cursor field fail closed: they are dropped with a
    /// warning rather than crashing the sync or slipping past the cutoff.
    pub fn filter_records(
        &self,
        records: Vec<JsonValue>,
        persisted_cursor: Option<&str>,
        partition_id: &str,
    ) -> Vec<JsonValue> {
        let Some(cutoff) = self.effective_cutoff(persisted_cursor) else {
            return records;
        };

        records
            .into_iter()
            .filter(|record| match self.record_cursor(record) {
                Some(value) => value >= cutoff,
                None => {
                    warn!(
                        partition = partition_id,
                        field = self.cursor_field.as_str(),
                        "dropping record missing cursor field"
                    );
                    false
                }
            })
            .collect()
    }

    /// The later of the configured start date and the persisted cursor, in
    /// the configured comparison domain
    fn effective_cutoff(&self, persisted_cursor: Option<&str>) -> Option<CursorValue> {
        let start = self.start_date.map(|date| self.date_value(date));
        let persisted = persisted_cursor.and_then(|raw| self.parse_value(raw));

        match (start, persisted) {
            (Some(s), Some(p)) => Some(if p >= s { p } else { s }),
            (Some(s), None) => Some(s),
            (None, Some(p)) => Some(p),
            (None, None) => None,
        }
    }

    fn date_value(&self, date: NaiveDate) -> CursorValue {
        match self.format {
            CursorFormat::DateString => CursorValue::Text(date.format("%Y-%m-%d").to_string()),
            CursorFormat::Timestamp => {
                let millis = date
                    .and_hms_opt(0, 0, 0)
                    .map_or(0, |dt| dt.and_utc().timestamp_millis());
                CursorValue::Millis(millis)
            }
        }
    }

    fn parse_value(&self, raw: &str) -> Option<CursorValue> {
        match self.format {
            CursorFormat::DateString => Some(CursorValue::Text(raw.to_string())),
            CursorFormat::Timestamp => match raw.parse::<i64>() {
                Ok(millis) => Some(CursorValue::Millis(millis)),
                Err(_) => {
                    warn!(value = raw, "ignoring non-numeric persisted cursor");
                    None
                }
            },
        }
    }

    fn record_cursor(&self, record: &JsonValue) -> Option<CursorValue> {
        let value = record.get(&self.cursor_field)?;
        match self.format {
            CursorFormat::DateString => value.as_str().map(|s| CursorValue::Text(s.to_string())),
            CursorFormat::Timestamp => value
                .as_i64()
                .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
                .map(CursorValue::Millis),
        }
    }
}
