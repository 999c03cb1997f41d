//! Record normalization
//!
//! Reporting endpoints emit date-time fields in whatever shape the upstream
//! system stored them. The normalizer rewrites a configured set of fields to
//! canonical RFC3339 so downstream consumers compare and sort uniformly.

use crate::config::SyncConfig;
use crate::error::{Error, Result};
use crate::types::JsonValue;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Rewrites configured date-time fields to RFC3339.
///
/// Pure per-record transform: fields absent, null or empty are left
/// untouched; an unparseable value fails with `RecordNormalization` naming
/// the field and raw value, and the caller decides whether that skips the
/// record or aborts the sync.
#[derive(Debug, Clone)]
pub struct RecordNormalizer {
    fields: Vec<String>,
}

impl Default for RecordNormalizer {
    fn default() -> Self {
        Self::new(vec!["lastModified".to_string(), "created".to_string()])
    }
}

impl RecordNormalizer {
    /// Create a normalizer for the given field names
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Create a normalizer from a sync config
    pub fn from_config(config: &SyncConfig) -> Self {
        Self::new(config.datetime_fields.clone())
    }

    /// Normalize one record, returning a new record
    pub fn normalize(&self, mut record: JsonValue) -> Result<JsonValue> {
        let Some(map) = record.as_object_mut() else {
            return Ok(record);
        };

        for field in &self.fields {
            let Some(value) = map.get(field) else {
                continue;
            };
            match value {
                Value::Null => {}
                Value::String(s) if s.is_empty() => {}
                Value::String(s) => {
                    let canonical = parse_datetime(s)
                        .ok_or_else(|| Error::normalization(field, s.clone()))?
                        .to_rfc3339_opts(SecondsFormat::AutoSi, true);
                    map.insert(field.clone(), Value::String(canonical));
                }
                other => {
                    return Err(Error::normalization(field, other.to_string()));
                }
            }
        }

        Ok(record)
    }
}

/// Parse a date-time string permissively into UTC
fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let datetime_formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
    ];
    for fmt in datetime_formats {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(DateTime::from_naive_utc_and_offset(ndt, Utc));
        }
    }

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d"];
    for fmt in date_formats {
        if let Ok(nd) = NaiveDate::parse_from_str(s, fmt) {
            let ndt = nd.and_hms_opt(0, 0, 0)?;
            return Some(DateTime::from_naive_utc_and_offset(ndt, Utc));
        }
    }

    None
}
