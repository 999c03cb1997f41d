//! Sync configuration surface
//!
//! Everything the extraction core consumes is injected through [`SyncConfig`];
//! there is no process-wide state. Configs are loadable from YAML or JSON.

use crate::error::{Error, Result};
use chrono::{Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::types::CursorFormat;

/// Configuration for one sync of an analytics stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Inclusive start of the overall date range
    pub start_date: NaiveDate,

    /// Inclusive end of the overall date range; defaults to today (UTC)
    #[serde(default)]
    pub end_date: Option<NaiveDate>,

    /// Field used to decide which records are new relative to a previous sync
    #[serde(default = "default_cursor_field")]
    pub cursor_field: String,

    /// How cursor values are compared
    #[serde(default)]
    pub cursor_format: CursorFormat,

    /// Maximum number of catalog fields per chunked request
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Calendar step per partition window (e.g. "30d", "4w", "1mo")
    #[serde(default = "default_step")]
    pub step: String,

    /// Smallest time unit separating adjacent windows (e.g. "1d")
    #[serde(default = "default_granularity")]
    pub granularity: String,

    /// strftime format for window boundary values
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Request parameter name carrying the window start
    #[serde(default = "default_start_param")]
    pub start_param: String,

    /// Request parameter name carrying the window end
    #[serde(default = "default_end_param")]
    pub end_param: String,

    /// Record fields rewritten to RFC3339 by the normalizer
    #[serde(default = "default_datetime_fields")]
    pub datetime_fields: Vec<String>,
}

fn default_cursor_field() -> String {
    "lastModified".to_string()
}

fn default_chunk_size() -> usize {
    18
}

fn default_step() -> String {
    "30d".to_string()
}

fn default_granularity() -> String {
    "1d".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_start_param() -> String {
    "start_date".to_string()
}

fn default_end_param() -> String {
    "end_date".to_string()
}

fn default_datetime_fields() -> Vec<String> {
    vec!["lastModified".to_string(), "created".to_string()]
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap_or_default(),
            end_date: None,
            cursor_field: default_cursor_field(),
            cursor_format: CursorFormat::default(),
            chunk_size: default_chunk_size(),
            step: default_step(),
            granularity: default_granularity(),
            date_format: default_date_format(),
            start_param: default_start_param(),
            end_param: default_end_param(),
            datetime_fields: default_datetime_fields(),
        }
    }
}

impl SyncConfig {
    /// Load a config from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate invariants that serde defaults cannot express
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(Error::InvalidConfigValue {
                field: "chunk_size".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(Error::InvalidConfigValue {
                    field: "end_date".to_string(),
                    message: format!("{end} is before start_date {}", self.start_date),
                });
            }
        }
        // Fail on malformed durations at load time, not mid-sync
        self.parsed_step()?;
        self.granularity_days()?;
        Ok(())
    }

    /// Effective end of the range: configured end or today (UTC)
    pub fn effective_end_date(&self) -> NaiveDate {
        self.end_date.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Parse the configured step into a calendar step
    pub fn parsed_step(&self) -> Result<CalendarStep> {
        CalendarStep::parse(&self.step)
    }

    /// Parse the configured granularity into whole days
    pub fn granularity_days(&self) -> Result<i64> {
        match CalendarStep::parse(&self.granularity)? {
            CalendarStep::Days(d) => Ok(d),
            CalendarStep::Weeks(w) => Ok(w * 7),
            CalendarStep::Months(_) => Err(Error::InvalidConfigValue {
                field: "granularity".to_string(),
                message: "month granularity is not supported; use days".to_string(),
            }),
        }
    }
}

// ============================================================================
// Calendar Step
// ============================================================================

/// A calendar duration used to advance partition windows.
///
/// Month steps are calendar-aware (not a fixed number of days), matching
/// reporting APIs that partition by billing month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarStep {
    Days(i64),
    Weeks(i64),
    Months(u32),
}

impl CalendarStep {
    /// Parse a step string like "30d", "4w", "1mo". A bare number means days.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        let (num_str, suffix) = if let Some(stripped) = s.strip_suffix("mo") {
            (stripped, "mo")
        } else if let Some(stripped) = s.strip_suffix('d') {
            (stripped, "d")
        } else if let Some(stripped) = s.strip_suffix('w') {
            (stripped, "w")
        } else {
            (s, "d")
        };

        let num: i64 = num_str
            .parse()
            .map_err(|_| Error::config(format!("Invalid duration number: {num_str}")))?;
        if num <= 0 {
            return Err(Error::config(format!("Duration must be positive: {s}")));
        }

        match suffix {
            "mo" => Ok(Self::Months(num as u32)),
            "w" => Ok(Self::Weeks(num)),
            _ => Ok(Self::Days(num)),
        }
    }

    /// Advance a date by this step, if the result is representable
    pub fn advance(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Days(d) => date.checked_add_signed(chrono::Duration::days(*d)),
            Self::Weeks(w) => date.checked_add_signed(chrono::Duration::weeks(*w)),
            Self::Months(m) => date.checked_add_months(Months::new(*m)),
        }
    }
}
