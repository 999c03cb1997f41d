//! Date range partitioner implementation

use super::types::{ChunkRequest, DateWindow, PartitionSlice};
use crate::config::{CalendarStep, SyncConfig};
use crate::error::Result;
use crate::fields::{FieldChunk, FieldChunker};
use crate::types::ValueMap;
use chrono::{Datelike, Duration, NaiveDate};
use serde_json::json;

/// Produces partition slices over a date interval.
///
/// The produced sequence is lazy, finite and restartable: iterating twice
/// over the same partitioner yields identical slices.
#[derive(Debug, Clone)]
pub struct DateRangePartitioner {
    start: NaiveDate,
    end: NaiveDate,
    step: CalendarStep,
    granularity: Duration,
    format: String,
    start_param: String,
    end_param: String,
    chunker: FieldChunker,
}

impl DateRangePartitioner {
    /// Create a partitioner from explicit parts
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        step: CalendarStep,
        granularity_days: i64,
        format: impl Into<String>,
        start_param: impl Into<String>,
        end_param: impl Into<String>,
        chunker: FieldChunker,
    ) -> Self {
        Self {
            start,
            end,
            step,
            granularity: Duration::days(granularity_days.max(1)),
            format: format.into(),
            start_param: start_param.into(),
            end_param: end_param.into(),
            chunker,
        }
    }

    /// Create a partitioner from a sync config
    pub fn from_config(config: &SyncConfig, chunker: FieldChunker) -> Result<Self> {
        Ok(Self::new(
            config.start_date,
            config.effective_end_date(),
            config.parsed_step()?,
            config.granularity_days()?,
            config.date_format.clone(),
            config.start_param.clone(),
            config.end_param.clone(),
            chunker,
        ))
    }

    /// Lazily walk the date windows.
    ///
    /// A step that would advance past the representable date range clamps
    /// the final window to the overall end instead of producing an
    /// undefined date.
    pub fn windows(&self) -> WindowIter {
        WindowIter {
            current: (self.start <= self.end).then_some(self.start),
            end: self.end,
            step: self.step,
            granularity: self.granularity,
        }
    }

    /// Lazily produce one slice per window, each carrying every chunked
    /// request parameter set
    pub fn slices(&self) -> impl Iterator<Item = PartitionSlice> + '_ {
        self.windows().map(|window| self.build_slice(window))
    }

    /// Collect all slices (convenience for callers that want the count)
    pub fn partitions(&self) -> Vec<PartitionSlice> {
        self.slices().collect()
    }

    fn build_slice(&self, window: DateWindow) -> PartitionSlice {
        let start_str = self.format_date(window.start);
        let end_str = self.format_date(window.end);

        let requests = self
            .chunker
            .chunks()
            .map(|chunk| self.build_request(window, &chunk, &start_str, &end_str))
            .collect();

        PartitionSlice {
            id: format!("{start_str}_{end_str}"),
            window,
            requests,
        }
    }

    fn build_request(
        &self,
        window: DateWindow,
        chunk: &FieldChunk,
        start_str: &str,
        end_str: &str,
    ) -> ChunkRequest {
        let mut params = ValueMap::new();
        params.insert(self.start_param.clone(), json!(start_str));
        params.insert(self.end_param.clone(), json!(end_str));
        params.insert("fields".to_string(), json!(chunk.to_param()));

        // Decomposed boundary fields the reporting API wants as numbers
        params.insert("start.day".to_string(), json!(window.start.day()));
        params.insert("start.month".to_string(), json!(window.start.month()));
        params.insert("start.year".to_string(), json!(window.start.year()));
        params.insert("end.day".to_string(), json!(window.end.day()));
        params.insert("end.month".to_string(), json!(window.end.month()));
        params.insert("end.year".to_string(), json!(window.end.year()));

        ChunkRequest { params }
    }

    fn format_date(&self, date: NaiveDate) -> String {
        date.format(&self.format).to_string()
    }
}

/// Iterator over contiguous, non-overlapping date windows
#[derive(Debug, Clone)]
pub struct WindowIter {
    current: Option<NaiveDate>,
    end: NaiveDate,
    step: CalendarStep,
    granularity: Duration,
}

impl Iterator for WindowIter {
    type Item = DateWindow;

    fn next(&mut self) -> Option<DateWindow> {
        let start = self.current?;

        let next_start = self.step.advance(start);
        let window_end = match next_start {
            Some(ns) => ns
                .checked_sub_signed(self.granularity)
                .map_or(self.end, |e| e.min(self.end)),
            // Out-of-range step: clamp the final window
            None => self.end,
        };

        self.current = next_start.filter(|ns| *ns <= self.end);

        Some(DateWindow {
            start,
            end: window_end,
        })
    }
}
