//! Tests for partition module

use super::*;
use crate::config::{CalendarStep, SyncConfig};
use crate::fields::FieldChunker;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn partitioner(start: NaiveDate, end: NaiveDate, step: CalendarStep) -> DateRangePartitioner {
    DateRangePartitioner::new(
        start,
        end,
        step,
        1,
        "%Y-%m-%d",
        "start_date",
        "end_date",
        FieldChunker::default(),
    )
}

#[test]
fn test_single_day_range_yields_one_slice() {
    let day = date(2024, 3, 15);
    let p = partitioner(day, day, CalendarStep::Days(30));
    let slices = p.partitions();

    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].window.start, day);
    assert_eq!(slices[0].window.end, day);
}

#[test]
fn test_windows_are_contiguous_and_non_overlapping() {
    let p = partitioner(date(2024, 1, 1), date(2024, 3, 20), CalendarStep::Days(30));
    let windows: Vec<_> = p.windows().collect();

    assert_eq!(windows.len(), 3);
    for pair in windows.windows(2) {
        assert_eq!(
            pair[1].start,
            pair[0].end.succ_opt().unwrap(),
            "windows must abut at day granularity"
        );
    }
}

#[test]
fn test_last_window_clamped_to_overall_end() {
    let end = date(2024, 3, 20);
    let p = partitioner(date(2024, 1, 1), end, CalendarStep::Days(30));
    let windows: Vec<_> = p.windows().collect();

    assert_eq!(windows.last().unwrap().end, end);
    for window in &windows {
        assert!(window.end <= end);
        assert!(window.start <= window.end);
    }
}

#[test]
fn test_month_step_windows() {
    let p = partitioner(date(2024, 1, 1), date(2024, 3, 31), CalendarStep::Months(1));
    let windows: Vec<_> = p.windows().collect();

    assert_eq!(windows.len(), 3);
    assert_eq!(windows[0].start, date(2024, 1, 1));
    assert_eq!(windows[0].end, date(2024, 1, 31));
    assert_eq!(windows[1].end, date(2024, 2, 29));
    assert_eq!(windows[2].end, date(2024, 3, 31));
}

#[test]
fn test_empty_range_yields_nothing() {
    let p = partitioner(date(2024, 3, 16), date(2024, 3, 15), CalendarStep::Days(30));
    assert_eq!(p.windows().count(), 0);
}

#[test]
fn test_out_of_range_step_clamps_final_window() {
    let end = NaiveDate::MAX;
    let p = partitioner(end, end, CalendarStep::Days(30));
    let windows: Vec<_> = p.windows().collect();

    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].end, end);
}

#[test]
fn test_slices_carry_one_request_per_chunk() {
    let p = partitioner(date(2024, 1, 1), date(2024, 1, 1), CalendarStep::Days(30));
    let chunk_count = FieldChunker::default().chunks().count();
    let slices = p.partitions();

    assert_eq!(slices[0].requests.len(), chunk_count);
}

#[test]
fn test_request_params_shape() {
    let p = partitioner(date(2024, 1, 1), date(2024, 3, 20), CalendarStep::Days(30));
    let slice = p.slices().next().unwrap();
    let request = &slice.requests[0];

    assert_eq!(request.get_str("start_date"), Some("2024-01-01"));
    assert_eq!(request.get_str("end_date"), Some("2024-01-30"));
    assert_eq!(request.get("start.day"), Some(&json!(1)));
    assert_eq!(request.get("start.month"), Some(&json!(1)));
    assert_eq!(request.get("start.year"), Some(&json!(2024)));
    assert_eq!(request.get("end.day"), Some(&json!(30)));
    assert_eq!(request.get("end.month"), Some(&json!(1)));
    assert_eq!(request.get("end.year"), Some(&json!(2024)));

    let fields = request.get_str("fields").unwrap();
    assert!(fields.contains("dateRange"));
    assert!(fields.contains("pivotValues"));
}

#[test]
fn test_slice_ids_are_stable() {
    let p = partitioner(date(2024, 1, 1), date(2024, 3, 20), CalendarStep::Days(30));
    let first: Vec<_> = p.slices().map(|s| s.id).collect();
    let second: Vec<_> = p.slices().map(|s| s.id).collect();

    assert_eq!(first, second);
    assert_eq!(first[0], "2024-01-01_2024-01-30");
}

#[test]
fn test_from_config() {
    let config = SyncConfig {
        start_date: date(2024, 1, 1),
        end_date: Some(date(2024, 2, 15)),
        ..SyncConfig::default()
    };
    let p = DateRangePartitioner::from_config(&config, FieldChunker::default()).unwrap();
    let windows: Vec<_> = p.windows().collect();

    assert_eq!(windows.len(), 2);
    assert_eq!(windows[1].end, date(2024, 2, 15));
}
