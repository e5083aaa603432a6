//! Folds provider monthly rollups into a [`HistoricalSeries`].
//!
//! Month label precedence: `period.datetimeFrom.utc`, then
//! `coverage.datetimeFrom.utc`. A record with neither is skipped.
//! Average precedence: `summary.avg`, then the record's bare `value`.
//! `summary.min`, `summary.max` and `coverage.observedCount` have no fallback and
//! are required once a record has a label.

use crate::api::error::FetchError;
use crate::api::types::{MonthlyRecord, Timestamp};
use crate::series::summary::{HistoricalSeries, MonthlySummary};
use log::warn;
use std::collections::BTreeMap;

const MONTH_LABEL_LEN: usize = "YYYY-MM".len();

/// Builds the month-ordered series. When several records share a month the
/// last one wins.
pub fn aggregate(records: &[MonthlyRecord]) -> Result<HistoricalSeries, FetchError> {
    // `YYYY-MM` is fixed width, so lexical key order is chronological.
    let mut monthly: BTreeMap<String, MonthlySummary> = BTreeMap::new();

    for (index, record) in records.iter().enumerate() {
        let Some(month) = month_label(record) else {
            warn!("Skipping monthly record #{} without a period timestamp", index);
            continue;
        };
        let summary = summarize(record, month)?;
        monthly.insert(summary.month.clone(), summary);
    }

    Ok(HistoricalSeries::from_sorted(monthly.into_values().collect()))
}

fn month_label(record: &MonthlyRecord) -> Option<&str> {
    let period_from = record
        .period
        .as_ref()
        .and_then(|p| utc_text(p.datetime_from.as_ref()));
    let coverage_from = || {
        record
            .coverage
            .as_ref()
            .and_then(|c| utc_text(c.datetime_from.as_ref()))
    };
    let utc = period_from.or_else(coverage_from)?;
    Some(utc.get(..MONTH_LABEL_LEN).unwrap_or(utc))
}

fn utc_text(timestamp: Option<&Timestamp>) -> Option<&str> {
    timestamp
        .and_then(|t| t.utc.as_deref())
        .filter(|s| !s.is_empty())
}

fn summarize(record: &MonthlyRecord, month: &str) -> Result<MonthlySummary, FetchError> {
    let missing = |field: &'static str| FetchError::MalformedRecord {
        month: month.to_string(),
        field,
    };
    let summary = record.summary.as_ref();

    let average = summary
        .and_then(|s| s.avg)
        .or(record.value)
        .ok_or_else(|| missing("summary.avg"))?;
    let minimum = summary
        .and_then(|s| s.min)
        .ok_or_else(|| missing("summary.min"))?;
    let peak = summary
        .and_then(|s| s.max)
        .ok_or_else(|| missing("summary.max"))?;
    let count = record
        .coverage
        .as_ref()
        .and_then(|c| c.observed_count)
        .ok_or_else(|| missing("coverage.observedCount"))?;

    Ok(MonthlySummary {
        month: month.to_string(),
        average: truncate(average),
        peak: truncate(peak),
        minimum: truncate(minimum),
        count: truncate(count),
    })
}

// Toward zero, saturating at the i64 bounds.
fn truncate(value: f64) -> i64 {
    value.trunc() as i64
}
