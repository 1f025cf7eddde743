//! CLI command implementations.

pub(crate) mod download;
pub(crate) mod info;
pub(crate) mod plan;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Parses a CLI date argument as either `YYYY-MM-DD` or `YYYY-MM-DDTHH`.
///
/// A bare date maps to midnight of that day.
pub(crate) fn parse_hour_arg(s: &str) -> Result<DateTime<Utc>> {
    let naive = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.and_hms_opt(0, 0, 0).expect("valid time"))
        .or_else(|_| NaiveDateTime::parse_from_str(&format!("{s}:00:00"), "%Y-%m-%dT%H:%M:%S"))
        .with_context(|| format!("Invalid date: {s} (expected YYYY-MM-DD or YYYY-MM-DDTHH)"))?;
    Ok(Utc.from_utc_datetime(&naive))
}
