//! Plan command implementation.
//!
//! This module prints the window plan for a date range without issuing any
//! requests, so the request count can be inspected before a long download.

use crate::commands::parse_hour_arg;
use anyhow::Result;
use chrono::TimeDelta;
use gridpull_lib::prelude::*;

/// Show the boundaries and fetch windows for a range.
pub(crate) fn show_plan(start_str: &str, end_str: Option<&str>, max_window_hours: i64) -> Result<()> {
    let first = parse_hour_arg(start_str)?;
    let last = match end_str {
        Some(s) => parse_hour_arg(s)?,
        None => chrono::Utc::now(),
    };
    let range = HourRange::new(first, last)?;
    let windows = range.windows(TimeDelta::hours(max_window_hours));

    println!("Range:   {} ({} hours)", range, range.total_hours());
    println!(
        "Windows: {} (max {} hours each)\n",
        windows.len(),
        max_window_hours
    );

    println!("{:<8} {:<16} {:<16} {:>8}", "WINDOW", "START", "END", "HOURS");
    println!("{}", "-".repeat(52));
    for (i, window) in windows.iter().enumerate() {
        println!(
            "{:<8} {:<16} {:<16} {:>8}",
            i + 1,
            window.start.format("%Y-%m-%dT%H"),
            window.end.format("%Y-%m-%dT%H"),
            window.hours(),
        );
    }

    Ok(())
}
