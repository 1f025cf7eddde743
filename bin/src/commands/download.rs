//! Download command implementation.
//!
//! This module handles downloading hourly load data from the EIA API and
//! writing it to the chosen output format.

use crate::commands::parse_hour_arg;
use crate::display::{Format, write_records};
use anyhow::{Context, Result, anyhow};
use chrono::TimeDelta;
use gridpull_lib::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

/// Download hourly load data for one respondent and series.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn download(
    start_str: &str,
    end_str: Option<&str>,
    api_key_file: &Path,
    output: Option<PathBuf>,
    format: Format,
    respondent: &str,
    series_str: &str,
    max_window_hours: i64,
    quiet: bool,
) -> Result<()> {
    let series_type = series_str
        .parse::<SeriesType>()
        .map_err(|e| anyhow!("{e}"))?;
    let series = SeriesConfig::new(respondent.to_uppercase(), series_type);

    // Parse start date; end defaults to today
    let first = parse_hour_arg(start_str)?;
    let last = match end_str {
        Some(s) => parse_hour_arg(s)?,
        None => chrono::Utc::now(),
    };
    let range = HourRange::new(first, last)?;

    // Credential is loaded once and held read-only for the whole run
    let api_key = read_api_key(api_key_file)?;
    let client = FetchClient::with_defaults(series.clone(), api_key)
        .context("Failed to create HTTP client")?;

    // Determine output path (default to <respondent>_load.<format>)
    let output = output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "{}_load.{}",
            series.respondent().to_lowercase(),
            format.extension()
        ))
    });

    let windows = range.windows(TimeDelta::hours(max_window_hours));

    // Setup progress bar
    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(windows.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} windows {msg}")
                .expect("Invalid progress template")
                .progress_chars("=>-"),
        );
        pb.set_message(format!("{series} {range}"));
        pb
    };

    // Fetch windows one at a time, in order; the first failure aborts the
    // run and no output file is written
    let mut table: Vec<LoadRecord> = Vec::new();
    for window in windows {
        progress.set_message(format!("{window}"));
        let page = client.fetch_window(window).await?;
        table.extend(page.records);
        progress.inc(1);
    }
    progress.finish_with_message(format!("Downloaded {} rows", table.len()));

    write_records(&table, &output, format)?;

    if !quiet {
        println!("Output written to: {}", output.display());
    }

    Ok(())
}
