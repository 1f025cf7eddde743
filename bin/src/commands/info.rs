//! Info command implementation.

use anyhow::{Result, anyhow};
use gridpull_lib::prelude::*;
use gridpull_lib::url;

/// Show the series a download would fetch.
pub(crate) fn show_info(respondent: &str, series_str: &str) -> Result<()> {
    let series_type = series_str
        .parse::<SeriesType>()
        .map_err(|e| anyhow!("{e}"))?;
    let series = SeriesConfig::new(respondent.to_uppercase(), series_type);

    println!("Series:     {series}");
    println!("Respondent: {}", series.respondent());
    println!(
        "Type:       {} ({})",
        series.series_type().code(),
        series.series_type()
    );
    println!("Endpoint:   {}", url::BASE_URL);
    println!("Page cap:   {} rows per request", url::PAGE_LENGTH);

    Ok(())
}
