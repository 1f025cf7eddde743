//! Library for downloading hourly electricity load data from the EIA API.
//!
//! This is a facade crate that re-exports functionality from the gridpull
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use gridpull_lib::prelude::*;
//! use chrono::TimeDelta;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_key = read_api_key(std::path::Path::new("secret_api.txt"))?;
//!     let client = FetchClient::with_defaults(SeriesConfig::tva_demand(), api_key)?;
//!
//!     let range = HourRange::from_dates(
//!         chrono::NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
//!         chrono::NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
//!     )?;
//!
//!     let table = fetch_range(&client, &range, TimeDelta::hours(DEFAULT_MAX_SPAN_HOURS)).await?;
//!     println!("Downloaded {} rows", table.len());
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/gridpull/gridpull/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use gridpull_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use gridpull_fetch::{
    ClientConfig, DecodeError, FetchClient, FetchError, Page, decode_response, fetch_range,
    read_api_key,
};

#[cfg(feature = "fetch")]
pub use gridpull_fetch::url;

// Re-export formatters
#[cfg(feature = "format")]
pub use gridpull_format::{CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat};

#[cfg(all(feature = "format", feature = "parquet"))]
pub use gridpull_format::ParquetFormatter;

/// Prelude module for convenient imports.
///
/// ```
/// use gridpull_lib::prelude::*;
/// ```
pub mod prelude {
    pub use gridpull_types::{
        DEFAULT_MAX_SPAN_HOURS, GridpullError, HourRange, HourRangeError, LoadRecord, Result,
        SeriesConfig, SeriesType, Window,
    };

    #[cfg(feature = "fetch")]
    pub use gridpull_fetch::{ClientConfig, FetchClient, Page, fetch_range, read_api_key};

    #[cfg(feature = "format")]
    pub use gridpull_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};

    #[cfg(all(feature = "format", feature = "parquet"))]
    pub use gridpull_format::ParquetFormatter;
}
