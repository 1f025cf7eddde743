//! Core types for the gridpull hourly load downloader.
//!
//! This crate provides the fundamental data structures used throughout
//! gridpull:
//!
//! - [`HourRange`] - An inclusive range of hours, split into fetch windows
//! - [`Window`] - A single (start, end) pair covered by one API request
//! - [`LoadRecord`] - One hourly observation as returned by the API
//! - [`SeriesConfig`] - Which respondent and series to fetch

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/gridpull/gridpull/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod hour_range;
mod record;
mod series;

pub use error::{GridpullError, HourRangeError, Result};
pub use hour_range::{DEFAULT_MAX_SPAN_HOURS, HourRange, Window};
pub use record::LoadRecord;
pub use series::{SeriesConfig, SeriesType, SeriesTypeParseError};
