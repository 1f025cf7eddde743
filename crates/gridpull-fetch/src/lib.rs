//! HTTP client and data fetching for the gridpull hourly load downloader.
//!
//! This crate provides the data download pipeline:
//!
//! - [`url::series_url`] - Constructs region-data query URLs
//! - [`read_api_key`] - Loads the API key from a plain-text file
//! - [`FetchClient`] - One-request-per-window HTTP client
//! - [`decode_response`] - Extracts rows from the response envelope
//! - [`fetch_range`] - Sequential accumulation across all windows

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/gridpull/gridpull/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod accumulate;
mod client;
mod credential;
mod decode;
pub mod url;

pub use accumulate::{Page, fetch_range};
pub use client::{ClientConfig, FetchClient, FetchError};
pub use credential::read_api_key;
pub use decode::{DecodeError, decode_response};
