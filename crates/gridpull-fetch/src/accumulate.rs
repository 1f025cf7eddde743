//! Sequential accumulation across fetch windows.

use chrono::TimeDelta;
use gridpull_types::{HourRange, LoadRecord, Result, Window};

use crate::client::FetchClient;

/// The decoded row set returned by one API call for one window.
#[derive(Debug, Clone)]
pub struct Page {
    /// The window this page covers.
    pub window: Window,
    /// The rows returned for the window.
    pub records: Vec<LoadRecord>,
}

impl Page {
    /// Creates a new page.
    #[must_use]
    pub const fn new(window: Window, records: Vec<LoadRecord>) -> Self {
        Self { window, records }
    }

    /// Returns true if the page holds no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of rows in the page.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }
}

/// Fetches every window of `range` in ascending order and concatenates the
/// pages into one table.
///
/// Windows are fetched strictly sequentially; the next request does not
/// start until the previous one has returned. Rows are appended in arrival
/// order, which equals chronological order since windows are disjoint and
/// increasing. The final row count equals the sum of all page row counts.
///
/// # Errors
///
/// The first failing window aborts the whole accumulation and discards
/// every previously fetched page; no partial table is returned.
pub async fn fetch_range(
    client: &FetchClient,
    range: &HourRange,
    max_span: TimeDelta,
) -> Result<Vec<LoadRecord>> {
    let mut table = Vec::new();
    for window in range.windows(max_span) {
        let page = client.fetch_window(window).await?;
        table.extend(page.records);
    }
    Ok(table)
}
