//! Region-data query URL construction.

use gridpull_types::{SeriesConfig, Window};

/// Base URL for the hourly region-data endpoint.
pub const BASE_URL: &str = "https://api.eia.gov/v2/electricity/rto/region-data/data/";

/// Maximum rows the API returns per call.
pub const PAGE_LENGTH: usize = 5000;

/// Format for window endpoints: whole hours, no sub-hour precision.
pub const HOUR_FORMAT: &str = "%Y-%m-%dT%H";

/// Builds the query URL for one fetch window.
///
/// Both window endpoints are transmitted at hour granularity and are
/// inclusive on the server side. Rows come back sorted ascending by period,
/// capped at [`PAGE_LENGTH`] per call.
///
/// # Example
///
/// ```
/// use gridpull_fetch::url::series_url;
/// use gridpull_types::{SeriesConfig, Window};
/// use chrono::{TimeZone, Utc};
///
/// let window = Window::new(
///     Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2023, 1, 1, 23, 0, 0).unwrap(),
/// );
/// let url = series_url(&SeriesConfig::tva_demand(), window, "DEMO_KEY");
/// assert!(url.contains("facets[respondent][]=TVA"));
/// assert!(url.contains("start=2023-01-01T00&end=2023-01-01T23"));
/// ```
#[must_use]
pub fn series_url(series: &SeriesConfig, window: Window, api_key: &str) -> String {
    format!(
        "{BASE_URL}?frequency=hourly&data[0]=value\
         &facets[respondent][]={}&facets[type][]={}\
         &start={}&end={}\
         &sort[0][column]=period&sort[0][direction]=asc\
         &offset=0&length={PAGE_LENGTH}&api_key={}",
        series.respondent(),
        series.series_type().code(),
        window.start.format(HOUR_FORMAT),
        window.end.format(HOUR_FORMAT),
        api_key,
    )
}
