//! Hour ranges and fetch-window splitting.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, TimeZone, Timelike, Utc};

use crate::HourRangeError;

/// Default maximum span of a single fetch window, in hours.
///
/// A window of this size yields at most 4900 hourly rows, staying under the
/// API's 5000-row page cap.
pub const DEFAULT_MAX_SPAN_HOURS: i64 = 4900;

/// An inclusive range of hours for data retrieval.
///
/// The end of the range is always treated as extending to the last hour of
/// its calendar day: when `last` does not fall on hour 23, splitting uses
/// the same day at 23:00:00 instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRange {
    /// First hour (inclusive).
    pub first: DateTime<Utc>,
    /// Last hour (inclusive, before normalization).
    pub last: DateTime<Utc>,
}

impl HourRange {
    /// Creates a new hour range, validating that first <= last.
    ///
    /// # Errors
    ///
    /// Returns an error if first > last.
    pub fn new(first: DateTime<Utc>, last: DateTime<Utc>) -> Result<Self, HourRangeError> {
        if first > last {
            return Err(HourRangeError::InvalidRange { first, last });
        }
        Ok(Self { first, last })
    }

    /// Creates a range spanning two calendar days, from midnight on `start`
    /// to the end of `end`.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Result<Self, HourRangeError> {
        let midnight = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        Self::new(
            Utc.from_utc_datetime(&start.and_time(midnight)),
            Utc.from_utc_datetime(&end.and_time(midnight)),
        )
    }

    /// Returns `last` aligned to the final hour of its calendar day.
    ///
    /// A `last` already on hour 23 is returned unchanged; otherwise the
    /// same day at 23:00:00 is used and the original minute and second are
    /// discarded.
    #[must_use]
    pub fn normalized_last(&self) -> DateTime<Utc> {
        if self.last.hour() == 23 {
            return self.last;
        }
        let end_of_day = NaiveTime::from_hms_opt(23, 0, 0).unwrap();
        Utc.from_utc_datetime(&self.last.date_naive().and_time(end_of_day))
    }

    /// Splits the range into an ordered list of boundary timestamps.
    ///
    /// The list starts at `first`, steps forward by `max_span` while
    /// strictly below the normalized `last`, and always terminates exactly
    /// at the normalized `last`, even when `max_span` does not evenly
    /// divide the span. `max_span` is expected to be a positive whole
    /// number of hours.
    #[must_use]
    pub fn boundaries(&self, max_span: TimeDelta) -> Vec<DateTime<Utc>> {
        let last = self.normalized_last();

        let mut boundaries = vec![self.first];
        let mut cursor = self.first + max_span;
        while cursor < last {
            boundaries.push(cursor);
            cursor += max_span;
        }
        if *boundaries.last().expect("at least one boundary") != last {
            boundaries.push(last);
        }
        boundaries
    }

    /// Splits the range into consecutive fetch windows of at most
    /// `max_span` hours.
    ///
    /// Both endpoints of a window are inclusive at hour granularity, so
    /// every window except the final one ends one hour before the next
    /// boundary. Adjacent windows never share an hour and no hour of the
    /// range is skipped.
    #[must_use]
    pub fn windows(&self, max_span: TimeDelta) -> Vec<Window> {
        let boundaries = self.boundaries(max_span);
        if boundaries.len() < 2 {
            // first == normalized last, a single one-hour window
            return vec![Window::new(self.first, self.normalized_last())];
        }

        let last_pair = boundaries.len() - 2;
        boundaries
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let end = if i == last_pair {
                    pair[1]
                } else {
                    pair[1] - TimeDelta::hours(1)
                };
                Window::new(pair[0], end)
            })
            .collect()
    }

    /// Returns the total number of hours in the normalized range.
    #[must_use]
    pub fn total_hours(&self) -> usize {
        ((self.normalized_last() - self.first).num_hours() + 1) as usize
    }

    /// Returns true if the normalized range contains the given hour.
    #[must_use]
    pub fn contains(&self, hour: DateTime<Utc>) -> bool {
        hour >= self.first && hour <= self.normalized_last()
    }
}

impl std::fmt::Display for HourRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} to {}",
            self.first.format("%Y-%m-%dT%H"),
            self.last.format("%Y-%m-%dT%H")
        )
    }
}

/// A single (start, end) pair covered by one API request.
///
/// Both endpoints are inclusive at hour granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// First hour of the window (inclusive).
    pub start: DateTime<Utc>,
    /// Last hour of the window (inclusive).
    pub end: DateTime<Utc>,
}

impl Window {
    /// Creates a new window.
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Returns the number of hours the window covers.
    #[must_use]
    pub fn hours(&self) -> usize {
        ((self.end - self.start).num_hours() + 1) as usize
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format("%Y-%m-%dT%H"),
            self.end.format("%Y-%m-%dT%H")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn hour(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_hour_range_new() {
        let first = hour(2023, 1, 1, 0);
        let last = hour(2023, 6, 30, 23);
        let range = HourRange::new(first, last).unwrap();

        assert_eq!(range.first, first);
        assert_eq!(range.last, last);
    }

    #[test]
    fn test_hour_range_invalid() {
        let first = hour(2023, 6, 30, 0);
        let last = hour(2023, 1, 1, 0);
        assert!(matches!(
            HourRange::new(first, last),
            Err(HourRangeError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_normalization_extends_to_hour_23() {
        let range = HourRange::new(hour(2023, 1, 1, 0), hour(2023, 1, 1, 5)).unwrap();
        let last = range.normalized_last();

        assert_eq!(last.hour(), 23);
        assert_eq!(last.day(), 1);
        assert_eq!(last.month(), 1);
    }

    #[test]
    fn test_normalization_keeps_hour_23() {
        let last = hour(2023, 1, 1, 23);
        let range = HourRange::new(hour(2023, 1, 1, 0), last).unwrap();
        assert_eq!(range.normalized_last(), last);
    }

    #[test]
    fn test_short_range_yields_two_boundaries() {
        // A span shorter than the max window collapses to [first, last]
        let range = HourRange::new(hour(2023, 1, 1, 0), hour(2023, 1, 1, 5)).unwrap();
        let boundaries = range.boundaries(TimeDelta::hours(DEFAULT_MAX_SPAN_HOURS));

        assert_eq!(boundaries, vec![hour(2023, 1, 1, 0), hour(2023, 1, 1, 23)]);
        assert_eq!(range.windows(TimeDelta::hours(DEFAULT_MAX_SPAN_HOURS)).len(), 1);
    }

    #[test]
    fn test_boundary_count_non_divisible() {
        // 2023-01-01T00 .. 2024-12-31T23 is 17543 hours; 4900-hour steps
        // land on 3 interior points before the forced closing boundary
        let range = HourRange::new(hour(2023, 1, 1, 0), hour(2024, 12, 31, 23)).unwrap();
        let span = TimeDelta::hours(DEFAULT_MAX_SPAN_HOURS);
        let boundaries = range.boundaries(span);

        let total = (range.normalized_last() - range.first).num_hours();
        assert_eq!(total, 17543);
        assert_eq!(
            boundaries.len() as i64,
            (total as u64).div_ceil(DEFAULT_MAX_SPAN_HOURS as u64) as i64 + 1
        );
        assert_eq!(boundaries.len(), 5);
        assert_eq!(boundaries[0], range.first);
        assert_eq!(*boundaries.last().unwrap(), range.normalized_last());
    }

    #[test]
    fn test_boundary_count_exactly_divisible() {
        // 100-hour span split in 25-hour steps: 100/25 + 1 boundaries
        let first = hour(2023, 3, 1, 0);
        let range = HourRange::new(first, first + TimeDelta::hours(100)).unwrap();
        let boundaries = range.boundaries(TimeDelta::hours(25));

        assert_eq!(boundaries.len(), 5);
        assert_eq!(*boundaries.last().unwrap(), range.normalized_last());
    }

    #[test]
    fn test_boundaries_strictly_increasing() {
        let range = HourRange::new(hour(2023, 1, 1, 0), hour(2024, 12, 31, 23)).unwrap();
        let boundaries = range.boundaries(TimeDelta::hours(DEFAULT_MAX_SPAN_HOURS));

        for pair in boundaries.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_windows_cover_range_without_overlap() {
        let range = HourRange::new(hour(2023, 1, 1, 0), hour(2024, 12, 31, 23)).unwrap();
        let windows = range.windows(TimeDelta::hours(DEFAULT_MAX_SPAN_HOURS));

        assert_eq!(windows.len(), 4);
        assert_eq!(windows[0].start, range.first);
        assert_eq!(windows.last().unwrap().end, range.normalized_last());

        // Consecutive windows are exactly one hour apart
        for pair in windows.windows(2) {
            assert_eq!(pair[1].start - pair[0].end, TimeDelta::hours(1));
        }

        let covered: usize = windows.iter().map(Window::hours).sum();
        assert_eq!(covered, range.total_hours());
    }

    #[test]
    fn test_single_day_window() {
        let range = HourRange::new(hour(2023, 1, 1, 0), hour(2023, 1, 1, 5)).unwrap();
        let windows = range.windows(TimeDelta::hours(DEFAULT_MAX_SPAN_HOURS));

        assert_eq!(windows, vec![Window::new(hour(2023, 1, 1, 0), hour(2023, 1, 1, 23))]);
    }

    #[test]
    fn test_degenerate_equal_endpoints() {
        let at = hour(2023, 1, 1, 23);
        let range = HourRange::new(at, at).unwrap();
        let windows = range.windows(TimeDelta::hours(DEFAULT_MAX_SPAN_HOURS));

        assert_eq!(windows, vec![Window::new(at, at)]);
        assert_eq!(windows[0].hours(), 1);
    }

    #[test]
    fn test_from_dates() {
        let range = HourRange::from_dates(
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(),
        )
        .unwrap();

        assert_eq!(range.first, hour(2023, 1, 1, 0));
        assert_eq!(range.normalized_last(), hour(2023, 1, 2, 23));
        assert_eq!(range.total_hours(), 48);
    }

    #[test]
    fn test_contains() {
        let range = HourRange::new(hour(2023, 1, 1, 0), hour(2023, 1, 1, 5)).unwrap();
        assert!(range.contains(hour(2023, 1, 1, 23)));
        assert!(!range.contains(hour(2023, 1, 2, 0)));
    }

    #[test]
    fn test_display() {
        let range = HourRange::new(hour(2023, 1, 1, 0), hour(2023, 1, 2, 5)).unwrap();
        assert_eq!(range.to_string(), "2023-01-01T00 to 2023-01-02T05");
    }
}
