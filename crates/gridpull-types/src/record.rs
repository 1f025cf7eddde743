//! Hourly load record representation.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One hourly observation as returned by the API.
///
/// `period` and `value` are always present in the payload; the remaining
/// fields are passed through from the API unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadRecord {
    /// The hour this observation covers (UTC).
    #[serde(with = "period_format")]
    pub period: DateTime<Utc>,
    /// Respondent (balancing authority) code.
    #[serde(default)]
    pub respondent: String,
    /// Human-readable respondent name.
    #[serde(rename = "respondent-name", default, skip_serializing_if = "Option::is_none")]
    pub respondent_name: Option<String>,
    /// Series type code (e.g. `D` for demand).
    #[serde(rename = "type", default)]
    pub series_type: String,
    /// Human-readable series type name.
    #[serde(rename = "type-name", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// Observed value in `value_units`. The API emits occasional nulls and
    /// sometimes quotes the number; both are accepted.
    #[serde(default, deserialize_with = "deserialize_value")]
    pub value: Option<f64>,
    /// Units of `value` (e.g. megawatthours).
    #[serde(rename = "value-units", default, skip_serializing_if = "Option::is_none")]
    pub value_units: Option<String>,
}

impl LoadRecord {
    /// Creates a new record with only the required fields set.
    #[must_use]
    pub fn new(period: DateTime<Utc>, value: Option<f64>) -> Self {
        Self {
            period,
            respondent: String::new(),
            respondent_name: None,
            series_type: String::new(),
            type_name: None,
            value,
            value_units: None,
        }
    }
}

/// Serde adapter for the API's hour-granularity `YYYY-MM-DDTHH` timestamps.
mod period_format {
    use super::*;
    use serde::de::Error as _;

    const FORMAT: &str = "%Y-%m-%dT%H";

    pub(super) fn serialize<S>(period: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&period.format(FORMAT))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hour(&s).ok_or_else(|| D::Error::custom(format!("invalid period: {s}")))
    }
}

/// Parses an hour-granularity `YYYY-MM-DDTHH` timestamp.
fn parse_hour(s: &str) -> Option<DateTime<Utc>> {
    let (date_part, hour_part) = s.split_once('T')?;
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;
    let hour: u32 = hour_part.parse().ok()?;
    let time = NaiveTime::from_hms_opt(hour, 0, 0)?;
    Some(Utc.from_utc_datetime(&date.and_time(time)))
}

/// Accepts a number, a quoted number, or null for the `value` field.
fn deserialize_value<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid value: {s}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_record() {
        let json = r#"{
            "period": "2023-01-01T05",
            "respondent": "TVA",
            "respondent-name": "Tennessee Valley Authority",
            "type": "D",
            "type-name": "Demand",
            "value": 16489,
            "value-units": "megawatthours"
        }"#;

        let record: LoadRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.period, Utc.with_ymd_and_hms(2023, 1, 1, 5, 0, 0).unwrap());
        assert_eq!(record.respondent, "TVA");
        assert_eq!(record.series_type, "D");
        assert_eq!(record.value, Some(16489.0));
        assert_eq!(record.value_units.as_deref(), Some("megawatthours"));
    }

    #[test]
    fn test_deserialize_quoted_value() {
        let json = r#"{"period": "2023-01-01T05", "value": "16489.5"}"#;
        let record: LoadRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.value, Some(16489.5));
    }

    #[test]
    fn test_deserialize_null_value() {
        let json = r#"{"period": "2023-01-01T05", "value": null}"#;
        let record: LoadRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.value, None);
    }

    #[test]
    fn test_invalid_period_rejected() {
        let json = r#"{"period": "2023-01-01", "value": 1}"#;
        assert!(serde_json::from_str::<LoadRecord>(json).is_err());

        let json = r#"{"period": "2023-01-01T24", "value": 1}"#;
        assert!(serde_json::from_str::<LoadRecord>(json).is_err());
    }

    #[test]
    fn test_serialize_period_hour_granularity() {
        let record = LoadRecord::new(Utc.with_ymd_and_hms(2023, 1, 1, 5, 0, 0).unwrap(), Some(1.0));
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""period":"2023-01-01T05""#));
    }
}
