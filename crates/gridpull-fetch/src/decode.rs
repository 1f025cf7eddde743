//! Response envelope decoding.

use gridpull_types::LoadRecord;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while decoding a response body.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Body is not valid JSON, or the `response.data` path is absent.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The envelope wrapping every successful response.
#[derive(Debug, Deserialize)]
struct Envelope {
    response: Payload,
}

/// The payload section holding the data rows.
#[derive(Debug, Deserialize)]
struct Payload {
    data: Vec<LoadRecord>,
}

/// Decodes a response body and extracts the data rows.
///
/// The rows are returned exactly as transmitted, in the server's ascending
/// period order, with no filtering applied.
///
/// # Errors
///
/// Returns an error if the body is not valid JSON or the `response.data`
/// path is missing.
pub fn decode_response(body: &str) -> Result<Vec<LoadRecord>, DecodeError> {
    let envelope: Envelope = serde_json::from_str(body)?;
    Ok(envelope.response.data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const SAMPLE: &str = r#"{
        "response": {
            "total": "2",
            "dateFormat": "YYYY-MM-DD\"T\"HH24",
            "frequency": "hourly",
            "data": [
                {
                    "period": "2023-01-01T00",
                    "respondent": "TVA",
                    "respondent-name": "Tennessee Valley Authority",
                    "type": "D",
                    "type-name": "Demand",
                    "value": 14995,
                    "value-units": "megawatthours"
                },
                {
                    "period": "2023-01-01T01",
                    "respondent": "TVA",
                    "respondent-name": "Tennessee Valley Authority",
                    "type": "D",
                    "type-name": "Demand",
                    "value": 14710,
                    "value-units": "megawatthours"
                }
            ]
        },
        "request": {"command": "/v2/electricity/rto/region-data/data/"},
        "apiVersion": "2.1.8"
    }"#;

    #[test]
    fn test_decode_rows() {
        let records = decode_response(SAMPLE).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].period, Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(records[0].value, Some(14995.0));
        assert_eq!(records[1].period, Utc.with_ymd_and_hms(2023, 1, 1, 1, 0, 0).unwrap());
    }

    #[test]
    fn test_decode_empty_data() {
        let records = decode_response(r#"{"response": {"data": []}}"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_data_path() {
        assert!(decode_response(r#"{"response": {}}"#).is_err());
        assert!(decode_response(r#"{"error": "invalid api key"}"#).is_err());
    }

    #[test]
    fn test_invalid_json() {
        assert!(decode_response("<html>Bad Gateway</html>").is_err());
    }
}
