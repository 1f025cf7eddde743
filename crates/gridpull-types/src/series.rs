//! Series selection for the region-data endpoint.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Data series exposed by the hourly region-data endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SeriesType {
    /// Hourly demand.
    #[default]
    #[serde(rename = "D")]
    Demand,
    /// Day-ahead demand forecast.
    #[serde(rename = "DF")]
    DemandForecast,
    /// Net generation.
    #[serde(rename = "NG")]
    NetGeneration,
    /// Total interchange with neighboring authorities.
    #[serde(rename = "TI")]
    TotalInterchange,
}

impl SeriesType {
    /// Returns the facet code the API expects.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Demand => "D",
            Self::DemandForecast => "DF",
            Self::NetGeneration => "NG",
            Self::TotalInterchange => "TI",
        }
    }

    /// Returns the human-readable series name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Demand => "demand",
            Self::DemandForecast => "day-ahead demand forecast",
            Self::NetGeneration => "net generation",
            Self::TotalInterchange => "total interchange",
        }
    }
}

impl std::fmt::Display for SeriesType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a series type string is not recognized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown series type: {0}. Valid options: demand, forecast, generation, interchange")]
pub struct SeriesTypeParseError(String);

impl std::str::FromStr for SeriesType {
    type Err = SeriesTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "d" | "demand" => Ok(Self::Demand),
            "df" | "forecast" => Ok(Self::DemandForecast),
            "ng" | "generation" => Ok(Self::NetGeneration),
            "ti" | "interchange" => Ok(Self::TotalInterchange),
            _ => Err(SeriesTypeParseError(s.to_string())),
        }
    }
}

/// Which respondent and series one client instance fetches.
///
/// Passed to the fetch client at construction so that a different region or
/// series never requires a code edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Respondent (balancing authority) code, e.g. "TVA".
    respondent: String,
    /// Which series of the respondent's data to fetch.
    series_type: SeriesType,
}

impl SeriesConfig {
    /// Creates a new series configuration.
    #[must_use]
    pub fn new(respondent: impl Into<String>, series_type: SeriesType) -> Self {
        Self {
            respondent: respondent.into(),
            series_type,
        }
    }

    /// Hourly demand for the Tennessee Valley Authority region.
    #[must_use]
    pub fn tva_demand() -> Self {
        Self::new("TVA", SeriesType::Demand)
    }

    /// Returns the respondent code.
    #[must_use]
    pub fn respondent(&self) -> &str {
        &self.respondent
    }

    /// Returns the series type.
    #[must_use]
    pub const fn series_type(&self) -> SeriesType {
        self.series_type
    }
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self::tva_demand()
    }
}

impl std::fmt::Display for SeriesConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.respondent, self.series_type)
    }
}
