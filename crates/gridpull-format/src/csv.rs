//! CSV output format.

use gridpull_types::LoadRecord;
use std::io::Write;

use crate::{FormatError, Formatter};

/// CSV formatter.
///
/// Writes the comma-safe columns (codes and values); the free-text name
/// fields are available through the JSON and Parquet formatters.
#[derive(Debug, Clone, Default)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_records<W: Write + Send>(
        &self,
        records: &[LoadRecord],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "period{d}respondent{d}type{d}value{d}value_units")?;
        }

        for record in records {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}",
                record.period.format("%Y-%m-%dT%H"),
                record.respondent,
                record.series_type,
                record.value.map_or_else(String::new, |v| v.to_string()),
                record.value_units.as_deref().unwrap_or_default(),
            )?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}
