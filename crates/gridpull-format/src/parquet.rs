//! Apache Parquet output format.

use arrow::array::{Float64Array, StringArray, TimestampMicrosecondArray};
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use arrow::record_batch::RecordBatch;
use gridpull_types::LoadRecord;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::io::Write;
use std::sync::Arc;

use crate::{FormatError, Formatter};

/// Parquet formatter.
#[derive(Debug, Clone)]
pub struct ParquetFormatter {
    /// Row group size (number of rows per group).
    row_group_size: usize,
    /// Compression codec.
    compression: Compression,
}

impl Default for ParquetFormatter {
    fn default() -> Self {
        Self {
            row_group_size: 100_000,
            compression: Compression::SNAPPY,
        }
    }
}

impl ParquetFormatter {
    /// Creates a new Parquet formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the row group size.
    #[must_use]
    pub const fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = size;
        self
    }

    /// Sets the compression codec.
    #[must_use]
    pub const fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Creates the Arrow schema for the load table.
    fn record_schema() -> Schema {
        Schema::new(vec![
            Field::new(
                "period",
                DataType::Timestamp(TimeUnit::Microsecond, Some("UTC".into())),
                false,
            ),
            Field::new("respondent", DataType::Utf8, false),
            Field::new("respondent_name", DataType::Utf8, true),
            Field::new("type", DataType::Utf8, false),
            Field::new("type_name", DataType::Utf8, true),
            Field::new("value", DataType::Float64, true),
            Field::new("value_units", DataType::Utf8, true),
        ])
    }

    /// Converts records to an Arrow `RecordBatch`.
    fn records_to_batch(records: &[LoadRecord]) -> Result<RecordBatch, FormatError> {
        let periods: Vec<_> = records.iter().map(|r| r.period.timestamp_micros()).collect();
        let respondents: Vec<_> = records.iter().map(|r| r.respondent.as_str()).collect();
        let respondent_names: Vec<_> =
            records.iter().map(|r| r.respondent_name.as_deref()).collect();
        let types: Vec<_> = records.iter().map(|r| r.series_type.as_str()).collect();
        let type_names: Vec<_> = records.iter().map(|r| r.type_name.as_deref()).collect();
        let values: Vec<_> = records.iter().map(|r| r.value).collect();
        let units: Vec<_> = records.iter().map(|r| r.value_units.as_deref()).collect();

        RecordBatch::try_new(
            Arc::new(Self::record_schema()),
            vec![
                Arc::new(TimestampMicrosecondArray::from(periods).with_timezone("UTC")),
                Arc::new(StringArray::from(respondents)),
                Arc::new(StringArray::from(respondent_names)),
                Arc::new(StringArray::from(types)),
                Arc::new(StringArray::from(type_names)),
                Arc::new(Float64Array::from(values)),
                Arc::new(StringArray::from(units)),
            ],
        )
        .map_err(|e| FormatError::Parquet(e.to_string()))
    }
}

impl Formatter for ParquetFormatter {
    fn write_records<W: Write + Send>(
        &self,
        records: &[LoadRecord],
        writer: W,
    ) -> Result<(), FormatError> {
        let schema = Arc::new(Self::record_schema());
        let props = WriterProperties::builder()
            .set_compression(self.compression)
            .set_max_row_group_size(self.row_group_size)
            .build();

        let mut arrow_writer = ArrowWriter::try_new(writer, schema, Some(props))
            .map_err(|e| FormatError::Parquet(e.to_string()))?;

        // Write in batches
        for chunk in records.chunks(self.row_group_size) {
            let batch = Self::records_to_batch(chunk)?;
            arrow_writer
                .write(&batch)
                .map_err(|e| FormatError::Parquet(e.to_string()))?;
        }

        arrow_writer
            .close()
            .map_err(|e| FormatError::Parquet(e.to_string()))?;

        Ok(())
    }

    fn extension(&self) -> &str {
        "parquet"
    }
}
