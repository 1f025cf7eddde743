//! Display utilities and output writing for the gridpull CLI.

use anyhow::Result;
use clap::ValueEnum;
use gridpull_lib::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Output format for downloaded data.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
    Ndjson,
    Parquet,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
            Self::Parquet => "parquet",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Write the load table to a file in the specified format.
///
/// The file is only created here, after the full table has been
/// accumulated; a failed download never leaves a partial file behind.
pub(crate) fn write_records(records: &[LoadRecord], output: &Path, format: Format) -> Result<()> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);

    match format {
        Format::Csv => {
            let formatter = CsvFormatter::new();
            formatter.write_records(records, writer)?;
        }
        Format::Json => {
            let formatter = JsonFormatter::new();
            formatter.write_records(records, writer)?;
        }
        Format::Ndjson => {
            let formatter = JsonFormatter::ndjson();
            formatter.write_records(records, writer)?;
        }
        Format::Parquet => {
            #[cfg(feature = "parquet")]
            {
                let formatter = ParquetFormatter::new();
                formatter.write_records(records, writer)?;
            }
            #[cfg(not(feature = "parquet"))]
            {
                anyhow::bail!("Parquet support not compiled in");
            }
        }
    }

    Ok(())
}
