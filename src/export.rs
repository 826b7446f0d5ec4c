//! # CSV Export
//!
//! Writes generated records to `<Market_Name>_Power_Production.csv`. An
//! existing file at the target path is truncated and overwritten.

use crate::domain::{PowerRecord, CSV_HEADER};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const OUTPUT_FILE_SUFFIX: &str = "_Power_Production.csv";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to create output file ({}): {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// File name for a market, with spaces replaced by underscores
pub fn output_file_name(market_name: &str) -> String {
    format!("{}{}", market_name.replace(' ', "_"), OUTPUT_FILE_SUFFIX)
}

/// Write a header line and one line per record.
///
/// The header is written even when `records` is empty.
pub fn write_records<W: io::Write>(writer: W, records: &[PowerRecord]) -> Result<(), ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub struct CsvExporter {
    output_dir: PathBuf,
}

impl CsvExporter {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Target path; the bare file name when exporting to the working directory
    pub fn output_path(&self, market_name: &str) -> PathBuf {
        let file_name = output_file_name(market_name);
        if self.output_dir.as_os_str().is_empty() || self.output_dir == Path::new(".") {
            PathBuf::from(file_name)
        } else {
            self.output_dir.join(file_name)
        }
    }

    /// Export records for a market and return the path written
    pub fn export(&self, market_name: &str, records: &[PowerRecord]) -> Result<PathBuf, ExportError> {
        let path = self.output_path(market_name);
        let file = File::create(&path).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        write_records(file, records)?;
        debug!(path = %path.display(), rows = records.len(), "wrote CSV");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Season;
    use rstest::rstest;

    fn sample_records() -> Vec<PowerRecord> {
        vec![
            PowerRecord {
                hour: 0,
                solar_mw: 0.0,
                wind_mw: 12345.67,
                demand_mw: 47000.5,
                season: Season::Spring,
            },
            PowerRecord {
                hour: 12,
                solar_mw: 14000.25,
                wind_mw: 9000.0,
                demand_mw: 49999.99,
                season: Season::Summer,
            },
        ]
    }

    #[rstest]
    #[case("Generic Market", "Generic_Market_Power_Production.csv")]
    #[case("UK", "UK_Power_Production.csv")]
    #[case("Faroe Islands North", "Faroe_Islands_North_Power_Production.csv")]
    fn test_output_file_name(#[case] market: &str, #[case] expected: &str) {
        assert_eq!(output_file_name(market), expected);
    }

    #[test]
    fn test_working_directory_path_is_bare_file_name() {
        let exporter = CsvExporter::new(".");
        assert_eq!(
            exporter.output_path("Generic Market"),
            PathBuf::from("Generic_Market_Power_Production.csv")
        );
    }

    #[test]
    fn test_header_and_rows() {
        let mut buf = Vec::new();
        write_records(&mut buf, &sample_records()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], CSV_HEADER.join(","));
        assert_eq!(lines[1], "0,0.0,12345.67,47000.5,Spring");
        assert_eq!(lines[2], "12,14000.25,9000.0,49999.99,Summer");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_header_without_rows() {
        let mut buf = Vec::new();
        write_records(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), format!("{}\n", CSV_HEADER.join(",")));
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = CsvExporter::new(dir.path());
        std::fs::write(exporter.output_path("DK1"), "stale contents\n").unwrap();

        let path = exporter.export("DK1", &sample_records()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();

        assert_eq!(path, dir.path().join("DK1_Power_Production.csv"));
        assert!(!text.contains("stale"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_export_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = CsvExporter::new(dir.path().join("does-not-exist"));

        let err = exporter.export("DK1", &sample_records()).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
