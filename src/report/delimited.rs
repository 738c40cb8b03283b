//! Delimited (CSV/TSV) report output.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

use super::options::ReportOptions;
use super::result::Report;

/// Report column names, in output order.
pub const HEADER: [&str; 4] = ["Lumber Size", "Quantity", "Board Footage", "Lineal Footage"];

/// Write a report as delimited text to any writer.
pub fn write_csv<W: Write>(report: &Report, writer: W, options: &ReportOptions) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .from_writer(writer);

    if options.include_header {
        wtr.write_record(HEADER)?;
    }
    for record in &report.records {
        wtr.write_record(record.to_fields())?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render a report as delimited text.
pub fn to_csv(report: &Report, options: &ReportOptions) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_csv(report, &mut buf, options)?;
    String::from_utf8(buf).map_err(|e| Error::Render(format!("CSV output is not UTF-8: {}", e)))
}

/// Write a report to `path` in one step.
///
/// The text goes to a temporary file in the destination directory which is
/// then renamed over `path`. On error the temporary file is removed and
/// `path` is left untouched.
pub fn save_csv<P: AsRef<Path>>(report: &Report, path: P, options: &ReportOptions) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    write_csv(report, &mut tmp, options)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;

    log::info!("Wrote {} records to {}", report.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AggregatedRecord;
    use crate::report::ExtractionStats;

    fn sample() -> Report {
        Report::new(
            vec![
                AggregatedRecord {
                    lumber_size: "2x4 SPF".to_string(),
                    total_quantity: Some(15),
                    total_board_footage: Some(50.0),
                    total_lineal_footage: Some("15' 6.0\"".to_string()),
                },
                AggregatedRecord {
                    lumber_size: "7/16 OSB".to_string(),
                    total_quantity: Some(24),
                    total_board_footage: None,
                    total_lineal_footage: None,
                },
            ],
            ExtractionStats::new(),
        )
    }

    #[test]
    fn test_to_csv() {
        let csv = to_csv(&sample(), &ReportOptions::default()).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "Lumber Size,Quantity,Board Footage,Lineal Footage");
        assert_eq!(lines[1], "2x4 SPF,15,50.0,\"15' 6.0\"\"\"");
        assert_eq!(lines[2], "7/16 OSB,24,,");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_to_csv_without_header() {
        let options = ReportOptions::new().with_header(false);
        let csv = to_csv(&sample(), &options).unwrap();
        assert!(csv.starts_with("2x4 SPF,"));
    }

    #[test]
    fn test_to_tsv() {
        let csv = to_csv(&sample(), &ReportOptions::new().tsv()).unwrap();
        assert!(csv.starts_with("Lumber Size\tQuantity\tBoard Footage\tLineal Footage\n"));
        assert!(csv.contains("7/16 OSB\t24\t\t\n"));
    }

    #[test]
    fn test_empty_report_has_header_only() {
        let csv = to_csv(&Report::default(), &ReportOptions::default()).unwrap();
        assert_eq!(csv, "Lumber Size,Quantity,Board Footage,Lineal Footage\n");
    }

    #[test]
    fn test_save_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("order.csv");
        save_csv(&sample(), &path, &ReportOptions::default()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_csv(&sample(), &ReportOptions::default()).unwrap());
        // Only the report remains in the directory
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_save_csv_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("order.csv");
        let result = save_csv(&sample(), &path, &ReportOptions::default());
        assert!(matches!(result, Err(Error::Io(_))));
        assert!(!path.exists());
    }
}
