//! # lumbertab
//!
//! Lumber order extraction from HTML tables.
//!
//! Order documents list each line item over several loosely structured
//! table rows. This library finds those rows, rebuilds the line items
//! (size, quantity, board footage, lineal footage), sums them per lumber
//! size and writes the totals as CSV.
//!
//! ## Quick Start
//!
//! ```no_run
//! use lumbertab::{convert_file, parse_file};
//!
//! fn main() -> lumbertab::Result<()> {
//!     // Build the aggregated report in memory
//!     let report = parse_file("order.html")?;
//!     for record in &report.records {
//!         println!("{}: {:?}", record.lumber_size, record.total_quantity);
//!     }
//!
//!     // Or write order.csv next to the input
//!     convert_file("order.html")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Row extraction**: every non-blank `<tr>` as trimmed cell texts
//! - **Record reconstruction**: "SKU" marker rows and their neighbors
//! - **Normalization**: quantities, board footage, feet-and-inches lengths
//! - **Aggregation**: totals per lumber size in first-seen order
//!
//! Any failure aborts the conversion and no output file is written.

pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;

// Re-export commonly used types
pub use detect::{detect_format_from_path, is_html, output_path_for, HtmlFormat};
pub use error::{Error, Result};
pub use model::{
    to_feet_and_inches, to_inches, AggregatedRecord, ItemKind, LinearMeasurement, RawRecord, Row,
    TypedRecord,
};
pub use parser::{HtmlParser, ParseOptions, SizePolicy};
pub use report::{ExtractionStats, GroupOrder, JsonFormat, Report, ReportOptions};

use std::path::{Path, PathBuf};

/// Parse an HTML order file and return the aggregated report.
///
/// # Example
///
/// ```no_run
/// use lumbertab::parse_file;
///
/// let report = parse_file("order.html").unwrap();
/// println!("Lumber sizes: {}", report.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Report> {
    Lumbertab::new().parse(path).map(LumbertabResult::into_report)
}

/// Parse an HTML order file with custom options.
///
/// # Example
///
/// ```no_run
/// use lumbertab::{parse_file_with_options, GroupOrder, ParseOptions, ReportOptions};
///
/// let options = ParseOptions::new().carry_forward();
/// let report_options = ReportOptions::new().with_group_order(GroupOrder::Lexical);
/// let report = parse_file_with_options("order.html", options, &report_options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
    report_options: &ReportOptions,
) -> Result<Report> {
    let parser = HtmlParser::open_with_options(path, options)?;
    build(&parser, report_options)
}

/// Parse HTML text and return the aggregated report.
///
/// # Example
///
/// ```
/// use lumbertab::parse_str;
///
/// let html = r#"<table>
///   <tr><td></td><td>SKU OSB</td><td>Roof Sheathing</td></tr>
///   <tr><td></td><td></td><td>7/16 OSB</td><td>24</td></tr>
/// </table>"#;
/// let report = parse_str(html).unwrap();
/// assert_eq!(report.records[0].lumber_size, "7/16 OSB");
/// assert_eq!(report.records[0].total_quantity, Some(24));
/// ```
pub fn parse_str(html: &str) -> Result<Report> {
    parse_str_with_options(html, ParseOptions::default(), &ReportOptions::default())
}

/// Parse HTML text with custom options.
pub fn parse_str_with_options(
    html: &str,
    options: ParseOptions,
    report_options: &ReportOptions,
) -> Result<Report> {
    let parser = HtmlParser::from_html_with_options(html, options)?;
    build(&parser, report_options)
}

/// Parse HTML bytes (UTF-8) and return the aggregated report.
pub fn parse_bytes(data: &[u8]) -> Result<Report> {
    let parser = HtmlParser::from_bytes(data)?;
    build(&parser, &ReportOptions::default())
}

/// Extract the non-blank table rows of an HTML file.
///
/// Useful for checking how a document's layout lines up with the
/// marker-row pattern.
pub fn extract_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Row>> {
    let parser = HtmlParser::open(path)?;
    Ok(parser.rows().to_vec())
}

/// Convert an HTML order file to CSV next to it (`order.html` -> `order.csv`).
///
/// Returns the output path and the report that was written.
///
/// # Example
///
/// ```no_run
/// use lumbertab::convert_file;
///
/// let (path, report) = convert_file("order.html").unwrap();
/// println!("{} lumber sizes written to {}", report.len(), path.display());
/// ```
pub fn convert_file<P: AsRef<Path>>(input: P) -> Result<(PathBuf, Report)> {
    let output = output_path_for(&input);
    let report = convert_file_to(input, &output)?;
    Ok((output, report))
}

/// Convert an HTML order file to CSV at the given path.
pub fn convert_file_to<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<Report> {
    let result = Lumbertab::new().parse(input)?;
    result.save(output)?;
    Ok(result.into_report())
}

fn build(parser: &HtmlParser, report_options: &ReportOptions) -> Result<Report> {
    let (records, stats) = parser.parse_with_stats()?;
    report::build_report(&records, stats, report_options)
}

/// Builder for parsing order documents and writing reports.
///
/// # Example
///
/// ```no_run
/// use lumbertab::{GroupOrder, Lumbertab};
///
/// let csv = Lumbertab::new()
///     .carry_forward()
///     .with_group_order(GroupOrder::Lexical)
///     .parse("order.html")?
///     .to_csv()?;
/// # Ok::<(), lumbertab::Error>(())
/// ```
pub struct Lumbertab {
    parse_options: ParseOptions,
    report_options: ReportOptions,
}

impl Lumbertab {
    /// Create a new Lumbertab builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            report_options: ReportOptions::default(),
        }
    }

    /// Reuse the last resolved size when a dimensional item has none.
    pub fn carry_forward(mut self) -> Self {
        self.parse_options = self.parse_options.carry_forward();
        self
    }

    /// Set the marker-row label.
    pub fn with_marker_label(mut self, label: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.with_marker_label(label);
        self
    }

    /// Set the sheathing category label.
    pub fn with_sheathing_label(mut self, label: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.with_sheathing_label(label);
        self
    }

    /// Set the group order of the report.
    pub fn with_group_order(mut self, order: GroupOrder) -> Self {
        self.report_options = self.report_options.with_group_order(order);
        self
    }

    /// Write tab-separated output.
    pub fn tsv(mut self) -> Self {
        self.report_options = self.report_options.tsv();
        self
    }

    /// Enable or disable the header row.
    pub fn with_header(mut self, include: bool) -> Self {
        self.report_options = self.report_options.with_header(include);
        self
    }

    /// Parse an HTML file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<LumbertabResult> {
        let parser = HtmlParser::open_with_options(path, self.parse_options)?;
        let report = build(&parser, &self.report_options)?;
        Ok(LumbertabResult {
            report,
            report_options: self.report_options,
        })
    }

    /// Parse HTML text.
    pub fn parse_str(self, html: &str) -> Result<LumbertabResult> {
        let parser = HtmlParser::from_html_with_options(html, self.parse_options)?;
        let report = build(&parser, &self.report_options)?;
        Ok(LumbertabResult {
            report,
            report_options: self.report_options,
        })
    }
}

impl Default for Lumbertab {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing an order document.
pub struct LumbertabResult {
    /// The aggregated report
    pub report: Report,
    /// Output options to use
    report_options: ReportOptions,
}

impl LumbertabResult {
    /// Render as delimited text.
    pub fn to_csv(&self) -> Result<String> {
        report::to_csv(&self.report, &self.report_options)
    }

    /// Render as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        report::to_json(&self.report, format)
    }

    /// Write delimited text to `path`, all or nothing.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        report::save_csv(&self.report, path, &self.report_options)
    }

    /// Get the report.
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Take the report.
    pub fn into_report(self) -> Report {
        self.report
    }
}
