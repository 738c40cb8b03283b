//! HTML order document parser using scraper.

use std::io::Read;
use std::path::Path;

use scraper::Html;

use crate::detect::detect_format_from_path;
use crate::error::{Error, Result};
use crate::model::{RawRecord, Row};
use crate::report::ExtractionStats;

use super::options::ParseOptions;
use super::reconstruct::RecordReconstructor;
use super::rows::extract_rows;

/// HTML order document parser.
///
/// Holds the extracted row sequence; [`HtmlParser::parse`] turns it into
/// line-item records.
pub struct HtmlParser {
    rows: Vec<Row>,
    options: ParseOptions,
}

impl HtmlParser {
    /// Open an HTML file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open an HTML file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();

        // Reject non-HTML inputs before touching the file
        detect_format_from_path(path)?;

        let data = std::fs::read(path)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Parse HTML from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse HTML from bytes with custom options. The bytes must be UTF-8.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let html = std::str::from_utf8(data)
            .map_err(|e| Error::HtmlParse(format!("document is not valid UTF-8: {}", e)))?;
        Self::from_html_with_options(html, options)
    }

    /// Parse HTML text.
    pub fn from_html(html: &str) -> Result<Self> {
        Self::from_html_with_options(html, ParseOptions::default())
    }

    /// Parse HTML text with custom options.
    pub fn from_html_with_options(html: &str, options: ParseOptions) -> Result<Self> {
        let html = html.strip_prefix('\u{feff}').unwrap_or(html);
        let document = Html::parse_document(html);

        if !document.errors.is_empty() {
            log::debug!(
                "HtmlParser: recovered from {} markup errors",
                document.errors.len()
            );
        }

        let rows = extract_rows(&document)?;
        Ok(Self { rows, options })
    }

    /// Parse HTML from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse HTML from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// The non-blank table rows, in document order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The options in effect.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Reconstruct line-item records from the rows.
    pub fn parse(&self) -> Result<Vec<RawRecord>> {
        self.parse_with_stats().map(|(records, _)| records)
    }

    /// Reconstruct records and return the scan statistics alongside.
    pub fn parse_with_stats(&self) -> Result<(Vec<RawRecord>, ExtractionStats)> {
        let mut reconstructor = RecordReconstructor::new(&self.options);
        let records = reconstructor.reconstruct(&self.rows)?;
        Ok((records, reconstructor.into_stats()))
    }
}
