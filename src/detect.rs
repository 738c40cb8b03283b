//! Input format detection and output path derivation.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Extensions accepted as HTML input (lowercase, without the dot).
pub const HTML_EXTENSIONS: &[&str] = &["html", "htm"];

/// Extension given to the generated report.
pub const REPORT_EXTENSION: &str = "csv";

/// HTML input format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlFormat {
    /// Extension as written on the input path (e.g., "html", "HTM")
    pub extension: String,
}

impl std::fmt::Display for HtmlFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTML (.{})", self.extension)
    }
}

/// Detect the input format from a file path.
///
/// Only the extension is inspected; the file is not opened, so a bad
/// extension is reported before any processing begins.
///
/// # Returns
/// * `Ok(HtmlFormat)` if the extension is `html` or `htm` (any case)
/// * `Err(Error::UnsupportedExtension)` otherwise
///
/// # Example
/// ```
/// use lumbertab::detect::detect_format_from_path;
///
/// assert!(detect_format_from_path("order.html").is_ok());
/// assert!(detect_format_from_path("order.pdf").is_err());
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<HtmlFormat> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| Error::UnsupportedExtension(path.display().to_string()))?;

    let ext_lower = ext.to_ascii_lowercase();
    if !HTML_EXTENSIONS.contains(&ext_lower.as_str()) {
        return Err(Error::UnsupportedExtension(path.display().to_string()));
    }

    Ok(HtmlFormat {
        extension: ext.to_string(),
    })
}

/// Check if a path names an HTML document.
pub fn is_html<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Derive the report path by replacing the input's extension with `csv`.
pub fn output_path_for<P: AsRef<Path>>(input: P) -> PathBuf {
    input.as_ref().with_extension(REPORT_EXTENSION)
}
