//! Error types for lumbertab library.

use std::io;
use thiserror::Error;

/// Result type alias for lumbertab operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting an order document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file does not carry an HTML extension.
    #[error("Unsupported input file: {0} (expected .html or .htm)")]
    UnsupportedExtension(String),

    /// The markup could not be decoded or parsed into a tree.
    #[error("HTML parsing error: {0}")]
    HtmlParse(String),

    /// A marker row's neighbor row or a required cell is missing.
    #[error("Layout mismatch at row {row}: {reason}")]
    LayoutMismatch {
        /// Index of the marker row in the extracted row sequence
        row: usize,
        /// What was expected and not found
        reason: String,
    },

    /// A field could not be converted to its typed value.
    #[error("Cannot read {field} from {value:?}: {reason}")]
    Coercion {
        /// Field name (e.g. "quantity")
        field: &'static str,
        /// The offending text
        value: String,
        /// Why the conversion failed
        reason: String,
    },

    /// Error writing the CSV report.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    pub(crate) fn layout(row: usize, reason: impl Into<String>) -> Self {
        Error::LayoutMismatch {
            row,
            reason: reason.into(),
        }
    }

    pub(crate) fn coercion(
        field: &'static str,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Error::Coercion {
            field,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<tempfile::PersistError> for Error {
    fn from(err: tempfile::PersistError) -> Self {
        Error::Io(err.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::layout(4, "no data row after marker");
        assert_eq!(
            err.to_string(),
            "Layout mismatch at row 4: no data row after marker"
        );

        let err = Error::UnsupportedExtension("order.pdf".to_string());
        assert_eq!(
            err.to_string(),
            "Unsupported input file: order.pdf (expected .html or .htm)"
        );
    }

    #[test]
    fn test_coercion_display() {
        let err = Error::coercion("quantity", "ten", "invalid digit found in string");
        assert_eq!(
            err.to_string(),
            "Cannot read quantity from \"ten\": invalid digit found in string"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
