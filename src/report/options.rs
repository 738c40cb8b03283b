//! Report options and configuration.

/// Options for building and writing the aggregated report.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Order of lumber-size groups in the output
    pub group_order: GroupOrder,

    /// Field delimiter for delimited output
    pub delimiter: u8,

    /// Emit the header row
    pub include_header: bool,
}

impl ReportOptions {
    /// Create new report options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the group order.
    pub fn with_group_order(mut self, order: GroupOrder) -> Self {
        self.group_order = order;
        self
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Use tab-separated output.
    pub fn tsv(self) -> Self {
        self.with_delimiter(b'\t')
    }

    /// Enable or disable the header row.
    pub fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            group_order: GroupOrder::FirstSeen,
            delimiter: b',',
            include_header: true,
        }
    }
}

/// Ordering of aggregated groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupOrder {
    /// Order in which each lumber size first appears in the document
    #[default]
    FirstSeen,
    /// Sorted by lumber size text
    Lexical,
}
