//! Aggregated report with statistics.

use crate::model::AggregatedRecord;
use serde::{Deserialize, Serialize};

/// Result of converting an order document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    /// One record per lumber size, in group order
    pub records: Vec<AggregatedRecord>,

    /// Extraction statistics
    pub stats: ExtractionStats,
}

impl Report {
    /// Create a new report.
    pub fn new(records: Vec<AggregatedRecord>, stats: ExtractionStats) -> Self {
        Self { records, stats }
    }

    /// Get the number of lumber-size groups.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the report has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find the record for a lumber size.
    pub fn get(&self, lumber_size: &str) -> Option<&AggregatedRecord> {
        self.records.iter().find(|r| r.lumber_size == lumber_size)
    }
}

/// Statistics collected during extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Non-blank table rows scanned
    pub row_count: u32,

    /// Marker rows found
    pub marker_count: u32,

    /// Sheathing line items
    pub sheathing_count: u32,

    /// Dimensional lumber line items
    pub dimensional_count: u32,

    /// Data rows whose footage sat one column right
    pub shifted_count: u32,

    /// Distinct lumber sizes in the report
    pub group_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total line items reconstructed.
    pub fn record_count(&self) -> u32 {
        self.sheathing_count + self.dimensional_count
    }
}
