//! Report building and output.
//!
//! Raw records are normalized to typed values, grouped by lumber size and
//! summed, then written as delimited text or JSON.

mod aggregate;
mod delimited;
mod json;
mod options;
mod result;

pub use aggregate::{aggregate, normalize, round_hundredths};
pub use delimited::{save_csv, to_csv, write_csv, HEADER};
pub use json::{to_json, JsonFormat};
pub use options::{GroupOrder, ReportOptions};
pub use result::{ExtractionStats, Report};

use crate::error::Result;
use crate::model::RawRecord;

/// Normalize and aggregate raw records into a report.
///
/// `stats` carries the counts from reconstruction; the group count is
/// filled in here.
pub fn build_report(
    records: &[RawRecord],
    mut stats: ExtractionStats,
    options: &ReportOptions,
) -> Result<Report> {
    let typed = normalize(records)?;
    let aggregated = aggregate(&typed, options.group_order)?;
    stats.group_count = aggregated.len() as u32;

    log::info!(
        "Aggregated {} line items into {} lumber sizes",
        records.len(),
        aggregated.len()
    );

    Ok(Report::new(aggregated, stats))
}
