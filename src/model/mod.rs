//! Data model for order extraction.
//!
//! Rows flow through three record shapes: text-only [`RawRecord`]s built
//! from the row pattern, [`TypedRecord`]s with numeric fields converted, and
//! one [`AggregatedRecord`] per lumber size in the final report.

mod measure;
mod record;
mod row;

pub use measure::{to_feet_and_inches, to_inches, LinearMeasurement, INCHES_PER_FOOT};
pub use record::{AggregatedRecord, ItemKind, RawRecord, TypedRecord};
pub use row::Row;
