//! Unit normalization and aggregation by lumber size.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::{AggregatedRecord, LinearMeasurement, RawRecord, TypedRecord};

use super::options::GroupOrder;

/// Convert raw text records to typed records.
///
/// The first field that fails to convert aborts the whole batch.
pub fn normalize(records: &[RawRecord]) -> Result<Vec<TypedRecord>> {
    records
        .iter()
        .map(|raw| {
            TypedRecord::try_from(raw).inspect_err(|e| {
                log::debug!("row {}: {}", raw.source_row, e);
            })
        })
        .collect()
}

/// Running totals for one lumber size.
#[derive(Debug, Default)]
struct Totals {
    quantity: Option<i64>,
    board_footage: Option<f64>,
    lineal: LinearMeasurement,
}

impl Totals {
    fn add(&mut self, record: &TypedRecord) -> Result<()> {
        if let Some(q) = record.quantity {
            let sum = self.quantity.unwrap_or(0).checked_add(q).ok_or_else(|| {
                Error::Other(format!("quantity total for {} overflows", record.lumber_size))
            })?;
            self.quantity = Some(sum);
        }
        if let Some(b) = record.board_footage {
            self.board_footage = Some(self.board_footage.unwrap_or(0.0) + b);
        }
        if let Some(l) = record.lineal_footage {
            self.lineal = self.lineal + l;
        }
        Ok(())
    }

    fn finish(self, lumber_size: String) -> AggregatedRecord {
        AggregatedRecord {
            lumber_size,
            total_quantity: self.quantity.filter(|q| *q != 0),
            total_board_footage: self
                .board_footage
                .map(round_hundredths)
                .filter(|b| *b != 0.0),
            total_lineal_footage: self.lineal.to_display(),
        }
    }
}

/// Round to 2 decimal places, ties to even.
///
/// Ties are judged on the exact binary value: `10.125` is a tie and
/// becomes `10.12`, while `2.675` is stored just below the tie and becomes
/// `2.67`.
pub fn round_hundredths(value: f64) -> f64 {
    let scaled = value * 100.0;
    // Exact error of the multiplication above
    let residual = value.mul_add(100.0, -scaled);

    let rounded = if (scaled - scaled.trunc()).abs() == 0.5 && residual != 0.0 {
        // The product only looks like a tie after rounding
        if residual > 0.0 {
            scaled.ceil()
        } else {
            scaled.floor()
        }
    } else {
        scaled.round_ties_even()
    };

    rounded / 100.0
}

/// Group typed records by exact lumber size and sum each group.
pub fn aggregate(records: &[TypedRecord], order: GroupOrder) -> Result<Vec<AggregatedRecord>> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Totals)> = Vec::new();

    for record in records {
        let pos = *positions
            .entry(record.lumber_size.as_str())
            .or_insert_with(|| {
                groups.push((record.lumber_size.as_str(), Totals::default()));
                groups.len() - 1
            });
        groups[pos].1.add(record)?;
    }

    if order == GroupOrder::Lexical {
        groups.sort_by(|a, b| a.0.cmp(b.0));
    }

    Ok(groups
        .into_iter()
        .map(|(size, totals)| totals.finish(size.to_string()))
        .collect())
}
