//! Line-item reconstruction from the extracted row sequence.
//!
//! Order tables spread one line item over several physical rows. A marker
//! row (a "SKU" label in cell 1) opens each item; its neighbors carry the
//! data:
//!
//! ```text
//!   row i-1   2x6 SPF #2                  <- size (dimensional only)
//!   row i     _ | SKU 1234 | Lumber | ...  <- marker
//!   row i+1   _ | _ | qty | ... | bf | lf  <- data
//! ```
//!
//! Sheathing items (cell 2 of the marker mentions "Sheathing") read both
//! size and quantity from the data row and carry no footage.
//!
//! The scan is a small state machine: after a marker it expects exactly one
//! data row, which is consumed and never examined as a marker itself.

use crate::error::{Error, Result};
use crate::model::{ItemKind, RawRecord, Row};
use crate::report::ExtractionStats;

use super::options::{ParseOptions, SizePolicy};

const QUANTITY_CELL: usize = 2;
const SHEATHING_SIZE_CELL: usize = 2;
const SHEATHING_QUANTITY_CELL: usize = 3;
const BOARD_FOOTAGE_CELL: usize = 6;

/// Scanner state between rows.
#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    /// Looking for the next marker row
    ExpectMarker,
    /// The previous row was a sheathing marker
    ExpectSheathingData { marker: usize },
    /// The previous row was a dimensional marker with footage columns
    ExpectDimensionalData { marker: usize, lumber_size: String },
}

/// Builds [`RawRecord`]s from rows.
pub struct RecordReconstructor<'a> {
    options: &'a ParseOptions,
    stats: ExtractionStats,
    last_size: Option<String>,
}

impl<'a> RecordReconstructor<'a> {
    /// Create a reconstructor with the given options.
    pub fn new(options: &'a ParseOptions) -> Self {
        Self {
            options,
            stats: ExtractionStats::new(),
            last_size: None,
        }
    }

    /// Statistics for the rows processed so far.
    pub fn stats(&self) -> &ExtractionStats {
        &self.stats
    }

    /// Consume the reconstructor, returning its statistics.
    pub fn into_stats(self) -> ExtractionStats {
        self.stats
    }

    /// Check if a row opens a line item.
    pub fn is_marker(&self, row: &Row) -> bool {
        row.len() >= 2
            && row
                .cell(1)
                .is_some_and(|c| c.contains(self.options.marker_label.as_str()))
    }

    /// Check if a marker row opens a sheathing item.
    pub fn is_sheathing(&self, marker: &Row) -> bool {
        marker
            .cell(2)
            .is_some_and(|c| c.contains(self.options.sheathing_label.as_str()))
    }

    /// Scan all rows and return the records in row order.
    ///
    /// Any layout mismatch aborts the whole scan.
    pub fn reconstruct(&mut self, rows: &[Row]) -> Result<Vec<RawRecord>> {
        let mut records = Vec::new();
        let mut state = State::ExpectMarker;

        self.stats.row_count += rows.len() as u32;

        for (i, row) in rows.iter().enumerate() {
            state = match state {
                State::ExpectMarker => self.visit(rows, i, &mut records)?,
                State::ExpectSheathingData { marker } => {
                    records.push(self.sheathing_record(marker, row)?);
                    State::ExpectMarker
                }
                State::ExpectDimensionalData {
                    marker,
                    lumber_size,
                } => {
                    records.push(self.dimensional_record(marker, lumber_size, row)?);
                    State::ExpectMarker
                }
            };
        }

        match state {
            State::ExpectMarker => {}
            State::ExpectSheathingData { marker }
            | State::ExpectDimensionalData { marker, .. } => {
                return Err(Error::layout(
                    marker,
                    "marker is the last row; no data row follows",
                ));
            }
        }

        log::debug!(
            "RecordReconstructor: {} markers, {} records ({} sheathing, {} dimensional)",
            self.stats.marker_count,
            records.len(),
            self.stats.sheathing_count,
            self.stats.dimensional_count
        );

        Ok(records)
    }

    /// Handle a row while expecting a marker.
    fn visit(&mut self, rows: &[Row], i: usize, records: &mut Vec<RawRecord>) -> Result<State> {
        let row = &rows[i];
        if !self.is_marker(row) {
            return Ok(State::ExpectMarker);
        }
        self.stats.marker_count += 1;

        if self.is_sheathing(row) {
            log::debug!("row {}: sheathing marker", i);
            return Ok(State::ExpectSheathingData { marker: i });
        }

        let lumber_size = self.preceding_size(rows, i)?;
        log::debug!("row {}: dimensional marker for {:?}", i, lumber_size);

        if row.len() >= self.options.min_dimensional_cells {
            return Ok(State::ExpectDimensionalData {
                marker: i,
                lumber_size,
            });
        }

        // Narrow marker: no footage columns, nothing to read from the next row
        let record = self.finish(RawRecord::new(ItemKind::Dimensional, i, &lumber_size), i)?;
        records.push(record);
        Ok(State::ExpectMarker)
    }

    /// Size text for a dimensional item, from the row before the marker.
    fn preceding_size(&self, rows: &[Row], marker: usize) -> Result<String> {
        let joined = marker
            .checked_sub(1)
            .and_then(|p| rows.get(p))
            .map(Row::joined_text)
            .filter(|s| !s.is_empty());

        if let Some(size) = joined {
            return Ok(size);
        }

        match self.options.size_policy {
            SizePolicy::FailFast => Err(Error::layout(
                marker,
                "no size row before dimensional item",
            )),
            SizePolicy::CarryForward => match &self.last_size {
                Some(size) => {
                    log::warn!(
                        "row {}: no size row before dimensional item, reusing {:?}",
                        marker,
                        size
                    );
                    Ok(size.clone())
                }
                None => Err(Error::layout(
                    marker,
                    "no size row before dimensional item and no earlier size to reuse",
                )),
            },
        }
    }

    fn sheathing_record(&mut self, marker: usize, data: &Row) -> Result<RawRecord> {
        let size = required_cell(marker, data, SHEATHING_SIZE_CELL)?;
        let quantity = required_cell(marker, data, SHEATHING_QUANTITY_CELL)?;

        let record =
            RawRecord::new(ItemKind::Sheathing, marker, size).map(|r| r.quantity(Some(quantity)));
        self.finish(record, marker)
    }

    fn dimensional_record(
        &mut self,
        marker: usize,
        lumber_size: String,
        data: &Row,
    ) -> Result<RawRecord> {
        let quantity = required_cell(marker, data, QUANTITY_CELL)?;
        let board = required_cell(marker, data, BOARD_FOOTAGE_CELL)?;

        // An empty board footage cell means the footage pair sits one column right
        let (board_footage, lineal_footage) = if board.is_empty() {
            self.stats.shifted_count += 1;
            (
                required_cell(marker, data, BOARD_FOOTAGE_CELL + 1)?,
                required_cell(marker, data, BOARD_FOOTAGE_CELL + 2)?,
            )
        } else {
            (board, required_cell(marker, data, BOARD_FOOTAGE_CELL + 1)?)
        };

        let record = RawRecord::new(ItemKind::Dimensional, marker, &lumber_size).map(|r| {
            r.quantity(Some(quantity))
                .board_footage(Some(board_footage))
                .lineal_footage(Some(lineal_footage))
        });
        self.finish(record, marker)
    }

    /// Count a built record and remember its size.
    fn finish(&mut self, record: Option<RawRecord>, marker: usize) -> Result<RawRecord> {
        let record = record.ok_or_else(|| Error::layout(marker, "line item has no size"))?;
        match record.kind {
            ItemKind::Sheathing => self.stats.sheathing_count += 1,
            ItemKind::Dimensional => self.stats.dimensional_count += 1,
        }
        self.last_size = Some(record.lumber_size.clone());
        Ok(record)
    }
}

fn required_cell(marker: usize, data: &Row, i: usize) -> Result<&str> {
    data.cell(i).ok_or_else(|| {
        Error::layout(
            marker,
            format!(
                "data row {} has {} cells, expected cell {}",
                data.index,
                data.len(),
                i
            ),
        )
    })
}

/// Reconstruct records from rows with the given options.
pub fn reconstruct(rows: &[Row], options: &ParseOptions) -> Result<Vec<RawRecord>> {
    RecordReconstructor::new(options).reconstruct(rows)
}
