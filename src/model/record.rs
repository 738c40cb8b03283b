//! Line-item record types.

use super::LinearMeasurement;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Category of a reconstructed line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Sheet goods tracked by quantity only
    Sheathing,
    /// Dimensional lumber with board and lineal footage
    Dimensional,
}

/// A line item as text, before any numeric conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Size or category descriptor (never empty)
    pub lumber_size: String,

    /// Quantity text
    pub quantity: Option<String>,

    /// Board footage text
    pub board_footage: Option<String>,

    /// Lineal footage text (feet-and-inches)
    pub lineal_footage: Option<String>,

    /// Which row pattern produced this record
    pub kind: ItemKind,

    /// Index of the marker row the record was built from
    pub source_row: usize,
}

impl RawRecord {
    /// Create a record with only a size. Returns `None` if the size is blank.
    pub fn new(kind: ItemKind, source_row: usize, lumber_size: &str) -> Option<Self> {
        let lumber_size = lumber_size.trim();
        if lumber_size.is_empty() {
            return None;
        }
        Some(Self {
            lumber_size: lumber_size.to_string(),
            quantity: None,
            board_footage: None,
            lineal_footage: None,
            kind,
            source_row,
        })
    }

    /// Set the quantity text and return self.
    pub fn quantity(mut self, text: Option<&str>) -> Self {
        self.quantity = non_empty(text);
        self
    }

    /// Set the board footage text and return self.
    pub fn board_footage(mut self, text: Option<&str>) -> Self {
        self.board_footage = non_empty(text);
        self
    }

    /// Set the lineal footage text and return self.
    pub fn lineal_footage(mut self, text: Option<&str>) -> Self {
        self.lineal_footage = non_empty(text);
        self
    }
}

fn non_empty(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// A line item with numeric fields converted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedRecord {
    /// Size or category descriptor
    pub lumber_size: String,

    /// Piece count
    pub quantity: Option<i64>,

    /// Board footage
    pub board_footage: Option<f64>,

    /// Lineal footage
    pub lineal_footage: Option<LinearMeasurement>,
}

impl TryFrom<&RawRecord> for TypedRecord {
    type Error = Error;

    fn try_from(raw: &RawRecord) -> Result<Self> {
        let quantity = raw
            .quantity
            .as_deref()
            .map(|q| {
                q.parse::<i64>()
                    .map_err(|e| Error::coercion("quantity", q, e))
            })
            .transpose()?;

        let board_footage = raw
            .board_footage
            .as_deref()
            .map(|b| {
                b.parse::<f64>()
                    .map_err(|e| Error::coercion("board footage", b, e))
                    .and_then(|v| {
                        if v.is_finite() {
                            Ok(v)
                        } else {
                            Err(Error::coercion("board footage", b, "not a finite number"))
                        }
                    })
            })
            .transpose()?;

        let lineal_footage = raw
            .lineal_footage
            .as_deref()
            .map(LinearMeasurement::parse)
            .transpose()?;

        Ok(Self {
            lumber_size: raw.lumber_size.trim().to_string(),
            quantity,
            board_footage,
            lineal_footage,
        })
    }
}

impl TryFrom<RawRecord> for TypedRecord {
    type Error = Error;

    fn try_from(raw: RawRecord) -> Result<Self> {
        TypedRecord::try_from(&raw)
    }
}

/// Totals for one lumber size.
///
/// Zero or absent totals are `None` and render as empty fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedRecord {
    /// Size or category descriptor
    pub lumber_size: String,

    /// Sum of quantities
    pub total_quantity: Option<i64>,

    /// Sum of board footage, rounded to 2 decimals
    pub total_board_footage: Option<f64>,

    /// Sum of lineal footage as `F' R"` text
    pub total_lineal_footage: Option<String>,
}

impl AggregatedRecord {
    /// Fields in report column order, with `None` as empty text.
    pub fn to_fields(&self) -> [String; 4] {
        [
            self.lumber_size.clone(),
            self.total_quantity.map(|q| q.to_string()).unwrap_or_default(),
            self.total_board_footage
                .map(|b| format!("{:?}", b))
                .unwrap_or_default(),
            self.total_lineal_footage.clone().unwrap_or_default(),
        ]
    }
}
