//! Extracted table row type.

use serde::{Deserialize, Serialize};

/// One non-blank table row as a sequence of trimmed cell texts.
///
/// `index` is the row's position in the extracted sequence. Neighbor rows
/// are located by offsetting this index, so it is stable for the lifetime
/// of a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Position in the extracted row sequence
    pub index: usize,

    /// Trimmed cell texts, in column order
    pub cells: Vec<String>,
}

impl Row {
    /// Create a row from cell texts. Cells are trimmed.
    pub fn new<S: AsRef<str>>(index: usize, cells: impl IntoIterator<Item = S>) -> Self {
        Self {
            index,
            cells: cells
                .into_iter()
                .map(|c| c.as_ref().trim().to_string())
                .collect(),
        }
    }

    /// Get the text of cell `i`, if the row has that many cells.
    pub fn cell(&self, i: usize) -> Option<&str> {
        self.cells.get(i).map(String::as_str)
    }

    /// Get the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if every cell is empty (true for a row with no cells).
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Non-empty cells joined with single spaces.
    pub fn joined_text(&self) -> String {
        self.cells
            .iter()
            .filter(|c| !c.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Get plain text representation (tab separated).
    pub fn plain_text(&self) -> String {
        self.cells.join("\t")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_trims_cells() {
        let row = Row::new(0, ["  2x6 ", "\tSPF\n"]);
        assert_eq!(row.cells, vec!["2x6", "SPF"]);
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn test_row_cell_access() {
        let row = Row::new(3, ["a", "b"]);
        assert_eq!(row.cell(1), Some("b"));
        assert_eq!(row.cell(2), None);
        assert_eq!(row.index, 3);
    }

    #[test]
    fn test_row_blank() {
        assert!(Row::new(0, ["", "  ", "\u{a0}"]).is_blank());
        assert!(Row::new(0, Vec::<String>::new()).is_blank());
        assert!(!Row::new(0, ["", "x"]).is_blank());
    }

    #[test]
    fn test_joined_text_skips_empty_cells() {
        let row = Row::new(0, ["2x6", "", "SPF #2", ""]);
        assert_eq!(row.joined_text(), "2x6 SPF #2");
        assert_eq!(row.plain_text(), "2x6\t\tSPF #2\t");
    }
}
