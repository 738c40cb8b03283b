//! Table row extraction from an HTML tree.
//!
//! Every `<tr>` in the document is visited in document order, which is
//! table order and then row order within each table. A row's cells are its
//! `<td>`/`<th>` children; each cell contributes its trimmed descendant
//! text. Rows where every cell is empty are dropped before indexing.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Error, Result};
use crate::model::Row;

/// Extract the non-blank table rows of a parsed document.
pub fn extract_rows(document: &Html) -> Result<Vec<Row>> {
    let tr = Selector::parse("tr").map_err(|e| Error::HtmlParse(format!("{:?}", e)))?;

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for element in document.select(&tr) {
        let cells = row_cells(element);
        let row = Row::new(rows.len(), cells);
        if row.is_blank() {
            skipped += 1;
            continue;
        }
        rows.push(row);
    }

    log::debug!(
        "RowExtractor: kept {} rows, skipped {} blank rows",
        rows.len(),
        skipped
    );

    Ok(rows)
}

/// Text of each `<td>`/`<th>` directly under a `<tr>`.
fn row_cells(row: ElementRef<'_>) -> Vec<String> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| matches!(el.value().name(), "td" | "th"))
        .map(|cell| cell.text().collect::<String>())
        .collect()
}
