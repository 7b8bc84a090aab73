//! Tables, rows, and cells

use crate::{Alignment, Paragraph};
use serde::{Deserialize, Serialize};

/// Vertical alignment of cell content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellVerticalAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

/// A table cell holding one or more paragraphs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableCell {
    pub paragraphs: Vec<Paragraph>,
    pub vertical_align: Option<CellVerticalAlign>,
}

impl TableCell {
    /// Create an empty cell with a single empty paragraph
    pub fn new() -> Self {
        Self {
            paragraphs: vec![Paragraph::new()],
            vertical_align: None,
        }
    }

    /// Create a cell containing plain text
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            paragraphs: vec![Paragraph::text(text)],
            vertical_align: None,
        }
    }

    /// Set the vertical alignment
    pub fn valign(mut self, align: CellVerticalAlign) -> Self {
        self.vertical_align = Some(align);
        self
    }

    /// Set alignment on every paragraph in the cell
    pub fn align(mut self, alignment: Alignment) -> Self {
        for para in &mut self.paragraphs {
            para.align(alignment);
        }
        self
    }
}

/// A table row
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
    /// Repeat this row as a header when the table breaks across pages
    pub is_header: bool,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: false,
        }
    }

    /// Mark this row as the header row
    pub fn header(mut self) -> Self {
        self.is_header = true;
        self
    }
}

/// A table with a fixed column count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Table style reference (e.g. "TableGrid")
    pub style_id: Option<String>,
    pub columns: usize,
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create an empty table with the given column count
    pub fn new(columns: usize) -> Self {
        Self {
            style_id: None,
            columns,
            rows: Vec::new(),
        }
    }

    /// Create a table using the bordered grid style
    pub fn grid(columns: usize) -> Self {
        Self {
            style_id: Some("TableGrid".to_string()),
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row; cells beyond the column count are truncated, missing
    /// cells are filled with empty ones
    pub fn add_row(&mut self, mut row: TableRow) -> &mut TableRow {
        row.cells.truncate(self.columns);
        while row.cells.len() < self.columns {
            row.cells.push(TableCell::new());
        }
        self.rows.push(row);
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_row_pads_to_column_count() {
        let mut table = Table::grid(4);
        table.add_row(TableRow::new(vec![TableCell::text("1")]));
        assert_eq!(table.rows[0].cells.len(), 4);
        assert_eq!(table.rows[0].cells[0].paragraphs[0].plain_text(), "1");
    }

    #[test]
    fn grid_table_has_style() {
        let table = Table::grid(2);
        assert_eq!(table.style_id.as_deref(), Some("TableGrid"));
    }
}
