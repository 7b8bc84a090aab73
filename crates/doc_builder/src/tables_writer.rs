//! Table writer for DOCX files
//!
//! Generates w:tbl elements from the document's tables.

use crate::document_writer::{escape_xml, write_paragraph};
use crate::error::DocxResult;
use crate::{CellVerticalAlign, Table, TableCell, TableRow};

/// Writer for table elements
pub struct TableXmlWriter {
    /// Body content width in twips (page width minus the side margins)
    content_width: i32,
}

impl TableXmlWriter {
    /// Create a table writer for a body of the given content width in twips
    pub fn new(content_width: i32) -> Self {
        Self { content_width }
    }

    /// Write a table element
    pub fn write_table(&self, xml: &mut String, table: &Table) -> DocxResult<()> {
        xml.push_str("<w:tbl>");

        self.write_table_properties(xml, table);
        self.write_table_grid(xml, table);

        for row in &table.rows {
            self.write_table_row(xml, table, row)?;
        }

        xml.push_str("</w:tbl>");
        Ok(())
    }

    /// Write table properties
    fn write_table_properties(&self, xml: &mut String, table: &Table) {
        xml.push_str("<w:tblPr>");

        if let Some(ref style) = table.style_id {
            xml.push_str(&format!(r#"<w:tblStyle w:val="{}"/>"#, escape_xml(style)));
        }

        xml.push_str(r#"<w:tblW w:w="0" w:type="auto"/>"#);

        // Default cell margins
        xml.push_str("<w:tblCellMar>");
        xml.push_str(r#"<w:top w:w="0" w:type="dxa"/>"#);
        xml.push_str(r#"<w:left w:w="108" w:type="dxa"/>"#);
        xml.push_str(r#"<w:bottom w:w="0" w:type="dxa"/>"#);
        xml.push_str(r#"<w:right w:w="108" w:type="dxa"/>"#);
        xml.push_str("</w:tblCellMar>");

        xml.push_str(
            r#"<w:tblLook w:val="04A0" w:firstRow="1" w:lastRow="0" w:firstColumn="1" w:lastColumn="0" w:noHBand="0" w:noVBand="1"/>"#,
        );

        xml.push_str("</w:tblPr>");
    }

    /// Write the table grid; columns share the content width equally
    fn write_table_grid(&self, xml: &mut String, table: &Table) {
        xml.push_str("<w:tblGrid>");

        if table.columns > 0 {
            let col_width = self.content_width / table.columns as i32;
            for _ in 0..table.columns {
                xml.push_str(&format!(r#"<w:gridCol w:w="{}"/>"#, col_width));
            }
        }

        xml.push_str("</w:tblGrid>");
    }

    /// Write a table row
    fn write_table_row(&self, xml: &mut String, table: &Table, row: &TableRow) -> DocxResult<()> {
        xml.push_str("<w:tr>");

        if row.is_header {
            xml.push_str("<w:trPr><w:tblHeader/></w:trPr>");
        }

        for cell in &row.cells {
            self.write_table_cell(xml, table, cell)?;
        }

        xml.push_str("</w:tr>");
        Ok(())
    }

    /// Write a table cell
    fn write_table_cell(&self, xml: &mut String, table: &Table, cell: &TableCell) -> DocxResult<()> {
        xml.push_str("<w:tc>");

        self.write_cell_properties(xml, table, cell);

        for para in &cell.paragraphs {
            write_paragraph(xml, para)?;
        }

        // A cell must contain at least one paragraph
        if cell.paragraphs.is_empty() {
            xml.push_str("<w:p/>");
        }

        xml.push_str("</w:tc>");
        Ok(())
    }

    /// Write cell properties
    fn write_cell_properties(&self, xml: &mut String, table: &Table, cell: &TableCell) {
        xml.push_str("<w:tcPr>");

        if table.columns > 0 {
            let col_width = self.content_width / table.columns as i32;
            xml.push_str(&format!(r#"<w:tcW w:w="{}" w:type="dxa"/>"#, col_width));
        }

        if let Some(valign) = cell.vertical_align {
            let val = match valign {
                CellVerticalAlign::Top => "top",
                CellVerticalAlign::Center => "center",
                CellVerticalAlign::Bottom => "bottom",
            };
            xml.push_str(&format!(r#"<w:vAlign w:val="{}"/>"#, val));
        }

        xml.push_str("</w:tcPr>");
    }
}
