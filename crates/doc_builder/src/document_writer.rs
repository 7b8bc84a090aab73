//! document.xml writer
//!
//! Converts the document body to DOCX document.xml format.

use crate::error::DocxResult;
use crate::tables_writer::TableXmlWriter;
use crate::{namespaces, Alignment, BodyElement, Document, LineSpacing, Paragraph, Run};

/// A4 portrait page dimensions in twips
const A4_WIDTH_TWIPS: i32 = 11906;
const A4_HEIGHT_TWIPS: i32 = 16838;

/// Writer for document.xml
pub struct DocumentWriter;

impl DocumentWriter {
    /// Create a new document writer
    pub fn new() -> Self {
        Self
    }

    /// Generate document.xml content
    pub fn write(&self, doc: &Document) -> DocxResult<String> {
        let mut xml = String::new();

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');

        xml.push_str(&format!(
            r#"<w:document xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R,
        ));

        xml.push_str("<w:body>");

        let table_writer = TableXmlWriter::new(content_width_twips(doc));
        for element in &doc.body {
            match element {
                BodyElement::Paragraph(para) => write_paragraph(&mut xml, para)?,
                BodyElement::Table(table) => table_writer.write_table(&mut xml, table)?,
            }
        }

        self.write_section_properties(&mut xml, doc);

        xml.push_str("</w:body>");
        xml.push_str("</w:document>");

        Ok(xml)
    }

    /// Write the trailing section properties (page size and margins)
    fn write_section_properties(&self, xml: &mut String, doc: &Document) {
        let margins = &doc.page_margins;

        xml.push_str("<w:sectPr>");
        xml.push_str(&format!(
            r#"<w:pgSz w:w="{}" w:h="{}"/>"#,
            A4_WIDTH_TWIPS, A4_HEIGHT_TWIPS
        ));
        xml.push_str(&format!(
            r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="708" w:footer="708" w:gutter="0"/>"#,
            (margins.top * 20.0) as i32,
            (margins.right * 20.0) as i32,
            (margins.bottom * 20.0) as i32,
            (margins.left * 20.0) as i32,
        ));
        xml.push_str("</w:sectPr>");
    }
}

impl Default for DocumentWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Page width minus the side margins, truncated the same way the
/// `w:pgMar` values are
fn content_width_twips(doc: &Document) -> i32 {
    let margins = &doc.page_margins;
    A4_WIDTH_TWIPS - (margins.left * 20.0) as i32 - (margins.right * 20.0) as i32
}

/// Write a paragraph element
pub(crate) fn write_paragraph(xml: &mut String, para: &Paragraph) -> DocxResult<()> {
    xml.push_str("<w:p>");

    write_paragraph_properties(xml, para);

    for run in &para.runs {
        write_run(xml, run)?;
    }

    xml.push_str("</w:p>");
    Ok(())
}

/// Write paragraph properties
fn write_paragraph_properties(xml: &mut String, para: &Paragraph) {
    let props = &para.formatting;
    let has_style = para.style_id.is_some();

    if !has_style && props.is_empty() {
        return;
    }

    xml.push_str("<w:pPr>");

    if let Some(ref style) = para.style_id {
        xml.push_str(&format!(r#"<w:pStyle w:val="{}"/>"#, escape_xml(style)));
    }

    if let Some(alignment) = props.alignment {
        let val = match alignment {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "both",
        };
        xml.push_str(&format!(r#"<w:jc w:val="{}"/>"#, val));
    }

    if let Some(line_spacing) = props.line_spacing {
        match line_spacing {
            LineSpacing::Multiple(mult) => {
                xml.push_str(&format!(
                    r#"<w:spacing w:line="{}" w:lineRule="auto"/>"#,
                    (mult * 240.0) as i32
                ));
            }
            LineSpacing::Exact(pts) => {
                xml.push_str(&format!(
                    r#"<w:spacing w:line="{}" w:lineRule="exact"/>"#,
                    (pts * 20.0) as i32
                ));
            }
            LineSpacing::AtLeast(pts) => {
                xml.push_str(&format!(
                    r#"<w:spacing w:line="{}" w:lineRule="atLeast"/>"#,
                    (pts * 20.0) as i32
                ));
            }
        }
    }

    xml.push_str("</w:pPr>");
}

/// Write a run element; `'\n'` in the run text becomes `w:br`
pub(crate) fn write_run(xml: &mut String, run: &Run) -> DocxResult<()> {
    xml.push_str("<w:r>");

    write_run_properties(xml, run);

    let mut parts = run.text.split('\n').peekable();
    while let Some(part) = parts.next() {
        if !part.is_empty() {
            // xml:space="preserve" keeps leading/trailing spaces intact
            let needs_preserve = part.starts_with(' ') || part.ends_with(' ');
            if needs_preserve {
                xml.push_str(r#"<w:t xml:space="preserve">"#);
            } else {
                xml.push_str("<w:t>");
            }
            xml.push_str(&escape_xml(part));
            xml.push_str("</w:t>");
        }
        if parts.peek().is_some() {
            xml.push_str("<w:br/>");
        }
    }

    xml.push_str("</w:r>");
    Ok(())
}

/// Write run properties
fn write_run_properties(xml: &mut String, run: &Run) {
    let props = &run.formatting;

    if props.is_empty() {
        return;
    }

    xml.push_str("<w:rPr>");

    if let Some(ref font) = props.font_family {
        xml.push_str(&format!(
            r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:cs="{0}"/>"#,
            escape_xml(font)
        ));
    }

    if let Some(bold) = props.bold {
        if bold {
            xml.push_str("<w:b/>");
        } else {
            xml.push_str(r#"<w:b w:val="0"/>"#);
        }
    }

    if let Some(italic) = props.italic {
        if italic {
            xml.push_str("<w:i/>");
        } else {
            xml.push_str(r#"<w:i w:val="0"/>"#);
        }
    }

    // Font size in half-points
    if let Some(size) = props.font_size {
        let half_pts = (size * 2.0) as i32;
        xml.push_str(&format!(r#"<w:sz w:val="{}"/>"#, half_pts));
        xml.push_str(&format!(r#"<w:szCs w:val="{}"/>"#, half_pts));
    }

    if let Some(ref color) = props.color {
        let color_val = color.trim_start_matches('#');
        xml.push_str(&format!(r#"<w:color w:val="{}"/>"#, color_val));
    }

    xml.push_str("</w:rPr>");
}

/// Escape special XML characters
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
