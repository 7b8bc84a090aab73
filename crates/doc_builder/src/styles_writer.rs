//! styles.xml writer
//!
//! Generates the built-in styles the document body references.

use crate::error::DocxResult;
use crate::namespaces;

/// Writer for styles.xml
pub struct StylesWriter;

impl StylesWriter {
    /// Create a new styles writer
    pub fn new() -> Self {
        Self
    }

    /// Generate styles.xml content
    pub fn write(&self) -> DocxResult<String> {
        let mut xml = String::new();

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');

        xml.push_str(&format!(
            r#"<w:styles xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R,
        ));

        self.write_doc_defaults(&mut xml);
        self.write_paragraph_styles(&mut xml);
        self.write_table_styles(&mut xml);

        xml.push_str("</w:styles>");
        Ok(xml)
    }

    /// Write document defaults
    fn write_doc_defaults(&self, xml: &mut String) {
        xml.push_str("<w:docDefaults>");

        xml.push_str("<w:rPrDefault>");
        xml.push_str("<w:rPr>");
        xml.push_str(r#"<w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:cs="Calibri"/>"#);
        xml.push_str(r#"<w:sz w:val="22"/>"#);
        xml.push_str(r#"<w:szCs w:val="22"/>"#);
        xml.push_str("</w:rPr>");
        xml.push_str("</w:rPrDefault>");

        xml.push_str("<w:pPrDefault>");
        xml.push_str("<w:pPr>");
        xml.push_str(r#"<w:spacing w:after="160" w:line="259" w:lineRule="auto"/>"#);
        xml.push_str("</w:pPr>");
        xml.push_str("</w:pPrDefault>");

        xml.push_str("</w:docDefaults>");
    }

    /// Write the built-in paragraph styles the exports reference
    fn write_paragraph_styles(&self, xml: &mut String) {
        // Normal
        xml.push_str(r#"<w:style w:type="paragraph" w:styleId="Normal" w:default="1">"#);
        xml.push_str(r#"<w:name w:val="Normal"/>"#);
        xml.push_str("</w:style>");

        // Title (heading level 0)
        xml.push_str(r#"<w:style w:type="paragraph" w:styleId="Title">"#);
        xml.push_str(r#"<w:name w:val="Title"/>"#);
        xml.push_str(r#"<w:basedOn w:val="Normal"/>"#);
        xml.push_str(r#"<w:next w:val="Normal"/>"#);
        xml.push_str("<w:pPr>");
        xml.push_str(r#"<w:spacing w:after="120"/>"#);
        xml.push_str("<w:keepNext/>");
        xml.push_str("</w:pPr>");
        xml.push_str("<w:rPr>");
        xml.push_str(r#"<w:sz w:val="52"/>"#);
        xml.push_str(r#"<w:szCs w:val="52"/>"#);
        xml.push_str("</w:rPr>");
        xml.push_str("</w:style>");

        // Heading 1
        xml.push_str(r#"<w:style w:type="paragraph" w:styleId="Heading1">"#);
        xml.push_str(r#"<w:name w:val="heading 1"/>"#);
        xml.push_str(r#"<w:basedOn w:val="Normal"/>"#);
        xml.push_str(r#"<w:next w:val="Normal"/>"#);
        xml.push_str("<w:pPr>");
        xml.push_str(r#"<w:spacing w:before="240" w:after="120"/>"#);
        xml.push_str("<w:keepNext/>");
        xml.push_str("<w:outlineLvl w:val=\"0\"/>");
        xml.push_str("</w:pPr>");
        xml.push_str("<w:rPr>");
        xml.push_str("<w:b/>");
        xml.push_str(r#"<w:sz w:val="32"/>"#);
        xml.push_str(r#"<w:szCs w:val="32"/>"#);
        xml.push_str("</w:rPr>");
        xml.push_str("</w:style>");
    }

    /// Write the bordered grid table style
    fn write_table_styles(&self, xml: &mut String) {
        xml.push_str(r#"<w:style w:type="table" w:styleId="TableGrid">"#);
        xml.push_str(r#"<w:name w:val="Table Grid"/>"#);
        xml.push_str("<w:tblPr>");
        xml.push_str("<w:tblBorders>");
        for edge in ["top", "left", "bottom", "right", "insideH", "insideV"] {
            xml.push_str(&format!(
                r#"<w:{0} w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
                edge
            ));
        }
        xml.push_str("</w:tblBorders>");
        xml.push_str("</w:tblPr>");
        xml.push_str("</w:style>");
    }
}

impl Default for StylesWriter {
    fn default() -> Self {
        Self::new()
    }
}
