//! DOCX writer infrastructure
//!
//! Assembles the ZIP archive with the correct DOCX package structure.

use crate::content_types::{create_default_content_types, ContentTypes};
use crate::document_writer::DocumentWriter;
use crate::error::DocxResult;
use crate::relationships::{create_document_rels, create_root_rels, Relationships};
use crate::styles_writer::StylesWriter;
use crate::Document;
use std::io::{Seek, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Main DOCX writer
pub struct DocxWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
    content_types: ContentTypes,
    root_rels: Relationships,
    doc_rels: Relationships,
}

impl<W: Write + Seek> DocxWriter<W> {
    /// Create a new DOCX writer
    pub fn new(writer: W) -> Self {
        Self {
            zip: ZipWriter::new(writer),
            content_types: create_default_content_types(),
            root_rels: create_root_rels(),
            doc_rels: create_document_rels(),
        }
    }

    /// Write a complete DOCX file from a document
    pub fn write(mut self, doc: &Document) -> DocxResult<()> {
        let doc_xml = DocumentWriter::new().write(doc)?;
        self.write_file("word/document.xml", &doc_xml)?;

        let styles_xml = StylesWriter::new().write()?;
        self.write_file("word/styles.xml", &styles_xml)?;

        self.write_file("word/settings.xml", &generate_settings_xml())?;

        let root_rels_xml = self.root_rels.to_xml();
        self.write_file("_rels/.rels", &root_rels_xml)?;

        let doc_rels_xml = self.doc_rels.to_xml();
        self.write_file("word/_rels/document.xml.rels", &doc_rels_xml)?;

        let content_types_xml = self.content_types.to_xml();
        self.write_file("[Content_Types].xml", &content_types_xml)?;

        self.zip.finish()?;

        Ok(())
    }

    /// Write a file to the ZIP archive
    fn write_file(&mut self, path: &str, content: &str) -> DocxResult<()> {
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        self.zip.start_file(path, options)?;
        self.zip.write_all(content.as_bytes())?;

        Ok(())
    }
}

/// Generate a minimal settings.xml
fn generate_settings_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:settings xmlns:w="{}">
    <w:compat>
        <w:compatSetting w:name="compatibilityMode" w:uri="http://schemas.microsoft.com/office/word" w:val="15"/>
    </w:compat>
</w:settings>"#,
        crate::namespaces::W
    )
}
