//! Doc Builder - document object model and DOCX packaging
//!
//! This crate provides a small write-only document model (paragraphs, runs,
//! tables, page margins) and serializes it as a Microsoft Word DOCX file.
//! DOCX is based on the Office Open XML (OOXML) format defined in ECMA-376.
//!
//! ## Package structure
//!
//! A DOCX file is a ZIP archive containing XML files:
//! - `[Content_Types].xml` - Content type definitions
//! - `_rels/.rels` - Root relationships
//! - `word/document.xml` - Main document content
//! - `word/styles.xml` - Style definitions
//! - `word/settings.xml` - Document settings
//! - `word/_rels/document.xml.rels` - Document relationships

mod content_types;
mod document;
mod document_writer;
mod error;
mod paragraph;
mod reader;
mod relationships;
mod style;
mod styles_writer;
mod table;
mod tables_writer;
mod writer;

pub use content_types::{create_default_content_types, ContentTypes};
pub use document::{BodyElement, Document, PageMargins};
pub use error::{DocxError, DocxResult};
pub use paragraph::{Paragraph, Run};
pub use relationships::{
    create_document_rels, create_root_rels, Relationship, Relationships, TargetMode,
};
pub use style::{Alignment, CharacterProperties, LineSpacing, ParagraphProperties};
pub use table::{CellVerticalAlign, Table, TableCell, TableRow};
pub use writer::DocxWriter;

/// XML namespaces used in DOCX files
pub mod namespaces {
    /// Main WordprocessingML namespace
    pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
    /// Relationships namespace
    pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
    /// Package relationships namespace
    pub const PKG_REL: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
    /// Content types namespace
    pub const CT: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
}

/// Relationship types used in DOCX
pub mod relationship_types {
    pub const DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    pub const SETTINGS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/settings";
}

/// Content types for DOCX parts
pub mod content_type_values {
    pub const DOCUMENT: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
    pub const STYLES: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
    pub const SETTINGS: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml";
    pub const RELATIONSHIPS: &str =
        "application/vnd.openxmlformats-package.relationships+xml";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_structure() {
        assert!(namespaces::W.contains("wordprocessingml"));
    }
}
