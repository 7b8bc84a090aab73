//! [Content_Types].xml generation and parsing
//!
//! This part declares the content types for everything in the DOCX package.

use crate::error::{DocxError, DocxResult};
use crate::{content_type_values, reader};
use quick_xml::events::Event;
use std::collections::BTreeMap;

/// Represents the content types in a DOCX package
#[derive(Debug, Clone, Default)]
pub struct ContentTypes {
    /// Default content types by extension (e.g., "xml" -> "application/xml")
    pub defaults: BTreeMap<String, String>,
    /// Override content types by part name (e.g., "/word/document.xml" -> "...")
    pub overrides: BTreeMap<String, String>,
}

impl ContentTypes {
    /// Create a new ContentTypes with the standard defaults
    pub fn new() -> Self {
        let mut ct = Self::default();

        ct.defaults.insert(
            "rels".to_string(),
            content_type_values::RELATIONSHIPS.to_string(),
        );
        ct.defaults
            .insert("xml".to_string(), "application/xml".to_string());

        ct
    }

    /// Parse [Content_Types].xml from its content
    pub fn parse(content: &str) -> DocxResult<Self> {
        let mut result = Self::default();
        let mut xml_reader = reader::from_string(content);
        let mut buf = Vec::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                    let name = e.name();
                    if reader::matches_element(name.as_ref(), "Default") {
                        if let (Some(ext), Some(ct)) = (
                            reader::get_attribute(e, b"Extension"),
                            reader::get_attribute(e, b"ContentType"),
                        ) {
                            result.defaults.insert(ext, ct);
                        }
                    } else if reader::matches_element(name.as_ref(), "Override") {
                        if let (Some(part), Some(ct)) = (
                            reader::get_attribute(e, b"PartName"),
                            reader::get_attribute(e, b"ContentType"),
                        ) {
                            result.overrides.insert(part, ct);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(DocxError::from(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(result)
    }

    /// Get the content type for a given path
    pub fn get_content_type(&self, path: &str) -> Option<&String> {
        let normalized = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        if let Some(ct) = self.overrides.get(&normalized) {
            return Some(ct);
        }

        path.rsplit('.').next().and_then(|ext| self.defaults.get(ext))
    }

    /// Add an override for a specific part
    pub fn add_override(&mut self, part_name: &str, content_type: &str) {
        let normalized = if part_name.starts_with('/') {
            part_name.to_string()
        } else {
            format!("/{}", part_name)
        };
        self.overrides.insert(normalized, content_type.to_string());
    }

    /// Generate XML content for [Content_Types].xml
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<Types xmlns="{}">"#, crate::namespaces::CT));

        for (ext, ct) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                ext, ct
            ));
        }

        for (part, ct) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                part, ct
            ));
        }

        xml.push_str("</Types>");
        xml
    }
}

/// Create the content types for a new DOCX file
pub fn create_default_content_types() -> ContentTypes {
    let mut ct = ContentTypes::new();

    ct.add_override("/word/document.xml", content_type_values::DOCUMENT);
    ct.add_override("/word/styles.xml", content_type_values::STYLES);
    ct.add_override("/word/settings.xml", content_type_values::SETTINGS);

    ct
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types_creation() {
        let ct = ContentTypes::new();
        assert!(ct.defaults.contains_key("rels"));
        assert!(ct.defaults.contains_key("xml"));
    }

    #[test]
    fn test_get_content_type() {
        let ct = create_default_content_types();

        assert!(ct.get_content_type("/word/document.xml").is_some());
        assert!(ct.get_content_type("word/document.xml").is_some());
        assert!(ct.get_content_type("test.xml").is_some());
        assert!(ct.get_content_type("word/unknown.bin").is_none());
    }

    #[test]
    fn test_to_xml_roundtrip() {
        let original = create_default_content_types();
        let xml = original.to_xml();
        let parsed = ContentTypes::parse(&xml).unwrap();

        assert_eq!(original.defaults, parsed.defaults);
        assert_eq!(original.overrides, parsed.overrides);
    }
}
