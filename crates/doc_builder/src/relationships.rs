//! Relationships (.rels) file generation and parsing
//!
//! DOCX uses relationships to connect parts of the package together.

use crate::error::{DocxError, DocxResult};
use crate::{reader, relationship_types};
use quick_xml::events::Event;
use std::collections::HashMap;

/// A single relationship in a .rels file
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Unique ID within the rels file (e.g., "rId1")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target path (relative to the source part)
    pub target: String,
    /// Target mode (internal or external)
    pub target_mode: TargetMode,
}

/// Target mode for relationships
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TargetMode {
    /// Internal target within the package
    #[default]
    Internal,
    /// External target (URL)
    External,
}

/// Collection of relationships from a .rels file
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    relationships: HashMap<String, Relationship>,
    next_id: u32,
}

impl Relationships {
    /// Create a new empty relationships collection
    pub fn new() -> Self {
        Self {
            relationships: HashMap::new(),
            next_id: 1,
        }
    }

    /// Parse a .rels file from its XML content
    pub fn parse(content: &str) -> DocxResult<Self> {
        let mut result = Self::new();
        let mut xml_reader = reader::from_string(content);
        let mut buf = Vec::new();
        let mut max_id = 0u32;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                    let name = e.name();
                    if reader::matches_element(name.as_ref(), "Relationship") {
                        let id = reader::get_attribute(e, b"Id").ok_or_else(|| {
                            DocxError::InvalidStructure("Relationship missing Id".into())
                        })?;
                        let rel_type = reader::get_attribute(e, b"Type").ok_or_else(|| {
                            DocxError::InvalidStructure("Relationship missing Type".into())
                        })?;
                        let target = reader::get_attribute(e, b"Target").ok_or_else(|| {
                            DocxError::InvalidStructure("Relationship missing Target".into())
                        })?;
                        let target_mode = reader::get_attribute(e, b"TargetMode")
                            .map(|m| {
                                if m == "External" {
                                    TargetMode::External
                                } else {
                                    TargetMode::Internal
                                }
                            })
                            .unwrap_or_default();

                        if let Some(num) =
                            id.strip_prefix("rId").and_then(|n| n.parse::<u32>().ok())
                        {
                            max_id = max_id.max(num);
                        }

                        result.relationships.insert(
                            id.clone(),
                            Relationship {
                                id,
                                rel_type,
                                target,
                                target_mode,
                            },
                        );
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(DocxError::from(e)),
                _ => {}
            }
            buf.clear();
        }

        result.next_id = max_id + 1;
        Ok(result)
    }

    /// Add a relationship and return its ID
    pub fn add(&mut self, rel_type: &str, target: &str, target_mode: TargetMode) -> String {
        let id = format!("rId{}", self.next_id);
        self.next_id += 1;

        self.relationships.insert(
            id.clone(),
            Relationship {
                id: id.clone(),
                rel_type: rel_type.to_string(),
                target: target.to_string(),
                target_mode,
            },
        );

        id
    }

    /// Get a relationship by ID
    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.relationships.get(id)
    }

    /// Get a relationship by type
    pub fn get_by_type(&self, rel_type: &str) -> Option<&Relationship> {
        self.relationships.values().find(|r| r.rel_type == rel_type)
    }

    /// Number of relationships
    pub fn len(&self) -> usize {
        self.relationships.len()
    }

    /// Whether the collection holds no relationships
    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty()
    }

    /// Generate XML content for the .rels file
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<Relationships xmlns="{}">"#,
            crate::namespaces::PKG_REL
        ));

        // Sort by id for deterministic output
        let mut rels: Vec<_> = self.relationships.values().collect();
        rels.sort_by(|a, b| a.id.cmp(&b.id));

        for rel in rels {
            match rel.target_mode {
                TargetMode::Internal => {
                    xml.push_str(&format!(
                        r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                        rel.id, rel.rel_type, rel.target
                    ));
                }
                TargetMode::External => {
                    xml.push_str(&format!(
                        r#"<Relationship Id="{}" Type="{}" Target="{}" TargetMode="External"/>"#,
                        rel.id, rel.rel_type, rel.target
                    ));
                }
            }
        }

        xml.push_str("</Relationships>");
        xml
    }
}

/// Create the root-level relationships for a new DOCX file
pub fn create_root_rels() -> Relationships {
    let mut rels = Relationships::new();
    rels.add(
        relationship_types::DOCUMENT,
        "word/document.xml",
        TargetMode::Internal,
    );
    rels
}

/// Create the document-level relationships for a new DOCX file
pub fn create_document_rels() -> Relationships {
    let mut rels = Relationships::new();
    rels.add(relationship_types::STYLES, "styles.xml", TargetMode::Internal);
    rels.add(
        relationship_types::SETTINGS,
        "settings.xml",
        TargetMode::Internal,
    );
    rels
}
