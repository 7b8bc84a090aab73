//! The top-level document being built

use crate::writer::DocxWriter;
use crate::{DocxResult, Paragraph, Table};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Cursor};
use std::path::Path;

/// Page margin configuration, in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageMargins {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl PageMargins {
    /// Margins given in inches (1 inch = 72 points)
    pub fn from_inches(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self {
            top: top * 72.0,
            bottom: bottom * 72.0,
            left: left * 72.0,
            right: right * 72.0,
        }
    }

    /// Normal margins (1 inch all around)
    pub fn normal() -> Self {
        Self {
            top: 72.0,
            bottom: 72.0,
            left: 72.0,
            right: 72.0,
        }
    }
}

impl Default for PageMargins {
    fn default() -> Self {
        Self::normal()
    }
}

/// A body-level element
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BodyElement {
    Paragraph(Paragraph),
    Table(Table),
}

/// An in-progress document, built in a single linear pass and then
/// serialized to DOCX bytes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    pub page_margins: PageMargins,
    pub body: Vec<BodyElement>,
}

impl Document {
    /// Create an empty document with normal margins
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a paragraph and return a mutable reference to it
    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Paragraph {
        self.body.push(BodyElement::Paragraph(paragraph));
        match self.body.last_mut() {
            Some(BodyElement::Paragraph(p)) => p,
            _ => unreachable!("a paragraph was just pushed"),
        }
    }

    /// Append an empty paragraph (vertical spacing)
    pub fn add_empty_paragraph(&mut self) {
        self.body.push(BodyElement::Paragraph(Paragraph::new()));
    }

    /// Append a heading. Level 0 maps to the `Title` style, level `n >= 1`
    /// to `Heading{n}`.
    pub fn add_heading(&mut self, text: impl Into<String>, level: u8) -> &mut Paragraph {
        let style_id = if level == 0 {
            "Title".to_string()
        } else {
            format!("Heading{}", level)
        };
        let mut para = Paragraph::with_style(style_id);
        para.add_text(text);
        self.add_paragraph(para)
    }

    /// Append a table and return a mutable reference to it
    pub fn add_table(&mut self, table: Table) -> &mut Table {
        self.body.push(BodyElement::Table(table));
        match self.body.last_mut() {
            Some(BodyElement::Table(t)) => t,
            _ => unreachable!("a table was just pushed"),
        }
    }

    /// Body-level paragraphs (table cell paragraphs not included)
    pub fn paragraphs_mut(&mut self) -> impl Iterator<Item = &mut Paragraph> {
        self.body.iter_mut().filter_map(|el| match el {
            BodyElement::Paragraph(p) => Some(p),
            BodyElement::Table(_) => None,
        })
    }

    /// Tables in body order
    pub fn tables_mut(&mut self) -> impl Iterator<Item = &mut Table> {
        self.body.iter_mut().filter_map(|el| match el {
            BodyElement::Paragraph(_) => None,
            BodyElement::Table(t) => Some(t),
        })
    }

    /// Serialize as a DOCX file into an in-memory byte buffer
    pub fn save_to_bytes(&self) -> DocxResult<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        DocxWriter::new(&mut buffer).write(self)?;
        Ok(buffer.into_inner())
    }

    /// Serialize as a DOCX file on disk
    pub fn save_to_file(&self, path: &Path) -> DocxResult<()> {
        let file = File::create(path)?;
        DocxWriter::new(BufWriter::new(file)).write(self)
    }
}
