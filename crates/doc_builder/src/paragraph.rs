//! Paragraphs and text runs

use crate::{Alignment, CharacterProperties, ParagraphProperties};
use serde::{Deserialize, Serialize};

/// A text run - contiguous text with consistent formatting
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Run {
    /// The text content of this run; `'\n'` becomes a line break on output
    pub text: String,
    /// Direct formatting for this run
    pub formatting: CharacterProperties,
}

impl Run {
    /// Create a run with plain text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            formatting: CharacterProperties::default(),
        }
    }

    /// Create a run with direct formatting
    pub fn with_formatting(text: impl Into<String>, formatting: CharacterProperties) -> Self {
        Self {
            text: text.into(),
            formatting,
        }
    }

    /// Create a bold run
    pub fn bold(text: impl Into<String>) -> Self {
        Self::with_formatting(
            text,
            CharacterProperties {
                bold: Some(true),
                ..Default::default()
            },
        )
    }

    /// Create an italic run
    pub fn italic(text: impl Into<String>) -> Self {
        Self::with_formatting(
            text,
            CharacterProperties {
                italic: Some(true),
                ..Default::default()
            },
        )
    }

    /// Apply formatting on top of what the run already carries
    pub fn apply_formatting(&mut self, formatting: &CharacterProperties) {
        self.formatting = self.formatting.merge(formatting);
    }
}

/// A paragraph containing text runs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph style reference (e.g. "Normal", "Title", "Heading1")
    pub style_id: Option<String>,
    /// Direct paragraph formatting
    pub formatting: ParagraphProperties,
    /// Runs in document order
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Create an empty paragraph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty paragraph with a style reference
    pub fn with_style(style_id: impl Into<String>) -> Self {
        Self {
            style_id: Some(style_id.into()),
            ..Default::default()
        }
    }

    /// Create a paragraph containing a single plain-text run
    pub fn text(text: impl Into<String>) -> Self {
        let mut para = Self::new();
        para.runs.push(Run::new(text));
        para
    }

    /// Append a run
    pub fn add_run(&mut self, run: Run) -> &mut Self {
        self.runs.push(run);
        self
    }

    /// Append a plain-text run
    pub fn add_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.runs.push(Run::new(text));
        self
    }

    /// Set the alignment
    pub fn align(&mut self, alignment: Alignment) -> &mut Self {
        self.formatting.alignment = Some(alignment);
        self
    }

    /// Concatenated text of all runs
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}
