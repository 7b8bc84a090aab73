//! Formatting properties applied to paragraphs and runs

use serde::{Deserialize, Serialize};

/// Text alignment options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Line spacing configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LineSpacing {
    /// Multiple of line height (1.0 = single, 1.5 = 1.5 lines, 2.0 = double)
    Multiple(f32),
    /// Exact spacing in points
    Exact(f32),
    /// At least this many points
    AtLeast(f32),
}

impl Default for LineSpacing {
    fn default() -> Self {
        LineSpacing::Multiple(1.0)
    }
}

/// Character formatting properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterProperties {
    /// Font family name
    pub font_family: Option<String>,
    /// Font size in points
    pub font_size: Option<f32>,
    /// Bold formatting
    pub bold: Option<bool>,
    /// Italic formatting
    pub italic: Option<bool>,
    /// Text color as an RRGGBB hex string
    pub color: Option<String>,
}

impl CharacterProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another set of properties on top of this one.
    /// Properties from `other` override properties from `self` when present.
    pub fn merge(&self, other: &CharacterProperties) -> CharacterProperties {
        CharacterProperties {
            font_family: other
                .font_family
                .clone()
                .or_else(|| self.font_family.clone()),
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            italic: other.italic.or(self.italic),
            color: other.color.clone().or_else(|| self.color.clone()),
        }
    }

    /// Check if no property is set
    pub fn is_empty(&self) -> bool {
        self.font_family.is_none()
            && self.font_size.is_none()
            && self.bold.is_none()
            && self.italic.is_none()
            && self.color.is_none()
    }
}

/// Paragraph formatting properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphProperties {
    /// Text alignment
    pub alignment: Option<Alignment>,
    /// Line spacing
    pub line_spacing: Option<LineSpacing>,
}

impl ParagraphProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another set of properties on top of this one
    pub fn merge(&self, other: &ParagraphProperties) -> ParagraphProperties {
        ParagraphProperties {
            alignment: other.alignment.or(self.alignment),
            line_spacing: other.line_spacing.or(self.line_spacing),
        }
    }

    /// Check if no property is set
    pub fn is_empty(&self) -> bool {
        self.alignment.is_none() && self.line_spacing.is_none()
    }
}
