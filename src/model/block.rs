//! Block-level types.

use super::{Alignment, Paragraph, TextRun};
use serde::{Deserialize, Serialize};

/// Highest heading level a document can carry.
pub const HEADING_MAX_LEVEL: u8 = 9;

/// Number of characters in a separator rule.
pub const RULE_WIDTH: usize = 50;

/// Character a separator rule is drawn with.
pub const RULE_CHAR: char = '_';

/// A content block in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A heading
    Heading(Heading),

    /// A paragraph of text
    Paragraph(Paragraph),

    /// A visual separator
    Rule,
}

impl Block {
    /// The paragraph a separator rule renders as.
    pub fn rule_paragraph() -> Paragraph {
        Paragraph::with_text(rule_text()).centered()
    }

    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading(_))
    }

    /// Check if this block is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    /// Check if this block is a separator rule.
    pub fn is_rule(&self) -> bool {
        matches!(self, Block::Rule)
    }

    /// Get the heading level, if this is a heading.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Block::Heading(h) => Some(h.level),
            _ => None,
        }
    }

    /// Get plain text content of the block.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading(h) => h.plain_text(),
            Block::Paragraph(p) => p.plain_text(),
            Block::Rule => rule_text(),
        }
    }
}

/// Text of a separator rule.
pub fn rule_text() -> String {
    std::iter::repeat(RULE_CHAR).take(RULE_WIDTH).collect()
}

/// A heading.
///
/// Level 0 is the document title; levels 1 and up are section headings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Nesting level (0 = title)
    pub level: u8,

    /// Text runs in the heading
    pub runs: Vec<TextRun>,

    /// Explicit alignment, or `None` to inherit from the heading style
    pub alignment: Option<Alignment>,
}

impl Heading {
    /// Create a heading with plain text. Levels above 9 are clamped.
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        Self {
            level: level.min(HEADING_MAX_LEVEL),
            runs: vec![TextRun::new(text)],
            alignment: None,
        }
    }

    /// Set an explicit alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Center the heading.
    pub fn centered(self) -> Self {
        self.with_alignment(Alignment::Center)
    }

    /// Style identifier used for this heading level.
    pub fn style_id(&self) -> String {
        style_id_for_level(self.level)
    }

    /// Check if this heading is the document title.
    pub fn is_title(&self) -> bool {
        self.level == 0
    }

    /// Get plain text content of the heading.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// Style identifier for a heading level (`Title`, `Heading1`, ...).
pub fn style_id_for_level(level: u8) -> String {
    match level {
        0 => "Title".to_string(),
        n => format!("Heading{}", n.min(HEADING_MAX_LEVEL)),
    }
}
