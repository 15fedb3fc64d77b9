//! Document-level types.

use super::{Block, StyleDefaults};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An ordered, append-only sequence of content blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, author, etc.)
    pub metadata: Metadata,

    /// Style defaults, fixed at construction
    defaults: StyleDefaults,

    /// Content blocks in authoring order
    blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document with the given style defaults.
    pub fn new(defaults: StyleDefaults) -> Self {
        Self {
            metadata: Metadata::default(),
            defaults,
            blocks: Vec::new(),
        }
    }

    /// Append a block after all existing blocks.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Get the blocks in authoring order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Get the style defaults.
    pub fn defaults(&self) -> &StyleDefaults {
        &self.defaults
    }

    /// Get the number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has any blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Count the headings at a given level.
    pub fn heading_count(&self, level: u8) -> usize {
        self.blocks
            .iter()
            .filter(|b| b.heading_level() == Some(level))
            .count()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(StyleDefaults::default())
    }
}

/// Document metadata, written to the package core properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Keywords
    pub keywords: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,

    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Create metadata with a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Convert metadata to YAML frontmatter format.
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        if let Some(ref title) = self.title {
            lines.push(format!("title: \"{}\"", escape_yaml(title)));
        }
        if let Some(ref subject) = self.subject {
            lines.push(format!("subject: \"{}\"", escape_yaml(subject)));
        }
        if let Some(ref author) = self.author {
            lines.push(format!("author: \"{}\"", escape_yaml(author)));
        }
        if let Some(ref keywords) = self.keywords {
            lines.push(format!("keywords: \"{}\"", escape_yaml(keywords)));
        }
        if let Some(ref created) = self.created {
            lines.push(format!("created: {}", created.to_rfc3339()));
        }
        if let Some(ref modified) = self.modified {
            lines.push(format!("modified: {}", modified.to_rfc3339()));
        }

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
