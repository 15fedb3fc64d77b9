//! Append-only document construction.

use crate::model::{Block, Document, Heading, Metadata, Paragraph, StyleDefaults};

/// Builds a [`Document`] one block at a time, in authoring order.
///
/// Every method appends exactly one block; there is no way to reorder or
/// revisit a block once it has been handed over.
///
/// # Example
///
/// ```
/// use spiritual_homework::builder::DocumentBuilder;
/// use spiritual_homework::model::{Paragraph, StyleDefaults, TextRun};
///
/// let doc = DocumentBuilder::new(StyleDefaults::default())
///     .centered_heading(0, "Title")
///     .rule()
///     .paragraph(Paragraph::new(vec![TextRun::bold("• "), TextRun::new("item")]))
///     .build();
/// assert_eq!(doc.len(), 3);
/// ```
#[derive(Debug)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Start an empty document with the given style defaults.
    pub fn new(defaults: StyleDefaults) -> Self {
        Self {
            document: Document::new(defaults),
        }
    }

    /// Set the document metadata.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.document.metadata = metadata;
        self
    }

    /// Append a block.
    pub fn block(mut self, block: Block) -> Self {
        log::trace!("append block #{}", self.document.len());
        self.document.push(block);
        self
    }

    /// Append a heading with inherited alignment.
    pub fn heading(self, level: u8, text: impl Into<String>) -> Self {
        self.block(Block::Heading(Heading::new(level, text)))
    }

    /// Append a center-aligned heading.
    pub fn centered_heading(self, level: u8, text: impl Into<String>) -> Self {
        self.block(Block::Heading(Heading::new(level, text).centered()))
    }

    /// Append a paragraph.
    pub fn paragraph(self, paragraph: Paragraph) -> Self {
        self.block(Block::Paragraph(paragraph))
    }

    /// Append a paragraph with a single plain run.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.paragraph(Paragraph::with_text(text))
    }

    /// Append a separator rule.
    pub fn rule(self) -> Self {
        self.block(Block::Rule)
    }

    /// Finish building.
    pub fn build(self) -> Document {
        log::debug!("built document with {} blocks", self.document.len());
        self.document
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new(StyleDefaults::default())
    }
}
