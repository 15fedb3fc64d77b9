//! Document statistics.

use crate::model::{Block, Document, HEADING_MAX_LEVEL};
use serde::{Deserialize, Serialize};

/// Counts collected over a document's blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Number of headings per level (index = level)
    pub heading_counts: Vec<u32>,

    /// Number of paragraphs (rules excluded)
    pub paragraph_count: u32,

    /// Number of separator rules
    pub rule_count: u32,

    /// Number of text runs across headings and paragraphs
    pub run_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl DocumentStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self {
            heading_counts: vec![0; HEADING_MAX_LEVEL as usize + 1],
            ..Default::default()
        }
    }

    /// Collect statistics for a whole document.
    pub fn from_document(doc: &Document) -> Self {
        let mut stats = Self::new();
        for block in doc.blocks() {
            stats.add_block(block);
        }
        stats
    }

    /// Account for one block.
    pub fn add_block(&mut self, block: &Block) {
        match block {
            Block::Heading(h) => {
                self.add_heading(h.level);
                self.run_count += h.runs.len() as u32;
                self.count_text(&h.plain_text());
            }
            Block::Paragraph(p) => {
                self.paragraph_count += 1;
                self.run_count += p.runs.len() as u32;
                self.count_text(&p.plain_text());
            }
            Block::Rule => self.rule_count += 1,
        }
    }

    /// Increment the heading count of a level.
    pub fn add_heading(&mut self, level: u8) {
        let index = level.min(HEADING_MAX_LEVEL) as usize;
        if self.heading_counts.len() <= index {
            self.heading_counts.resize(index + 1, 0);
        }
        self.heading_counts[index] += 1;
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Number of headings at a level.
    pub fn headings_at(&self, level: u8) -> u32 {
        self.heading_counts
            .get(level as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Total number of headings.
    pub fn heading_total(&self) -> u32 {
        self.heading_counts.iter().sum()
    }
}
