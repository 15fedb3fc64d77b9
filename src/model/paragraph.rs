//! Paragraph and text-level types.

use serde::{Deserialize, Serialize};

/// A paragraph of text content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in the paragraph
    pub runs: Vec<TextRun>,

    /// Explicit alignment, or `None` to inherit from the paragraph style
    pub alignment: Option<Alignment>,
}

impl Paragraph {
    /// Create a paragraph from a list of runs.
    pub fn new(runs: Vec<TextRun>) -> Self {
        Self {
            runs,
            alignment: None,
        }
    }

    /// Create a paragraph with a single plain run.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::new(vec![TextRun::new(text)])
    }

    /// Create a paragraph of bullet lines, one plain run per line.
    ///
    /// Every line except the last carries a trailing line break so the
    /// bullets stack inside a single paragraph.
    pub fn bullets(lines: &[&str]) -> Self {
        let last = lines.len().saturating_sub(1);
        let runs = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                if i < last {
                    TextRun::new(format!("{}\n", line))
                } else {
                    TextRun::new(*line)
                }
            })
            .collect();
        Self::new(runs)
    }

    /// Set an explicit alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Center the paragraph.
    pub fn centered(self) -> Self {
        self.with_alignment(Alignment::Center)
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Check if the paragraph is empty.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(TextRun::is_empty)
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// A run of text with consistent styling.
///
/// The text may contain `\n`, which is kept as a line break inside the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Text styling
    pub style: TextStyle,
}

impl TextRun {
    /// Create a new text run with default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle {
                bold: true,
                ..Default::default()
            },
        }
    }

    /// Create an italic text run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle {
                italic: true,
                ..Default::default()
            },
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterate over the lines of the run, split at embedded line breaks.
    pub fn lines(&self) -> std::str::Split<'_, char> {
        self.text.split('\n')
    }
}

/// Text styling properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,
}

impl TextStyle {
    /// Check if any styling is applied.
    pub fn has_styling(&self) -> bool {
        self.bold || self.italic
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

impl Alignment {
    /// WordprocessingML `w:jc` value.
    pub fn as_ooxml(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "both",
        }
    }
}
