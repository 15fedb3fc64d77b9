//! # spiritual-homework
//!
//! Generator for a fixed Arabic weekly spiritual homework worksheet,
//! written as a Word (`.docx`) document.
//!
//! The worksheet content is a literal plan built into a format-neutral
//! [`Document`] model, then handed to a renderer. DOCX is the primary output;
//! Markdown, plain text and JSON renderers exist for previewing.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> spiritual_homework::Result<()> {
//!     spiritual_homework::build_and_save(spiritual_homework::OUTPUT_FILE_NAME)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **DOCX output**: complete OOXML package with styles and properties
//! - **Right-to-left text**: paragraph direction resolved per paragraph
//! - **Fail-clean saving**: a failed save leaves no partial file behind
//! - **Preview formats**: Markdown, plain text, JSON

pub mod builder;
pub mod content;
pub mod error;
pub mod export;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use builder::DocumentBuilder;
pub use content::{weekly_homework, weekly_homework_with, OUTPUT_FILE_NAME, TITLE};
pub use error::{Error, Result};
pub use export::{DocumentWriter, OutputFormat, WriterRegistry};
pub use model::{
    Alignment, Block, Document, Heading, Metadata, Paragraph, StyleDefaults, TextDirection,
    TextRun, TextStyle,
};
pub use render::{DocumentStats, JsonFormat, RenderOptions};

use std::path::{Path, PathBuf};

/// Build the worksheet document with the default style (Arial, 12pt).
///
/// # Example
///
/// ```
/// let doc = spiritual_homework::build();
/// assert_eq!(doc.heading_count(4), 9);
/// ```
pub fn build() -> Document {
    weekly_homework()
}

/// Build the worksheet and save it as a `.docx` file at `path`.
///
/// # Errors
///
/// Returns [`Error::MissingDependency`] when this build has no DOCX writer
/// and [`Error::Io`] when the file cannot be written. In both cases no file
/// is created and an existing file at `path` is left untouched.
///
/// # Example
///
/// ```no_run
/// spiritual_homework::build_and_save("homework.docx")?;
/// # Ok::<(), spiritual_homework::Error>(())
/// ```
pub fn build_and_save<P: AsRef<Path>>(path: P) -> Result<()> {
    Worksheet::new().save(path)?;
    Ok(())
}

/// Builder for generating and saving the worksheet.
///
/// # Example
///
/// ```no_run
/// use spiritual_homework::{OutputFormat, Worksheet};
///
/// let path = Worksheet::new()
///     .with_format(OutputFormat::Markdown)
///     .save("homework.md")?;
/// println!("{}", path.display());
/// # Ok::<(), spiritual_homework::Error>(())
/// ```
pub struct Worksheet {
    style: StyleDefaults,
    metadata: Option<Metadata>,
    format: OutputFormat,
    render_options: RenderOptions,
    registry: WriterRegistry,
}

impl Worksheet {
    /// Create a new worksheet builder writing DOCX with default style.
    pub fn new() -> Self {
        Self {
            style: StyleDefaults::default(),
            metadata: None,
            format: OutputFormat::Docx,
            render_options: RenderOptions::default(),
            registry: WriterRegistry::with_defaults(),
        }
    }

    /// Set the style defaults.
    pub fn with_style(mut self, style: StyleDefaults) -> Self {
        self.style = style;
        self
    }

    /// Replace the document metadata.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Use a custom writer registry.
    pub fn with_registry(mut self, registry: WriterRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Get the output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Build the worksheet document.
    pub fn document(&self) -> Document {
        let mut doc = weekly_homework_with(self.style.clone());
        if let Some(ref metadata) = self.metadata {
            doc.metadata = metadata.clone();
        }
        doc
    }

    /// Render the worksheet to bytes in the configured format.
    pub fn render(&self) -> Result<Vec<u8>> {
        let doc = self.document();
        self.registry.render(&doc, self.format, &self.render_options)
    }

    /// Render the worksheet and save it to `path`.
    ///
    /// Returns the path that was written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf> {
        let path = path.as_ref();
        let doc = self.document();
        self.registry.write(&doc, self.format, path, &self.render_options)?;
        Ok(path.to_path_buf())
    }
}

impl Default for Worksheet {
    fn default() -> Self {
        Self::new()
    }
}
