//! Built-in format writers.

use crate::error::Result;
use crate::model::Document;
use crate::render::{to_json, to_markdown, to_text, JsonFormat, RenderOptions};

use super::{DocumentWriter, OutputFormat};

/// DOCX writer backed by the `zip` crate.
#[cfg(feature = "docx")]
#[derive(Debug, Clone, Default)]
pub struct DocxWriter {
    _private: (),
}

#[cfg(feature = "docx")]
impl DocxWriter {
    /// Create a new DOCX writer.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[cfg(feature = "docx")]
impl DocumentWriter for DocxWriter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Docx
    }

    fn name(&self) -> &str {
        "docx"
    }

    fn render(&self, doc: &Document, options: &RenderOptions) -> Result<Vec<u8>> {
        crate::render::to_docx(doc, options)
    }
}

/// Markdown writer.
#[derive(Debug, Clone, Default)]
pub struct MarkdownWriter {
    _private: (),
}

impl MarkdownWriter {
    /// Create a new Markdown writer.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DocumentWriter for MarkdownWriter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }

    fn name(&self) -> &str {
        "markdown"
    }

    fn render(&self, doc: &Document, options: &RenderOptions) -> Result<Vec<u8>> {
        Ok(to_markdown(doc, options)?.into_bytes())
    }
}

/// Plain text writer.
#[derive(Debug, Clone, Default)]
pub struct TextWriter {
    _private: (),
}

impl TextWriter {
    /// Create a new text writer.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DocumentWriter for TextWriter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Text
    }

    fn name(&self) -> &str {
        "text"
    }

    fn render(&self, doc: &Document, options: &RenderOptions) -> Result<Vec<u8>> {
        Ok(to_text(doc, options)?.into_bytes())
    }
}

/// JSON writer, pretty-printed.
#[derive(Debug, Clone, Default)]
pub struct JsonWriter {
    _private: (),
}

impl JsonWriter {
    /// Create a new JSON writer.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DocumentWriter for JsonWriter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn name(&self) -> &str {
        "json"
    }

    fn render(&self, doc: &Document, _options: &RenderOptions) -> Result<Vec<u8>> {
        Ok(to_json(doc, JsonFormat::Pretty)?.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DocumentBuilder;

    #[test]
    fn test_text_writer() {
        let doc = DocumentBuilder::default().text("hello").build();
        let bytes = TextWriter::new()
            .render(&doc, &RenderOptions::default())
            .unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "hello");
    }

    #[test]
    fn test_markdown_writer() {
        let doc = DocumentBuilder::default().heading(1, "Section").build();
        let bytes = MarkdownWriter::new()
            .render(&doc, &RenderOptions::default())
            .unwrap();
        assert!(String::from_utf8(bytes).unwrap().starts_with("## Section"));
    }

    #[test]
    fn test_writer_formats() {
        assert_eq!(JsonWriter::new().format(), OutputFormat::Json);
        assert_eq!(TextWriter::new().name(), "text");
    }

    #[cfg(feature = "docx")]
    #[test]
    fn test_docx_writer_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");
        let doc = DocumentBuilder::default().text("x").build();

        DocxWriter::new()
            .write(&doc, &path, &RenderOptions::default())
            .unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
