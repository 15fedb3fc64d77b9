//! DOCX (WordprocessingML) rendering.
//!
//! The document is turned into a minimal but complete OPC package:
//!
//! | Part | Content |
//! |------|---------|
//! | `[Content_Types].xml` | content types of every part |
//! | `_rels/.rels` | package relationships |
//! | `word/document.xml` | body paragraphs and section properties |
//! | `word/styles.xml` | defaults, `Normal`, `Title`, `Heading1`..`Heading9` |
//! | `word/settings.xml` | document settings |
//! | `word/_rels/document.xml.rels` | styles and settings relationships |
//! | `docProps/core.xml` | title, subject, author, timestamps |
//! | `docProps/app.xml` | producing application |

mod document;
mod package;
mod props;
mod styles;

pub use document::document_xml;
pub use package::{content_type, relationship_type, Package, Part, Relationship};
pub use props::{app_xml, core_xml};
pub use styles::{settings_xml, styles_xml};

use super::RenderOptions;
use crate::error::Result;
use crate::model::Document;
use chrono::Utc;
use package::relationships_xml;

/// Part name of the main document.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Render a document to DOCX bytes.
pub fn to_docx(doc: &Document, options: &RenderOptions) -> Result<Vec<u8>> {
    DocxRenderer::new(options.clone()).render(doc)
}

/// Renders a [`Document`] into a DOCX package.
#[derive(Debug, Clone, Default)]
pub struct DocxRenderer {
    options: RenderOptions,
}

impl DocxRenderer {
    /// Create a new renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Assemble all parts of the package without zipping them.
    pub fn package(&self, doc: &Document) -> Result<Package> {
        let mut package = Package::new();

        package.add_part(
            "_rels/.rels",
            content_type::OPC_RELATIONSHIPS,
            relationships_xml(&[
                rel("rId1", relationship_type::OFFICE_DOCUMENT, DOCUMENT_PART),
                rel("rId2", relationship_type::CORE_PROPERTIES, "docProps/core.xml"),
                rel("rId3", relationship_type::EXTENDED_PROPERTIES, "docProps/app.xml"),
            ]),
        );
        package.add_part(
            DOCUMENT_PART,
            content_type::WML_DOCUMENT_MAIN,
            document_xml(doc)?,
        );
        package.add_part(
            "word/styles.xml",
            content_type::WML_STYLES,
            styles_xml(doc.defaults())?,
        );
        package.add_part("word/settings.xml", content_type::WML_SETTINGS, settings_xml()?);
        package.add_part(
            "word/_rels/document.xml.rels",
            content_type::OPC_RELATIONSHIPS,
            relationships_xml(&[
                rel("rId1", relationship_type::STYLES, "styles.xml"),
                rel("rId2", relationship_type::SETTINGS, "settings.xml"),
            ]),
        );
        package.add_part(
            "docProps/core.xml",
            content_type::OPC_CORE_PROPERTIES,
            core_xml(&doc.metadata, Utc::now())?,
        );
        package.add_part(
            "docProps/app.xml",
            content_type::OFC_EXTENDED_PROPERTIES,
            app_xml()?,
        );

        Ok(package)
    }

    /// Render the document to zipped DOCX bytes.
    pub fn render(&self, doc: &Document) -> Result<Vec<u8>> {
        let bytes = self.package(doc)?.to_bytes(self.options.compress)?;
        log::debug!("rendered {} blocks to {} DOCX bytes", doc.len(), bytes.len());
        Ok(bytes)
    }
}

fn rel(id: &str, rel_type: &'static str, target: &str) -> Relationship {
    Relationship {
        id: id.to_string(),
        rel_type,
        target: target.to_string(),
    }
}

/// Escape the five XML special characters.
pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DocumentBuilder;
    use std::io::{Cursor, Read};

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a&b<c>\"d\"'e'"), "a&amp;b&lt;c&gt;&quot;d&quot;&apos;e&apos;");
        assert_eq!(escape_xml("سلام"), "سلام");
    }

    #[test]
    fn test_package_parts() {
        let doc = DocumentBuilder::default().heading(0, "T").build();
        let package = DocxRenderer::default().package(&doc).unwrap();

        let names: Vec<&str> = package.parts().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "_rels/.rels",
                "word/document.xml",
                "word/styles.xml",
                "word/settings.xml",
                "word/_rels/document.xml.rels",
                "docProps/core.xml",
                "docProps/app.xml",
            ]
        );
    }

    #[test]
    fn test_to_docx_is_readable_zip() {
        let doc = DocumentBuilder::default().text("مرحبا").build();
        let bytes = to_docx(&doc, &RenderOptions::default()).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut rels = String::new();
        archive
            .by_name("_rels/.rels")
            .unwrap()
            .read_to_string(&mut rels)
            .unwrap();
        assert!(rels.contains(r#"Target="word/document.xml""#));

        let mut types = String::new();
        archive
            .by_name("[Content_Types].xml")
            .unwrap()
            .read_to_string(&mut types)
            .unwrap();
        assert!(types.contains(r#"PartName="/word/styles.xml""#));
        assert!(types.contains(r#"PartName="/docProps/core.xml""#));
    }

    #[test]
    fn test_uncompressed_output() {
        let doc = DocumentBuilder::default().text("x").build();
        let options = RenderOptions::default().with_compression(false);
        let bytes = to_docx(&doc, &options).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let part = archive.by_name(DOCUMENT_PART).unwrap();
        assert_eq!(part.compression(), zip::CompressionMethod::Stored);
    }
}
