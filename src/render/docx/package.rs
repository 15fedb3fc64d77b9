//! OPC package assembly for DOCX output.
//!
//! Collects the parts of a package, generates `[Content_Types].xml` from
//! them, and writes everything into a zip archive held in memory.

use crate::error::Result;
use std::collections::BTreeMap;
use std::io::{Cursor, Write};
use zip::write::{SimpleFileOptions, ZipWriter};

use super::escape_xml;

/// Content types used by the parts this crate writes.
pub mod content_type {
    pub const OPC_RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
    pub const OPC_CORE_PROPERTIES: &str =
        "application/vnd.openxmlformats-package.core-properties+xml";
    pub const OFC_EXTENDED_PROPERTIES: &str =
        "application/vnd.openxmlformats-officedocument.extended-properties+xml";
    pub const WML_DOCUMENT_MAIN: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
    pub const WML_STYLES: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
    pub const WML_SETTINGS: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml";
    pub const XML: &str = "application/xml";
}

/// Relationship type URIs used by the parts this crate writes.
pub mod relationship_type {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const EXTENDED_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
    pub const STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    pub const SETTINGS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/settings";
}

/// Name of the content-types part.
pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";

/// A single part of the package.
#[derive(Debug, Clone)]
pub struct Part {
    /// Part name inside the archive, without the leading slash
    pub name: String,
    /// Content type of the part
    pub content_type: &'static str,
    /// Serialized part content
    pub data: Vec<u8>,
}

/// A relationship from a source part (or the package) to a target.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship id (`rId1`, ...)
    pub id: String,
    /// Relationship type URI
    pub rel_type: &'static str,
    /// Target, relative to the source part's directory
    pub target: String,
}

/// Build the XML of a relationships part.
pub fn relationships_xml(rels: &[Relationship]) -> String {
    let mut xml = String::with_capacity(256 + rels.len() * 160);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for rel in rels {
        xml.push_str(&format!(
            r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
            escape_xml(&rel.id),
            escape_xml(rel.rel_type),
            escape_xml(&rel.target)
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

/// An OPC package under construction.
#[derive(Debug, Default)]
pub struct Package {
    parts: Vec<Part>,
}

impl Package {
    /// Create an empty package.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part.
    pub fn add_part(
        &mut self,
        name: impl Into<String>,
        content_type: &'static str,
        data: impl Into<Vec<u8>>,
    ) {
        self.parts.push(Part {
            name: name.into(),
            content_type,
            data: data.into(),
        });
    }

    /// Get the parts in insertion order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Generate `[Content_Types].xml` for the current parts.
    ///
    /// `.rels` and `.xml` parts with the standard content type are covered by
    /// `Default` entries; everything else gets an `Override`.
    pub fn content_types_xml(&self) -> String {
        let mut defaults = BTreeMap::new();
        let mut overrides = BTreeMap::new();

        for part in &self.parts {
            let ext = part.name.rsplit('.').next().unwrap_or("");
            match (ext, part.content_type) {
                ("rels", content_type::OPC_RELATIONSHIPS) | ("xml", content_type::XML) => {
                    defaults.insert(ext.to_string(), part.content_type);
                }
                _ => {
                    overrides.insert(format!("/{}", part.name), part.content_type);
                }
            }
        }
        defaults.entry("rels".to_string()).or_insert(content_type::OPC_RELATIONSHIPS);
        defaults.entry("xml".to_string()).or_insert(content_type::XML);

        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );
        for (ext, ct) in &defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(ct)
            ));
        }
        for (name, ct) in &overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(name),
                escape_xml(ct)
            ));
        }
        xml.push_str("</Types>");
        xml
    }

    /// Serialize the package to zip bytes.
    ///
    /// `[Content_Types].xml` is always the first entry.
    pub fn to_bytes(&self, compress: bool) -> Result<Vec<u8>> {
        let method = if compress {
            zip::CompressionMethod::Deflated
        } else {
            zip::CompressionMethod::Stored
        };
        let options = SimpleFileOptions::default().compression_method(method);

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

        writer.start_file(CONTENT_TYPES_PART, options)?;
        writer.write_all(self.content_types_xml().as_bytes())?;

        for part in &self.parts {
            writer.start_file(part.name.as_str(), options)?;
            writer.write_all(&part.data)?;
        }

        let cursor = writer.finish()?;
        let bytes = cursor.into_inner();
        log::debug!(
            "packaged {} parts into {} bytes",
            self.parts.len() + 1,
            bytes.len()
        );
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_content_types_xml() {
        let mut package = Package::new();
        package.add_part("_rels/.rels", content_type::OPC_RELATIONSHIPS, "x");
        package.add_part("word/document.xml", content_type::WML_DOCUMENT_MAIN, "x");

        let xml = package.content_types_xml();
        assert!(xml.contains(r#"<Default Extension="rels""#));
        assert!(xml.contains(r#"<Default Extension="xml" ContentType="application/xml"/>"#));
        assert!(xml.contains(r#"<Override PartName="/word/document.xml""#));
        assert!(!xml.contains(r#"PartName="/_rels/.rels""#));
    }

    #[test]
    fn test_relationships_xml() {
        let xml = relationships_xml(&[Relationship {
            id: "rId1".to_string(),
            rel_type: relationship_type::STYLES,
            target: "styles.xml".to_string(),
        }]);
        assert!(xml.contains(r#"<Relationship Id="rId1""#));
        assert!(xml.contains(r#"Target="styles.xml""#));
    }

    #[test]
    fn test_to_bytes_writes_content_types_first() {
        let mut package = Package::new();
        package.add_part("word/document.xml", content_type::WML_DOCUMENT_MAIN, "<doc/>");

        let bytes = package.to_bytes(true).unwrap();
        assert_eq!(&bytes[..4], b"PK\x03\x04");

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);
        assert_eq!(archive.by_index(0).unwrap().name(), CONTENT_TYPES_PART);

        let mut content = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "<doc/>");
    }
}
