//! Core and extended document properties (`docProps/`).

use crate::error::Result;
use crate::model::Metadata;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Write as FmtWrite;

use super::escape_xml;

/// Application name recorded in the extended properties.
pub const APPLICATION: &str = "spiritual-homework";

/// Generate `docProps/core.xml`.
///
/// A missing creation time is filled with `now`; a missing modification time
/// falls back to the creation time.
pub fn core_xml(metadata: &Metadata, now: DateTime<Utc>) -> Result<String> {
    let created = metadata.created.unwrap_or(now);
    let modified = metadata.modified.unwrap_or(created);

    let mut xml = String::with_capacity(1024);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(concat!(
        r#"<cp:coreProperties"#,
        r#" xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties""#,
        r#" xmlns:dc="http://purl.org/dc/elements/1.1/""#,
        r#" xmlns:dcterms="http://purl.org/dc/terms/""#,
        r#" xmlns:dcmitype="http://purl.org/dc/dcmitype/""#,
        r#" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#
    ));

    if let Some(ref title) = metadata.title {
        write!(xml, "<dc:title>{}</dc:title>", escape_xml(title))?;
    }
    if let Some(ref subject) = metadata.subject {
        write!(xml, "<dc:subject>{}</dc:subject>", escape_xml(subject))?;
    }
    if let Some(ref author) = metadata.author {
        write!(xml, "<dc:creator>{}</dc:creator>", escape_xml(author))?;
    }
    if let Some(ref keywords) = metadata.keywords {
        write!(xml, "<cp:keywords>{}</cp:keywords>", escape_xml(keywords))?;
    }
    write!(
        xml,
        r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
        created.to_rfc3339_opts(SecondsFormat::Secs, true)
    )?;
    write!(
        xml,
        r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>"#,
        modified.to_rfc3339_opts(SecondsFormat::Secs, true)
    )?;

    xml.push_str("</cp:coreProperties>");
    Ok(xml)
}

/// Generate `docProps/app.xml`.
pub fn app_xml() -> Result<String> {
    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties">"#);
    write!(xml, "<Application>{}</Application>", APPLICATION)?;
    write!(
        xml,
        "<AppVersion>{}</AppVersion>",
        app_version(env!("CARGO_PKG_VERSION"))
    )?;
    xml.push_str("</Properties>");
    Ok(xml)
}

/// Office expects `AppVersion` as `XX.YYYY`.
fn app_version(version: &str) -> String {
    let mut parts = version.split('.');
    let major: u32 = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    let minor: u32 = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    format!("{:02}.{:04}", major, minor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_core_xml_fills_timestamps() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        let metadata = Metadata::with_title("عنوان");

        let xml = core_xml(&metadata, now).unwrap();
        assert!(xml.contains("<dc:title>عنوان</dc:title>"));
        assert!(xml.contains(">2024-05-01T08:30:00Z</dcterms:created>"));
        assert!(xml.contains(">2024-05-01T08:30:00Z</dcterms:modified>"));
        assert!(!xml.contains("<dc:creator>"));
    }

    #[test]
    fn test_core_xml_uses_metadata_times() {
        let created = Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap();
        let metadata = Metadata {
            created: Some(created),
            author: Some("A & B".to_string()),
            ..Default::default()
        };
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();

        let xml = core_xml(&metadata, now).unwrap();
        assert!(xml.contains(">2023-01-02T03:04:05Z</dcterms:created>"));
        assert!(xml.contains("<dc:creator>A &amp; B</dc:creator>"));
    }

    #[test]
    fn test_app_version() {
        assert_eq!(app_version("0.1.0"), "00.0001");
        assert_eq!(app_version("12.34.5"), "12.0034");
        assert!(app_xml().unwrap().contains("<Application>spiritual-homework</Application>"));
    }
}
