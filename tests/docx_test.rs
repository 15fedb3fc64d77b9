//! Integration tests for the produced DOCX package.

#![cfg(feature = "docx")]

use spiritual_homework::{build_and_save, Error, OUTPUT_FILE_NAME};
use std::io::{Cursor, Read};

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    content
}

fn save_worksheet() -> (tempfile::TempDir, Vec<u8>) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(OUTPUT_FILE_NAME);
    build_and_save(&path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    (dir, bytes)
}

#[test]
fn test_build_and_save_creates_single_file() {
    let (dir, bytes) = save_worksheet();

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from(OUTPUT_FILE_NAME)]);
    assert_eq!(&bytes[..4], b"PK\x03\x04");
}

#[test]
fn test_package_contains_all_parts() {
    let (_dir, bytes) = save_worksheet();
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();

    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/app.xml",
            "docProps/core.xml",
            "word/_rels/document.xml.rels",
            "word/document.xml",
            "word/settings.xml",
            "word/styles.xml",
        ]
    );
    assert_eq!(archive.by_index(0).unwrap().name(), "[Content_Types].xml");
}

#[test]
fn test_title_then_single_subtitle() {
    let (_dir, bytes) = save_worksheet();
    let xml = read_part(&bytes, "word/document.xml");

    assert_eq!(xml.matches(r#"<w:pStyle w:val="Title"/>"#).count(), 1);
    assert_eq!(xml.matches(r#"<w:pStyle w:val="Heading1"/>"#).count(), 1);

    // The subtitle is the paragraph right after the title.
    let paragraphs: Vec<&str> = xml.split("<w:p>").skip(1).collect();
    assert!(paragraphs[0].contains(r#"<w:pStyle w:val="Title"/>"#));
    assert!(paragraphs[0].contains("📖 الواجب الروحي الأسبوعي"));
    assert!(paragraphs[1].contains(r#"<w:pStyle w:val="Heading1"/>"#));
}

#[test]
fn test_heading_counts() {
    let (_dir, bytes) = save_worksheet();
    let xml = read_part(&bytes, "word/document.xml");

    assert_eq!(xml.matches(r#"<w:pStyle w:val="Heading2"/>"#).count(), 5);
    assert_eq!(xml.matches(r#"<w:pStyle w:val="Heading3"/>"#).count(), 4);
    assert_eq!(xml.matches(r#"<w:pStyle w:val="Heading4"/>"#).count(), 9);
}

#[test]
fn test_rules_are_centered_underscores() {
    let (_dir, bytes) = save_worksheet();
    let xml = read_part(&bytes, "word/document.xml");

    let rule = format!(
        r#"<w:p><w:pPr><w:jc w:val="center"/></w:pPr><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
        "_".repeat(50)
    );
    assert_eq!(xml.matches(&rule).count(), 7);
}

#[test]
fn test_arabic_paragraphs_are_right_to_left() {
    let (_dir, bytes) = save_worksheet();
    let xml = read_part(&bytes, "word/document.xml");

    assert!(xml.contains(r#"<w:pStyle w:val="Title"/><w:bidi/><w:jc w:val="center"/>"#));
    assert!(xml.contains("<w:rtl/>"));
    assert!(xml.contains("<w:br/>"));
}

#[test]
fn test_styles_use_arial_12pt() {
    let (_dir, bytes) = save_worksheet();
    let xml = read_part(&bytes, "word/styles.xml");

    assert!(xml.contains(r#"w:styleId="Normal""#));
    assert!(xml.contains(r#"w:ascii="Arial""#));
    assert!(xml.contains(r#"w:cs="Arial""#));
    assert!(xml.contains(r#"<w:sz w:val="24"/>"#));
}

#[test]
fn test_core_properties_title() {
    let (_dir, bytes) = save_worksheet();
    let xml = read_part(&bytes, "docProps/core.xml");

    assert!(xml.contains("<dc:title>📖 الواجب الروحي الأسبوعي</dc:title>"));
    assert!(xml.contains("<dcterms:created"));
}

#[test]
fn test_document_and_styles_are_deterministic() {
    let (_dir1, first) = save_worksheet();
    let (_dir2, second) = save_worksheet();

    for part in ["word/document.xml", "word/styles.xml", "[Content_Types].xml"] {
        assert_eq!(read_part(&first, part), read_part(&second, part), "{part}");
    }
}

#[test]
fn test_unwritable_path_returns_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join(OUTPUT_FILE_NAME);

    let result = build_and_save(&path);
    assert!(matches!(result, Err(Error::Io(_))));
    assert!(!path.exists());
}

#[test]
fn test_existing_file_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(OUTPUT_FILE_NAME);
    std::fs::write(&path, b"old").unwrap();

    build_and_save(&path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}
