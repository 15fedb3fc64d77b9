//! `word/styles.xml` and `word/settings.xml` generation.

use crate::error::Result;
use crate::model::{style_id_for_level, StyleDefaults, HEADING_MAX_LEVEL};
use std::fmt::Write as FmtWrite;

use super::document::WML_MAIN;
use super::escape_xml;

/// Character formatting of a heading style.
struct HeadingLook {
    size: u32,
    bold: bool,
    italic: bool,
    color: &'static str,
    space_before: u32,
}

/// Look of a heading level; sizes in half-points, spacing in twips.
fn heading_look(level: u8) -> HeadingLook {
    match level {
        0 => HeadingLook {
            size: 52,
            bold: false,
            italic: false,
            color: "17365D",
            space_before: 0,
        },
        1 => HeadingLook {
            size: 28,
            bold: true,
            italic: false,
            color: "365F91",
            space_before: 480,
        },
        2 => HeadingLook {
            size: 26,
            bold: true,
            italic: false,
            color: "4F81BD",
            space_before: 200,
        },
        3 => HeadingLook {
            size: 24,
            bold: true,
            italic: false,
            color: "4F81BD",
            space_before: 200,
        },
        4 => HeadingLook {
            size: 24,
            bold: true,
            italic: true,
            color: "4F81BD",
            space_before: 200,
        },
        _ => HeadingLook {
            size: 24,
            bold: false,
            italic: level % 2 == 1,
            color: "243F60",
            space_before: 200,
        },
    }
}

/// Generate the styles part.
///
/// The style defaults go into both `w:docDefaults` and the `Normal` style, so
/// every paragraph and heading inherits the font family and size.
pub fn styles_xml(defaults: &StyleDefaults) -> Result<String> {
    let font = escape_xml(&defaults.font_family);
    let size = defaults.half_points();
    let mut xml = String::with_capacity(8192);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    write!(xml, r#"<w:styles xmlns:w="{}">"#, WML_MAIN)?;

    xml.push_str("<w:docDefaults><w:rPrDefault><w:rPr>");
    write_fonts(&mut xml, &font)?;
    write!(xml, r#"<w:sz w:val="{size}"/><w:szCs w:val="{size}"/>"#)?;
    xml.push_str("</w:rPr></w:rPrDefault>");
    xml.push_str(r#"<w:pPrDefault><w:pPr><w:spacing w:after="200" w:line="276" w:lineRule="auto"/></w:pPr></w:pPrDefault>"#);
    xml.push_str("</w:docDefaults>");

    xml.push_str(r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal">"#);
    xml.push_str(r#"<w:name w:val="Normal"/><w:qFormat/><w:rPr>"#);
    write_fonts(&mut xml, &font)?;
    write!(xml, r#"<w:sz w:val="{size}"/><w:szCs w:val="{size}"/>"#)?;
    xml.push_str("</w:rPr></w:style>");

    for level in 0..=HEADING_MAX_LEVEL {
        write_heading_style(&mut xml, level)?;
    }

    xml.push_str("</w:styles>");
    Ok(xml)
}

fn write_fonts(xml: &mut String, font: &str) -> Result<()> {
    write!(
        xml,
        r#"<w:rFonts w:ascii="{f}" w:hAnsi="{f}" w:eastAsia="{f}" w:cs="{f}"/>"#,
        f = font
    )?;
    Ok(())
}

fn write_heading_style(xml: &mut String, level: u8) -> Result<()> {
    let id = style_id_for_level(level);
    let name = if level == 0 {
        "Title".to_string()
    } else {
        format!("heading {}", level)
    };
    let look = heading_look(level);

    write!(
        xml,
        r#"<w:style w:type="paragraph" w:styleId="{}"><w:name w:val="{}"/>"#,
        id, name
    )?;
    xml.push_str(r#"<w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/>"#);

    xml.push_str("<w:pPr><w:keepNext/><w:keepLines/>");
    write!(
        xml,
        r#"<w:spacing w:before="{}" w:after="{}"/>"#,
        look.space_before,
        if level == 0 { 300 } else { 0 }
    )?;
    if level > 0 {
        write!(xml, r#"<w:outlineLvl w:val="{}"/>"#, level - 1)?;
    }
    xml.push_str("</w:pPr>");

    xml.push_str("<w:rPr>");
    if look.bold {
        xml.push_str("<w:b/><w:bCs/>");
    }
    if look.italic {
        xml.push_str("<w:i/><w:iCs/>");
    }
    write!(xml, r#"<w:color w:val="{}"/>"#, look.color)?;
    write!(
        xml,
        r#"<w:sz w:val="{s}"/><w:szCs w:val="{s}"/>"#,
        s = look.size
    )?;
    xml.push_str("</w:rPr></w:style>");

    Ok(())
}

/// Generate the settings part.
pub fn settings_xml() -> Result<String> {
    let mut xml = String::with_capacity(256);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    write!(xml, r#"<w:settings xmlns:w="{}">"#, WML_MAIN)?;
    xml.push_str(r#"<w:defaultTabStop w:val="720"/>"#);
    xml.push_str(r#"<w:characterSpacingControl w:val="doNotCompress"/>"#);
    xml.push_str("</w:settings>");
    Ok(xml)
}
